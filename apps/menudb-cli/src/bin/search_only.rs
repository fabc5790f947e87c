use std::env;
use std::path::PathBuf;

use menudb_cli::{init_tracing, open_session, render_outcome};
use menudb_core::config::Config;
use menudb_core::CategoryFilter;
use menudb_session::SearchOutcome;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [--category C] [--limit N] [--catalog menu.csv] [--json]", args[0]);
        eprintln!("Example: {} 'kopi susu' --category Cold --limit 5", args[0]);
        std::process::exit(1);
    }
    let query_text = &args[1];
    let mut filter = CategoryFilter::All;
    let mut limit = None;
    let mut catalog = None;
    let mut json = false;
    let mut i = 2; while i < args.len() { match args[i].as_str() {
        "--category" => { if i + 1 < args.len() { filter = args[i + 1].parse()?; i += 1; } else { eprintln!("Error: --category requires a value"); std::process::exit(1); } }
        "--limit" => { if i + 1 < args.len() { if let Ok(l) = args[i + 1].parse::<usize>() { limit = Some(l); i += 1; } else { eprintln!("Error: --limit requires a number"); std::process::exit(1); } } else { eprintln!("Error: --limit requires a number"); std::process::exit(1); } }
        "--catalog" => { if i + 1 < args.len() { catalog = Some(PathBuf::from(&args[i + 1])); i += 1; } else { eprintln!("Error: --catalog requires a path"); std::process::exit(1); } }
        "--json" => json = true,
        other => { eprintln!("Unknown argument: {}", other); std::process::exit(1); } } i += 1; }

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let (session, _) = open_session(&config, catalog)?;
    let mut outcome = session.submit(query_text, filter)?;
    if let (Some(l), SearchOutcome::Matches { results }) = (limit, &mut outcome) { results.truncate(l); }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_outcome(query_text.trim(), filter, &outcome);
    }
    Ok(())
}
