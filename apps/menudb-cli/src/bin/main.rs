use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use menudb_cli::{command_arg, init_tracing, open_session, render_outcome, render_popular};
use menudb_core::config::Config;
use menudb_core::{CategoryFilter, Error};

fn parse_args() -> Option<PathBuf> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut catalog = None;
    let mut i = 0; while i < args.len() { match args[i].as_str() {
        "--catalog" | "-c" => { if i + 1 < args.len() { catalog = Some(PathBuf::from(&args[i + 1])); i += 1; } else { eprintln!("Error: --catalog requires a path"); std::process::exit(1); } }
        "--help" | "-h" => { eprintln!("Usage: menudb [--catalog <menu.csv>]"); std::process::exit(0); }
        _ if !args[i].starts_with('-') => catalog = Some(PathBuf::from(&args[i])),
        other => { eprintln!("Unknown flag: {}", other); std::process::exit(1); } } i += 1; }
    catalog
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let (session, settings) = open_session(&config, parse_args())?;

    let categories: Vec<String> = session.categories().iter().map(|c| c.to_string()).collect();
    println!("📋 Coffee menu search ({} items)\n=======================", session.catalog().len());
    println!("Type keywords to search. Commands: :cat <Semua|{}>, :popular [N], :q", categories.join("|"));

    let mut filter = CategoryFilter::All;
    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("[{}] > ", filter);
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 { break; }
        let line = input.trim();

        if line == ":q" { break; }
        if let Some(arg) = command_arg(line, ":cat") {
            match arg.parse::<CategoryFilter>() {
                Ok(f) => { filter = f; println!("☕ Category: {}", filter); }
                Err(e) => println!("⚠️  {}", e),
            }
            continue;
        }
        if let Some(arg) = command_arg(line, ":popular") {
            let top_n = arg.parse::<usize>().unwrap_or(settings.popular_top_n);
            render_popular(&session.top_queries(top_n));
            continue;
        }

        match session.submit(line, filter) {
            Ok(outcome) => render_outcome(line, filter, &outcome),
            Err(Error::EmptyQuery) => println!("Enter a keyword first."),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
