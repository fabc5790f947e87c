use std::fs;
use std::io::Write;
use tempfile::TempDir;

use menudb_core::config::{Config, SearchSettings};
use menudb_core::{Catalog, Category, CategoryFilter, Error, MenuItem, QueryLog};

const MENU_CSV: &str = "nama,kategori,deskripsi\n\
Kopi Susu,Cold,Kopi dengan susu segar\n\
Espresso,Hot,Kopi pekat tanpa gula\n";

#[test]
fn load_catalog_from_csv_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("menu.csv");
    let mut f = fs::File::create(&path).unwrap();
    write!(f, "{}", MENU_CSV).unwrap();

    let catalog = Catalog::from_csv_path(&path).expect("load");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.items()[0], MenuItem::new("Kopi Susu", Category::Cold, "Kopi dengan susu segar"));
    assert_eq!(catalog.get(1).map(|i| i.name.as_str()), Some("Espresso"));
    assert!(catalog.get(2).is_none());
}

#[test]
fn columns_may_come_in_any_order_and_fields_are_trimmed() {
    let csv = "deskripsi,nama,kategori,harga\n  Teh manis dingin , Es Teh , cold ,8000\n";
    let catalog = Catalog::from_reader(csv.as_bytes()).expect("load");
    let item = &catalog.items()[0];
    assert_eq!(item.name, "Es Teh");
    assert_eq!(item.category, Category::Cold);
    assert_eq!(item.description, "Teh manis dingin");
}

#[test]
fn missing_column_fails_the_load() {
    let csv = "nama,kategori\nEspresso,Hot\n";
    let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Csv(_)), "got {err:?}");
}

#[test]
fn empty_field_fails_the_load() {
    let csv = "nama,kategori,deskripsi\nEspresso,Hot,Kopi pekat\n,Cold,Tanpa nama\n";
    let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
    match err {
        Error::InvalidRow { row, reason } => {
            assert_eq!(row, 2);
            assert!(reason.contains("nama"), "reason: {reason}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn unknown_category_fails_the_load() {
    let csv = "nama,kategori,deskripsi\nAffogato,Warm,Es krim dan espresso\n";
    let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::InvalidRow { row: 1, .. }), "got {err:?}");
}

#[test]
fn unreadable_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = Catalog::from_csv_path(&tmp.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn corpus_is_aligned_and_lower_cased() {
    let catalog = Catalog::from_reader(MENU_CSV.as_bytes()).unwrap();
    let corpus = catalog.document_corpus();
    assert_eq!(corpus.len(), catalog.len());
    assert_eq!(corpus[0], "kopi susu cold kopi dengan susu segar");
    assert_eq!(corpus[1], "espresso hot kopi pekat tanpa gula");
}

#[test]
fn vocabulary_is_distinct_and_sorted() {
    let catalog = Catalog::from_reader(MENU_CSV.as_bytes()).unwrap();
    let vocab: Vec<String> = catalog.vocabulary().into_iter().collect();
    assert_eq!(
        vocab,
        ["cold", "dengan", "espresso", "gula", "hot", "kopi", "pekat", "segar", "susu", "tanpa"]
    );
    assert_eq!(catalog.categories(), vec![Category::Cold, Category::Hot]);
}

#[test]
fn category_filter_parsing() {
    assert_eq!("Semua".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!("hot".parse::<CategoryFilter>().unwrap(), CategoryFilter::Only(Category::Hot));
    assert_eq!(" Cold ".parse::<CategoryFilter>().unwrap(), CategoryFilter::Only(Category::Cold));
    assert!(matches!("warm".parse::<CategoryFilter>(), Err(Error::InvalidFilter(_))));
    assert!(CategoryFilter::All.allows(Category::Hot));
    assert!(!CategoryFilter::Only(Category::Hot).allows(Category::Cold));
}

#[test]
fn menu_item_serializes_with_display_category() {
    let item = MenuItem::new("Espresso", Category::Hot, "Kopi pekat");
    let json = serde_json::to_string(&item).unwrap();
    assert_eq!(json, r#"{"name":"Espresso","category":"Hot","description":"Kopi pekat"}"#);
}

#[test]
fn top_queries_counts_and_orders_by_first_seen() {
    let log = QueryLog::new();
    assert!(log.top_queries(5).is_empty());
    for q in ["susu", "kopi", "kopi", "latte", "susu", "Kopi"] {
        log.record(q);
    }
    assert_eq!(log.len(), 6);
    assert_eq!(
        log.top_queries(5),
        vec![("susu".to_string(), 2), ("kopi".to_string(), 2), ("latte".to_string(), 1), ("Kopi".to_string(), 1)]
    );
    assert_eq!(log.top_queries(1), vec![("susu".to_string(), 2)]);
    assert_eq!(log.entries()[5], "Kopi");
}

#[test]
fn config_reads_sections_from_toml() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[data]\ncatalog_csv = \"menu/kopi.csv\"\n\n[search]\nsuggest_top_n = 7\n",
    )
    .unwrap();
    let config = Config::load_from(tmp.path()).expect("config");
    let search = config.search_settings().unwrap();
    assert_eq!(search.suggest_top_n, 7);
    assert_eq!(search.word_ngram_max, SearchSettings::default().word_ngram_max);
    assert_eq!(config.catalog_path().unwrap(), std::path::PathBuf::from("menu/kopi.csv"));
}

#[test]
fn config_defaults_when_no_file() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(tmp.path()).expect("config");
    assert_eq!(config.search_settings().unwrap(), SearchSettings::default());
}

#[test]
fn config_rejects_inverted_ngram_range() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[search]\nchar_ngram_min = 5\nchar_ngram_max = 3\n").unwrap();
    assert!(Config::load_from(tmp.path()).is_err());
}
