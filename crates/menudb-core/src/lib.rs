#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod query_log;
pub mod traits;
pub mod types;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use query_log::QueryLog;
pub use types::{Category, CategoryFilter, ItemId, MenuItem, SearchHit};
