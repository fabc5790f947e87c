use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid catalog row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("Unknown category filter: {0}")]
    InvalidFilter(String),

    #[error("Query is empty")]
    EmptyQuery,
}

pub type Result<T> = std::result::Result<T, Error>;
