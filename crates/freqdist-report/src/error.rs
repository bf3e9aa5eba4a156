//! Error types for freqdist-report

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Frequency table error: {0}")]
    Core(#[from] freqdist_core::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing column {column:?}; available columns: {}", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error(
        "Column {column:?} has no usable values: 0 of {total} rows valid \
         ({missing} missing, {rejected} not numeric)"
    )]
    EmptyColumn {
        column: String,
        total: usize,
        missing: usize,
        rejected: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
