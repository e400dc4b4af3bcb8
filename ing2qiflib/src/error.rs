//! Ошибки конвертации и общий `Result` библиотеки.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Ing2QifError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column {0:?}")]
    MissingColumn(&'static str),

    #[error("row {row}: bad date {value:?}, expected YYYYMMDD")]
    DateFormat { row: u64, value: String },

    #[error("row {row}: bad direction {value:?}, expected \"Af\" or \"Bij\"")]
    InvalidDirection { row: u64, value: String },

    #[error("row {row}: bad amount {value:?}, expected a decimal with comma")]
    AmountFormat { row: u64, value: String },
}

pub type Result<T> = std::result::Result<T, Ing2QifError>;
