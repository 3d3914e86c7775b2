use chrono::NaiveDate;
use thiserror::Error;

/// Ошибки генерации данных
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("record count must be positive, got {0}")]
    InvalidRecordCount(usize),

    #[error("invalid distribution: {0}")]
    Distribution(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
