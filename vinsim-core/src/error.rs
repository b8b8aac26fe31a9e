/// Error types for the vinsim libraries
use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for simulation and reporting operations
#[derive(Error, Debug)]
pub enum Error {
    /// End date precedes start date
    #[error("Invalid date range: end date {end} precedes start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Hectare count must be strictly positive
    #[error("Invalid hectare count: {0} (must be > 0)")]
    InvalidHectares(f64),

    /// A calendar year slice contained no days during annual derivation
    #[error("No daily records for calendar year {0}")]
    EmptyYearSlice(i32),

    /// A vintage window matched no rows of the table
    #[error("No daily records in vintage window starting {0}")]
    EmptyVintage(i32),

    /// CSV input is missing required columns
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// CSV input carried a header but no data rows
    #[error("Input table contains no rows")]
    EmptyTable,

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),
}

/// Type alias for Results using the vinsim Error
pub type Result<T> = std::result::Result<T, Error>;
