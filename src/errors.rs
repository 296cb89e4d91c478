use thiserror::Error;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the aggregation core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data source operation failed: {0}")]
    DataSource(#[from] DataSourceError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised while validating caller-supplied filters.
///
/// Reported to the caller immediately, never retried.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Unknown value '{value}' for filter '{filter}'")]
    UnknownFilterValue { filter: String, value: String },
}

/// Failure of the external Data Access Gateway.
///
/// Surfaced with full context; never converted into a zeroed result.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Query '{query}' failed: {message}")]
    QueryFailed { query: String, message: String },

    #[error("Gateway unavailable: {0}")]
    Unavailable(String),
}

impl DataSourceError {
    pub fn query(query: impl Into<String>, message: impl Into<String>) -> Self {
        DataSourceError::QueryFailed {
            query: query.into(),
            message: message.into(),
        }
    }
}
