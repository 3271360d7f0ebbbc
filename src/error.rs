//! Crate-wide error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Input outside a stated invariant; indicates caller-side corruption
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[source] chrono::ParseError),

    #[error("Invalid date: {0}")]
    InvalidDate(#[source] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
