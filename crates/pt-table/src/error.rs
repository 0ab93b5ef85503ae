//! Table loading errors.

use thiserror::Error;

/// Result type for table construction.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while building a table from a data source.
#[derive(Error, Debug)]
pub enum TableError {
    /// Source missing, unreadable, or containing no usable records.
    #[error("Data source unavailable: {detail}")]
    Unavailable { detail: String },
}
