//! Error types for the pt-app service layer.

use pt_core::PtError;
use pt_table::TableError;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] PtError),

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pt-app operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_convert() {
        let err: AppError = TableError::Unavailable {
            detail: "X00_1.dat missing".into(),
        }
        .into();
        assert!(err.to_string().contains("X00_1.dat"));

        let err: AppError = PtError::InvalidNumber { what: "x" }.into();
        assert!(err.to_string().contains("Invalid number"));
    }
}
