use thiserror::Error;

pub type PtResult<T> = Result<T, PtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PtError {
    #[error("Invalid number for {what} (NaN)")]
    InvalidNumber { what: &'static str },

    #[error("Out of domain for {what}: {value}")]
    OutOfDomain { what: &'static str, value: f64 },
}
