//! pt-app: evaluation services shared by front ends.
//!
//! Wires the table and evaluator crates into a single evaluation session:
//! parse one line of input, select the data source from `x`, load the table,
//! evaluate the three indices, report.

pub mod error;
pub mod eval_service;
pub mod source;

pub use error::{AppError, AppResult};
pub use eval_service::{
    evaluate, evaluate_with_table, parse_inputs, summarize_source, EvaluationReport, SourceSummary,
};
pub use source::DataSource;
