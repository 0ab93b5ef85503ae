//! Evaluation session: parse inputs, select and load the table, evaluate.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use pt_core::Real;
use pt_eval::{fun1, fun2, fun3};
use pt_table::{load_path, PropertyTable};

use crate::error::{AppError, AppResult};
use crate::source::DataSource;

/// Result of one full evaluation session.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub source: String,
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub fun1: Real,
    pub fun2: Real,
    pub fun3: Real,
}

/// Summary of a loaded data source, for inspection.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub source: String,
    pub entries: usize,
    pub min_key: Real,
    pub max_key: Real,
}

/// Parse one input line of three whitespace-separated reals.
///
/// Tokens after the third value are ignored, as the reference reader does.
pub fn parse_inputs(line: &str) -> AppResult<(Real, Real, Real)> {
    let mut tokens = line.split_whitespace();
    let mut take = |what: &'static str| -> AppResult<Real> {
        let tok = tokens
            .next()
            .ok_or_else(|| AppError::MalformedInput(format!("missing value for {what}")))?;
        tok.parse()
            .map_err(|_| AppError::MalformedInput(format!("cannot parse {what} from '{tok}'")))
    };
    Ok((take("x")?, take("y")?, take("z")?))
}

/// Run a full evaluation: select the source from `x`, load it from
/// `data_dir`, evaluate the three indices.
pub fn evaluate(x: Real, y: Real, z: Real, data_dir: &Path) -> AppResult<EvaluationReport> {
    let source = DataSource::select(x);
    let table = load_path(&source.path_in(data_dir))?;
    debug!(source = source.name(), entries = table.len(), "data source loaded");
    evaluate_with_table(x, y, z, source, &table)
}

/// Evaluate the three indices against an already-loaded table.
pub fn evaluate_with_table(
    x: Real,
    y: Real,
    z: Real,
    source: DataSource,
    table: &PropertyTable,
) -> AppResult<EvaluationReport> {
    let report = EvaluationReport {
        source: source.name().to_string(),
        x,
        y,
        z,
        fun1: fun1(x, y, z, table)?,
        fun2: fun2(x, y, z, table)?,
        fun3: fun3(x, y, z)?,
    };
    debug!(
        fun1 = report.fun1,
        fun2 = report.fun2,
        fun3 = report.fun3,
        "evaluation complete"
    );
    Ok(report)
}

/// Load and summarize the data source that `x` selects.
pub fn summarize_source(x: Real, data_dir: &Path) -> AppResult<SourceSummary> {
    let source = DataSource::select(x);
    let table = load_path(&source.path_in(data_dir))?;
    Ok(SourceSummary {
        source: source.name().to_string(),
        entries: table.len(),
        min_key: table.min_key(),
        max_key: table.max_key(),
    })
}
