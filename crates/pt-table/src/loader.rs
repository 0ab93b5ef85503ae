//! Loading property tables from whitespace-triple data sources.

use std::path::Path;

use pt_core::Real;

use crate::error::{TableError, TableResult};
use crate::table::PropertyTable;

/// Parse whitespace-separated `key t u` triples from raw source text.
///
/// Reading stops at the first token that does not parse as a number, and at
/// an incomplete trailing triple; everything read before that point is kept.
/// The numeric fields themselves are not validated further.
pub fn parse_records(input: &str) -> Vec<(Real, Real, Real)> {
    let mut records = Vec::new();
    let mut tokens = input.split_whitespace();
    loop {
        let Some(key) = next_number(&mut tokens) else {
            break;
        };
        let Some(t) = next_number(&mut tokens) else {
            break;
        };
        let Some(u) = next_number(&mut tokens) else {
            break;
        };
        records.push((key, t, u));
    }
    records
}

fn next_number<'a, I>(tokens: &mut I) -> Option<Real>
where
    I: Iterator<Item = &'a str>,
{
    tokens.next().and_then(|tok| tok.parse().ok())
}

/// Load a table from a data source file.
///
/// Fails with `Unavailable` when the file cannot be opened or yields zero
/// records.
pub fn load_path(path: &Path) -> TableResult<PropertyTable> {
    let content = std::fs::read_to_string(path).map_err(|e| TableError::Unavailable {
        detail: format!("cannot open {}: {}", path.display(), e),
    })?;

    PropertyTable::from_records(parse_records(&content)).ok_or_else(|| TableError::Unavailable {
        detail: format!("{} is empty or invalid", path.display()),
    })
}
