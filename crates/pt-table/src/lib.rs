//! pt-table: tabulated reference properties for proptab.
//!
//! Provides:
//! - `PropertyTable`: ordered key -> (t, u) reference data
//! - a whitespace-triple loader for `.dat` data sources
//! - range-bounded linear interpolation and the `t`/`u` projections
//!
//! # Architecture
//!
//! A table is built once from a single data source and is immutable
//! afterwards; every query is a pure read. The crate boundary isolates the
//! rest of proptab from how reference data is stored, so alternative sources
//! (in-memory records, generated tables) plug in through
//! `PropertyTable::from_records` without touching the evaluator.

pub mod error;
pub mod interpolate;
pub mod loader;
pub mod table;

// Re-exports for ergonomics
pub use error::{TableError, TableResult};
pub use interpolate::interpolate;
pub use loader::{load_path, parse_records};
pub use table::{PropertyPair, PropertyTable, TableEntry};
