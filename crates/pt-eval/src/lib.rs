//! pt-eval: empirical property correlations for proptab.
//!
//! Provides the layered formula evaluator:
//! - regime classifiers and saturation weights (`gold`, `glr` and their
//!   hard-threshold variants)
//! - the `srz` building block combining two reference-table lookups
//! - the weighted correlation sums `grs` / `grs1`
//! - the top-level indices `fun1`, `fun2`, `fun3`
//!
//! Every function validates all of its arguments before any nested call:
//! NaN fails with `InvalidNumber`, magnitudes above the domain bound fail
//! with `OutOfDomain`.
//!
//! All evaluations are deterministic pure reads over an immutable
//! `PropertyTable`; independent evaluations can run in parallel without
//! locking.

pub mod correlation;
pub mod formulas;
pub mod weights;

// Re-exports for ergonomics
pub use correlation::{grs, grs1, srz};
pub use formulas::{fun1, fun2, fun3};
pub use weights::{glr, glr1, gold, gold1};
