//! Top-level property indices.

use pt_core::{check_arguments, PtResult, Real};
use pt_table::PropertyTable;

use crate::correlation::{grs, grs1};

/// First index: `grs` terms over permutations of the inputs.
///
/// `grs(x, z)` appears twice by definition of the index.
pub fn fun1(x: Real, y: Real, z: Real, table: &PropertyTable) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y), ("z", z)])?;
    Ok(x * grs(y, z, table)? + y * grs(x, z, table)? + 0.33 * y * grs(x, z, table)?)
}

/// Second index: cyclic `grs1` terms.
pub fn fun2(x: Real, y: Real, z: Real, table: &PropertyTable) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y), ("z", z)])?;
    Ok(x * grs1(x, y, table)? + y * grs1(y, z, table)? + z * grs1(z, x, table)?)
}

/// Third index; closed form, no table dependency.
///
/// ```text
/// fun3(x, y, z) = 1.3498 z + 2.2362 y - 2.348 x y
/// ```
pub fn fun3(x: Real, y: Real, z: Real) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y), ("z", z)])?;
    Ok(1.3498 * z + 2.2362 * y - 2.348 * x * y)
}
