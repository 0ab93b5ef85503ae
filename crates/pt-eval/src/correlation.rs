//! Table-backed correlation terms.

use pt_core::{check_arguments, PtResult, Real};
use pt_table::PropertyTable;

use crate::weights::{glr, glr1, gold, gold1};

/// Elementary building block: two independent reference lookups combined
/// linearly.
///
/// ```text
/// srz(x, y, z) = (T(x) + U(z) - T(y)) * x - y
/// ```
pub fn srz(x: Real, y: Real, z: Real, table: &PropertyTable) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y), ("z", z)])?;
    Ok((table.t(x)? + table.u(z)? - table.t(y)?) * x - y)
}

/// Weighted three-term correlation over `srz`.
///
/// Each term feeds `srz` with arguments transformed through `gold`/`glr`
/// of permutations of `x` and `y`.
pub fn grs(x: Real, y: Real, table: &PropertyTable) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y)])?;
    Ok(0.1389 * srz(x + y, gold(x, y)?, glr(x, x * y)?, table)?
        + 1.8389 * srz(-y, gold(y, x / 5.0)?, glr(5.0 * x, x * y)?, table)?
        + 0.83 * srz(x - 0.9, glr(y, x / 5.0)?, gold(5.0 * y, y)?, table)?)
}

/// `grs` variant built on the hard-threshold weights, with its own
/// coefficient set and argument transforms.
pub fn grs1(x: Real, y: Real, table: &PropertyTable) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y)])?;
    Ok(0.14 * srz(x + y, gold1(x, y)?, glr1(x, x * y)?, table)?
        + 1.83 * srz(-y, gold1(y, x / 5.0)?, glr1(4.0 * x, x * y)?, table)?
        + 0.83 * srz(x, glr1(y, x / 4.0)?, gold1(4.0 * y, y)?, table)?)
}
