//! Regime classifiers and saturation weights feeding the correlation terms.

use pt_core::{check_arguments, PtResult, Real};

/// Three-regime discrete classifier.
///
/// Returns `0.15` when `x > y` with `y` nonzero, `0.1` when `x <= y` with
/// `x` nonzero, and `0` for any pair matching neither guard.
pub fn gold(x: Real, y: Real) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y)])?;
    if x > y && y != 0.0 {
        return Ok(0.15);
    }
    if x <= y && x != 0.0 {
        return Ok(0.1);
    }
    Ok(0.0)
}

/// Radius-based saturating weight with a near-threshold clamp.
///
/// ```text
/// x < 1          -> y
/// x >= 1, y < 1  -> y
/// r - 4 < 0.1    -> 1          where r = sqrt(x^2 + y^2)
/// otherwise      -> r - 4
/// ```
pub fn glr(x: Real, y: Real) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y)])?;
    if x < 1.0 {
        return Ok(y);
    }
    if y < 1.0 {
        return Ok(y);
    }
    let r = (x * x + y * y).sqrt();
    if r - 4.0 < 0.1 {
        return Ok(1.0);
    }
    Ok(r - 4.0)
}

/// `gold` with activation thresholds at `0.1` instead of nonzero.
pub fn gold1(x: Real, y: Real) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y)])?;
    if x > y && y > 0.1 {
        return Ok(0.15);
    }
    if x <= y && x > 0.1 {
        return Ok(0.1);
    }
    Ok(0.0)
}

/// Hard-saturating variant of `glr`.
///
/// ```text
/// x < 1   -> y
/// y >= 1  -> 1
/// else    -> 0
/// ```
pub fn glr1(x: Real, y: Real) -> PtResult<Real> {
    check_arguments(&[("x", x), ("y", y)])?;
    if x < 1.0 {
        return Ok(y);
    }
    if y >= 1.0 {
        return Ok(1.0);
    }
    Ok(0.0)
}
