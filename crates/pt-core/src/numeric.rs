use crate::error::{PtError, PtResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Magnitude bound enforced on every numeric argument and lookup key.
pub const DOMAIN_BOUND: Real = 1.0e6;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Validate a set of named arguments.
///
/// NaN is rejected across all arguments before any magnitude check, so a call
/// carrying both a NaN and an oversized value reports the NaN.
pub fn check_arguments(args: &[(&'static str, Real)]) -> PtResult<()> {
    for &(what, value) in args {
        if value.is_nan() {
            return Err(PtError::InvalidNumber { what });
        }
    }
    for &(what, value) in args {
        if value.abs() > DOMAIN_BOUND {
            return Err(PtError::OutOfDomain { what, value });
        }
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn finite_in_domain_arguments_pass(v in -1.0e6_f64..=1.0e6_f64) {
            prop_assert!(check_arguments(&[("v", v)]).is_ok());
        }
    }
}
