//! Range-bounded linear interpolation over a `PropertyTable`.

use pt_core::{check_arguments, PtError, PtResult, Real};

use crate::table::{PropertyPair, PropertyTable};

/// Interpolated `(t, u)` at `x`.
///
/// Exact at table keys, linear between adjacent keys. Keys below the smallest
/// entry are rejected unless exactly equal. Keys beyond the largest entry
/// return the last entry's pair, except over a single-entry table where they
/// are rejected.
pub fn interpolate(table: &PropertyTable, x: Real) -> PtResult<PropertyPair> {
    check_arguments(&[("interpolation key", x)])?;

    let entries = table.entries();
    let idx = entries.partition_point(|e| e.key < x);

    if idx == entries.len() {
        // x exceeds every key
        let last = &entries[entries.len() - 1];
        if entries.len() == 1 && last.key < x {
            return Err(PtError::OutOfDomain {
                what: "key below table range",
                value: x,
            });
        }
        return Ok(last.values);
    }

    let upper = &entries[idx];
    if idx == 0 {
        if x == upper.key {
            return Ok(upper.values);
        }
        return Err(PtError::OutOfDomain {
            what: "key above table range",
            value: x,
        });
    }

    let lower = &entries[idx - 1];
    if x == upper.key {
        return Ok(upper.values);
    }
    if x == lower.key {
        return Ok(lower.values);
    }

    let k1 = lower.key;
    let k2 = upper.key;
    Ok(PropertyPair {
        t: lower.values.t + (upper.values.t - lower.values.t) * (x - k1) / (k2 - k1),
        u: lower.values.u + (upper.values.u - lower.values.u) * (x - k1) / (k2 - k1),
    })
}

impl PropertyTable {
    /// First property at `x`, interpolated as needed.
    pub fn t(&self, x: Real) -> PtResult<Real> {
        interpolate(self, x).map(|pair| pair.t)
    }

    /// Second property at `x`, interpolated as needed.
    pub fn u(&self, x: Real) -> PtResult<Real> {
        interpolate(self, x).map(|pair| pair.u)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use pt_core::{nearly_equal, Tolerances};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linear_between_adjacent_keys(frac in 0.001_f64..0.999) {
            let table = PropertyTable::from_records([
                (0.0, 1.0, 2.0),
                (2.0, 3.0, 4.0),
                (5.0, -1.0, 0.5),
            ])
            .unwrap();

            // A query strictly inside the (2.0, 5.0) segment
            let x = 2.0 + frac * 3.0;
            let pair = interpolate(&table, x).unwrap();

            let expect_t = 3.0 + (-1.0 - 3.0) * (x - 2.0) / 3.0;
            let expect_u = 4.0 + (0.5 - 4.0) * (x - 2.0) / 3.0;
            let tol = Tolerances::default();
            prop_assert!(nearly_equal(pair.t, expect_t, tol));
            prop_assert!(nearly_equal(pair.u, expect_u, tol));
        }

        #[test]
        fn exact_at_every_stored_key(keys in prop::collection::btree_set(-100i32..100, 2..8)) {
            let records: Vec<(f64, f64, f64)> = keys
                .iter()
                .map(|&k| (k as f64, (k * 2) as f64, (k * 3) as f64))
                .collect();
            let table = PropertyTable::from_records(records.clone()).unwrap();

            for (k, t, u) in records {
                let pair = interpolate(&table, k).unwrap();
                prop_assert_eq!(pair.t, t);
                prop_assert_eq!(pair.u, u);
            }
        }
    }
}
