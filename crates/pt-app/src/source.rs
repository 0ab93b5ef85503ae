//! Data-source selection by the primary input value.

use std::fmt;
use std::path::{Path, PathBuf};

use pt_core::Real;

/// The three tabulated data sources, keyed by the range of `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// `0 < x <= 1`
    UnitPositive,
    /// `-1 <= x <= 0`
    UnitNonPositive,
    /// `|x| > 1`
    BeyondUnit,
}

impl DataSource {
    /// Select the source for a primary input value. Total over the reals.
    pub fn select(x: Real) -> DataSource {
        if x.abs() <= 1.0 {
            if x > 0.0 {
                DataSource::UnitPositive
            } else {
                DataSource::UnitNonPositive
            }
        } else {
            DataSource::BeyondUnit
        }
    }

    /// Source name as printed in reports.
    pub fn name(&self) -> &'static str {
        match self {
            DataSource::UnitPositive => "X1_00",
            DataSource::UnitNonPositive => "X_1_1",
            DataSource::BeyondUnit => "X00_1",
        }
    }

    /// File name of the source on disk.
    pub fn file_name(&self) -> String {
        format!("{}.dat", self.name())
    }

    /// Path of the source under a data directory.
    pub fn path_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
