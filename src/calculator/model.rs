use serde::{Deserialize, Serialize};

/// Capacity of a single volume, normalized to GB.
///
/// The model does not validate itself: callers keep `0 <= free_space <= total_space`
/// before mutating it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct DiskSpaceModel {
    pub total_space: f64,
    pub free_space: f64,
    /// Desired free space after remediation, in percent [0, 100).
    pub target_free_percentage: Option<f64>,
}

impl DiskSpaceModel {
    pub(crate) fn set_total(&mut self, value_gb: f64) {
        self.total_space = value_gb;
    }

    pub(crate) fn set_free(&mut self, value_gb: f64) {
        self.free_space = value_gb;
    }

    pub(crate) fn set_target(&mut self, percentage: Option<f64>) {
        self.target_free_percentage = percentage;
    }

    pub(crate) fn used_space(&self) -> f64 {
        self.total_space - self.free_space
    }

    /// Free space as a percentage of total (0.0 - 100.0).
    pub(crate) fn free_percentage(&self) -> f64 {
        if self.total_space == 0.0 {
            return 0.0;
        }
        self.free_space / self.total_space * 100.0
    }

    pub(crate) fn used_percentage(&self) -> f64 {
        100.0 - self.free_percentage()
    }

    /// Whole GB that must be added (or cleared) to reach the target free percentage.
    ///
    /// Solves `(F + A) / (T + A) = P` for `A`, floored at zero and rounded up.
    /// Returns `None` when no target is set, no volume has been described yet,
    /// or the target is 100% or more.
    pub(crate) fn additional_space_needed(&self) -> Option<u64> {
        let target = self.target_free_percentage?;
        if self.total_space == 0.0 {
            return None;
        }

        let p = target / 100.0;
        if p >= 1.0 {
            return None;
        }

        let denominator = 1.0 - p;
        if denominator == 0.0 {
            return None;
        }

        let additional = (self.total_space * p - self.free_space) / denominator;
        if additional > 0.0 {
            Some(additional.ceil() as u64)
        } else {
            Some(0)
        }
    }
}
