use serde::{Deserialize, Serialize};

/// Engineering thresholds for the validator suite.
///
/// Passed into [`crate::checks::Analyzer`] at construction so tests and
/// callers can tune them per run; never process-wide state. The interval
/// defaults assume one record per second and must be changed if the link
/// reports more often.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum accepted gap between consecutive timestamps, seconds.
    pub min_time_interval: f64,
    /// Maximum accepted gap between consecutive timestamps, seconds.
    pub max_time_interval: f64,
    /// Maximum accepted jump between consecutive mu samples, picoseconds.
    pub max_mu_jump: i64,
    /// Symmetric bound on the cko value itself, picoseconds.
    pub max_cko: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_time_interval: 0.5,
            max_time_interval: 1.5,
            max_mu_jump: 4000,
            max_cko: 50,
        }
    }
}
