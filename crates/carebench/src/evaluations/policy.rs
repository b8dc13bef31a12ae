use serde::{Deserialize, Serialize};

use crate::scoring::benchmark::DEFAULT_TOLERANCE_PERCENT;

/// Operational dials applied when persisting and broadcasting scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Overall scores strictly below this threshold trigger a follow-up
    /// notification to facility operations.
    pub alert_below_score: u8,
    /// Tolerance band applied to benchmark comparisons, in percent of the
    /// target value.
    pub benchmark_tolerance_percent: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            alert_below_score: 40,
            benchmark_tolerance_percent: DEFAULT_TOLERANCE_PERCENT,
        }
    }
}
