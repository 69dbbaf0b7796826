use serde::{Deserialize, Serialize};

/// Tunable thresholds for the suggestion rules.
///
/// These were literals in earlier iterations of the tracker; they are
/// configuration, not algorithm, so hosts can adjust them to the scale
/// of their currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightsConfig {
    /// Spread between the highest- and lowest-spend months (same unit as
    /// transaction amounts) above which the fluctuation tip fires.
    pub fluctuation_threshold: f64,
    /// Average monthly savings rate (percent) below which the
    /// savings-rate tip fires.
    pub min_avg_savings_rate: f64,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            fluctuation_threshold: 20_000.0,
            min_avg_savings_rate: 10.0,
        }
    }
}
