//! Runtime configuration: environment probe plus the tunable scoring weights
//! and decision thresholds used by the signal consolidator.

use serde::{Deserialize, Serialize};

/// Deployment environment, read from `NAVTRIX_ENV`. Anything other than
/// `production`/`prod` is treated as sandbox.
pub fn get_environment() -> String {
    std::env::var("NAVTRIX_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Per-sub-signal weights accumulated into the buy and sell scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub pressure_buy: f64,
    pub pressure_entry: f64,
    pub chip_buy: f64,
    pub chip_accumulation: f64,
    /// Accumulation only scores while its strength exceeds this.
    pub accumulation_strength_min: f64,
    pub main_entry: f64,
    pub swing_entry: f64,
    pub golden_bottom: f64,
    pub pressure_sell: f64,
    pub chip_sell: f64,
    pub top_warning: f64,
    pub main_exit: f64,
    pub top_rush: f64,
    pub washout: f64,
    /// Washout only scores while the buy score stays below this.
    pub washout_buy_cap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            pressure_buy: 2.0,
            pressure_entry: 1.0,
            chip_buy: 2.0,
            chip_accumulation: 1.5,
            accumulation_strength_min: 50.0,
            main_entry: 2.0,
            swing_entry: 2.0,
            golden_bottom: 1.0,
            pressure_sell: 2.0,
            chip_sell: 2.0,
            top_warning: 2.0,
            main_exit: 2.0,
            top_rush: 2.0,
            washout: 0.5,
            washout_buy_cap: 1.0,
        }
    }
}

impl ScoringWeights {
    /// Reject weight sets that could flip score signs.
    pub fn validated(self) -> Result<Self, String> {
        let weights = [
            self.pressure_buy,
            self.pressure_entry,
            self.chip_buy,
            self.chip_accumulation,
            self.main_entry,
            self.swing_entry,
            self.golden_bottom,
            self.pressure_sell,
            self.chip_sell,
            self.top_warning,
            self.main_exit,
            self.top_rush,
            self.washout,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err("all scoring weights must be non-negative".to_string());
        }
        Ok(self)
    }
}

/// Score thresholds for the ordered decision rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// A score at or above this is a strong signal.
    pub strong: f64,
    /// A strong signal only fires while the opposing score stays at or
    /// below this.
    pub strong_opposing: f64,
    /// A score at or above this is a moderate signal; it only fires while
    /// the opposing score stays strictly below the same level.
    pub moderate: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            strong: 3.0,
            strong_opposing: 2.0,
            moderate: 1.5,
        }
    }
}
