//! Consolidated signal types handed to the reporting collaborator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Final ternary decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

/// One sub-signal's contribution to the decision, kept for explainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
    pub weight: f64,
}

/// The consolidated decision plus the scores that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidatedSignal {
    pub action: SignalAction,
    pub buy_score: f64,
    pub sell_score: f64,
    pub reasons: Vec<SignalReason>,
}

impl ConsolidatedSignal {
    /// Degenerate result for series without a usable latest close.
    pub fn hold() -> Self {
        Self {
            action: SignalAction::Hold,
            buy_score: 0.0,
            sell_score: 0.0,
            reasons: Vec::new(),
        }
    }
}

/// One row of a trailing signal history, as rendered into report tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySignal {
    pub date: NaiveDate,
    pub close: f64,
    pub signal: ConsolidatedSignal,
}
