//! Ordered decision rules turning score totals into a ternary action.

use crate::config::DecisionThresholds;
use crate::models::signal::SignalAction;
use crate::signals::scoring::ScoreBreakdown;

/// First matching rule wins.
///
/// A strong side fires while the opposing score stays at or below the
/// opposing cap, so a strong signal against exactly-moderate opposition
/// still resolves. The moderate rules require the opposition to stay
/// strictly below the moderate level; balanced moderate scores hold.
pub fn decide(scores: ScoreBreakdown, thresholds: &DecisionThresholds) -> SignalAction {
    let ScoreBreakdown {
        buy_score,
        sell_score,
    } = scores;

    if sell_score >= thresholds.strong && buy_score <= thresholds.strong_opposing {
        return SignalAction::Sell;
    }
    if buy_score >= thresholds.strong && sell_score <= thresholds.strong_opposing {
        return SignalAction::Buy;
    }
    if buy_score >= thresholds.moderate && sell_score < thresholds.moderate {
        return SignalAction::Buy;
    }
    if sell_score >= thresholds.moderate && buy_score < thresholds.moderate {
        return SignalAction::Sell;
    }
    SignalAction::Hold
}
