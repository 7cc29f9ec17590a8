//! Weighted accumulation of family sub-signals into buy and sell scores.

use crate::config::ScoringWeights;
use crate::models::indicators::IndicatorOutput;
use crate::models::signal::SignalReason;

/// The two score totals; both sides can be nonzero at once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub buy_score: f64,
    pub sell_score: f64,
}

/// Accumulate scores for the latest-bar output of all three families.
///
/// The buy side is settled first: the washout term only contributes while
/// the buy score stays below the configured cap.
pub fn score_signals(
    output: &IndicatorOutput,
    weights: &ScoringWeights,
) -> (ScoreBreakdown, Vec<SignalReason>) {
    let mut reasons = Vec::new();
    let mut buy_score = 0.0;
    let mut sell_score = 0.0;

    let ps = &output.pressure_support;
    let ci = &output.chip_intent;
    let mf = &output.main_force;

    if ps.buy {
        buy_score += weights.pressure_buy;
        reasons.push(reason("price reclaimed the support band", weights.pressure_buy));
    }
    if ps.entry {
        buy_score += weights.pressure_entry;
        reasons.push(reason("momentum ratio bottoming pattern", weights.pressure_entry));
    }
    if ci.buy {
        buy_score += weights.chip_buy;
        reasons.push(reason("price-position line crossed up through 0.3", weights.chip_buy));
    }
    if ci.accumulation && ci.accumulation_strength > weights.accumulation_strength_min {
        buy_score += weights.chip_accumulation;
        reasons.push(SignalReason {
            description: format!(
                "main-force accumulation at strength {:.1}",
                ci.accumulation_strength
            ),
            weight: weights.chip_accumulation,
        });
    }
    if mf.main_entry {
        buy_score += weights.main_entry;
        reasons.push(reason("main-force inflow rising", weights.main_entry));
    }
    if mf.swing_entry {
        buy_score += weights.swing_entry;
        reasons.push(reason("oversold swing entry point", weights.swing_entry));
    }
    if mf.golden_bottom {
        buy_score += weights.golden_bottom;
        reasons.push(reason("bottom confirmed on a fresh low", weights.golden_bottom));
    }

    if ps.sell {
        sell_score += weights.pressure_sell;
        reasons.push(reason("price fell back through the pressure band", weights.pressure_sell));
    }
    if ci.sell {
        sell_score += weights.chip_sell;
        reasons.push(reason("price-position line crossed down through 3.5", weights.chip_sell));
    }
    if ci.top_warning {
        sell_score += weights.top_warning;
        reasons.push(reason("trend line ran away from its warning line", weights.top_warning));
    }
    if mf.main_exit {
        sell_score += weights.main_exit;
        reasons.push(reason("main-force outflow falling", weights.main_exit));
    }
    if mf.top_rush {
        sell_score += weights.top_rush;
        reasons.push(reason("top rush on a fresh high", weights.top_rush));
    }
    if mf.washout && buy_score < weights.washout_buy_cap {
        sell_score += weights.washout;
        reasons.push(reason("washout with no buy support", weights.washout));
    }

    (
        ScoreBreakdown {
            buy_score,
            sell_score,
        },
        reasons,
    )
}

fn reason(description: &str, weight: f64) -> SignalReason {
    SignalReason {
        description: description.to_string(),
        weight,
    }
}
