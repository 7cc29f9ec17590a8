//! Signal evaluation engine: price series in, consolidated decision out.

use tracing::debug;

use crate::config::{DecisionThresholds, ScoringWeights};
use crate::indicators::{
    calculate_chip_intent, calculate_main_force, calculate_pressure_support, chip_intent_history,
    main_force_history, pressure_support_history,
};
use crate::models::bar::PriceSeries;
use crate::models::indicators::IndicatorOutput;
use crate::models::signal::{ConsolidatedSignal, DailySignal};
use crate::signals::decision::decide;
use crate::signals::scoring::score_signals;

/// Stateless evaluator; every call is a pure function of the input series,
/// so one engine can serve any number of concurrent analyses.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    weights: ScoringWeights,
    thresholds: DecisionThresholds,
}

impl SignalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(weights: ScoringWeights, thresholds: DecisionThresholds) -> Self {
        Self {
            weights,
            thresholds,
        }
    }

    /// Evaluate the latest bar into a consolidated decision.
    ///
    /// An empty series or an undefined latest close short-circuits to a
    /// zero-score `Hold` without touching the indicator engine.
    pub fn evaluate(&self, series: &PriceSeries) -> ConsolidatedSignal {
        self.evaluate_with_indicators(series).0
    }

    /// Like [`evaluate`](Self::evaluate), also returning the per-family
    /// sub-signals for API responses and debugging.
    pub fn evaluate_with_indicators(
        &self,
        series: &PriceSeries,
    ) -> (ConsolidatedSignal, IndicatorOutput) {
        let latest_close = series.last().map(|bar| bar.close).unwrap_or(f64::NAN);
        if !latest_close.is_finite() {
            debug!(bars = series.len(), "latest close undefined, holding");
            return (ConsolidatedSignal::hold(), IndicatorOutput::default());
        }

        let output = IndicatorOutput {
            pressure_support: calculate_pressure_support(series),
            chip_intent: calculate_chip_intent(series),
            main_force: calculate_main_force(series),
        };
        let (scores, reasons) = score_signals(&output, &self.weights);
        let action = decide(scores, &self.thresholds);
        debug!(
            buy_score = scores.buy_score,
            sell_score = scores.sell_score,
            ?action,
            "consolidated signal"
        );

        (
            ConsolidatedSignal {
                action,
                buy_score: scores.buy_score,
                sell_score: scores.sell_score,
                reasons,
            },
            output,
        )
    }

    /// Consolidated signals for the trailing `days` bars, for report tables.
    ///
    /// Each bar's sub-signals come from the full-series lines; since every
    /// transform is causal this matches re-evaluating each prefix.
    pub fn evaluate_history(&self, series: &PriceSeries, days: usize) -> Vec<DailySignal> {
        let len = series.len();
        let pressure = pressure_support_history(series);
        let chip = chip_intent_history(series);
        let force = main_force_history(series);

        let start = len.saturating_sub(days);
        (start..len)
            .map(|i| {
                let bar = &series.bars()[i];
                let signal = if !bar.close.is_finite() {
                    ConsolidatedSignal::hold()
                } else {
                    let output = IndicatorOutput {
                        pressure_support: pressure[i],
                        chip_intent: chip[i],
                        main_force: force[i],
                    };
                    let (scores, reasons) = score_signals(&output, &self.weights);
                    ConsolidatedSignal {
                        action: decide(scores, &self.thresholds),
                        buy_score: scores.buy_score,
                        sell_score: scores.sell_score,
                        reasons,
                    }
                };
                DailySignal {
                    date: bar.date,
                    close: bar.close,
                    signal,
                }
            })
            .collect()
    }
}
