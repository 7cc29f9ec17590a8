//! Pressure/support band indicator (main chart).
//!
//! Two smoothed bands bracket the price: the pressure band 8% above a
//! 20-period TDX smoothing of close, the support band 10% below a 32-period
//! one. Reclaiming the support band is a strong buy; falling back through
//! the pressure band is a strong sell. A momentum-ratio bottoming pattern
//! contributes a moderate entry signal.

use crate::common::math;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{PressureSupportLines, PressureSupportSignals};

/// Minimum history before the family produces a non-trivial result.
pub const MIN_BARS: usize = 37;

const SELL_PERIOD: usize = 20;
const BUY_PERIOD: usize = 32;
const SELL_SCALE: f64 = 1.08;
const BUY_SCALE: f64 = 0.90;
const MOMENTUM_PERIOD: usize = 6;
const OSCILLATOR_RANGE: usize = 9;

/// Latest-bar sub-signals; all false when the series is shorter than
/// [`MIN_BARS`].
pub fn calculate_pressure_support(series: &PriceSeries) -> PressureSupportSignals {
    pressure_support_history(series)
        .pop()
        .unwrap_or_default()
}

/// Per-bar sub-signals over the whole series.
pub fn pressure_support_history(series: &PriceSeries) -> Vec<PressureSupportSignals> {
    let len = series.len();
    if len < MIN_BARS {
        return vec![PressureSupportSignals::default(); len];
    }

    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();

    let sell_line = math::scale(&math::tdx_sma(&closes, SELL_PERIOD, 1), SELL_SCALE);
    let buy_line = math::scale(&math::tdx_sma(&closes, BUY_PERIOD, 1), BUY_SCALE);
    let reclaimed = math::crosses_above(&closes, &buy_line);
    let rejected = math::crosses_below(&closes, &sell_line);

    let momentum = momentum_ratio(&closes);
    let short_floor = math::rolling_min(&momentum, 2);
    let long_floor = math::rolling_min(&momentum, 7);
    let below_zero: Vec<bool> = momentum.iter().map(|v| v.is_finite() && *v < 0.0).collect();
    let below_count = math::count_true(&below_zero, 2);
    let turn_up = math::crosses_above(&momentum, &math::tdx_sma(&momentum, 2, 1));

    (0..len)
        .map(|i| PressureSupportSignals {
            buy: reclaimed[i] || (lows[i] < buy_line[i] && closes[i] > buy_line[i]),
            sell: rejected[i] || (highs[i] > sell_line[i] && closes[i] < sell_line[i]),
            // the momentum ratio just set a week-scale floor, spent two bars
            // below zero, and is turning up through its own short smoothing
            entry: short_floor[i].is_finite()
                && short_floor[i] == long_floor[i]
                && below_count[i] == 2
                && turn_up[i],
        })
        .collect()
}

/// Plot lines for chart display; not gated on [`MIN_BARS`] (warm-up is NaN).
pub fn pressure_support_lines(series: &PriceSeries) -> PressureSupportLines {
    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();

    PressureSupportLines {
        sell_line: math::scale(&math::tdx_sma(&closes, SELL_PERIOD, 1), SELL_SCALE),
        buy_line: math::scale(&math::tdx_sma(&closes, BUY_PERIOD, 1), BUY_SCALE),
        momentum: momentum_ratio(&closes),
        oscillator: oscillator(&closes, &highs, &lows),
    }
}

/// Double-smoothed price change over double-smoothed absolute change, x100.
fn momentum_ratio(closes: &[f64]) -> Vec<f64> {
    let delta = math::sub(closes, &math::lag(closes, 1));
    let smooth2 = |s: &[f64]| {
        math::tdx_sma(
            &math::tdx_sma(s, MOMENTUM_PERIOD, 1),
            MOMENTUM_PERIOD,
            1,
        )
    };
    math::scale(
        &math::ratio(&smooth2(&delta), &smooth2(&math::abs(&delta))),
        100.0,
    )
}

/// Stochastic-style position of close in the trailing 9-bar range,
/// smoothed twice.
fn oscillator(closes: &[f64], highs: &[f64], lows: &[f64]) -> Vec<f64> {
    let floor = math::rolling_min(lows, OSCILLATOR_RANGE);
    let ceiling = math::rolling_max(highs, OSCILLATOR_RANGE);
    let raw = math::scale(
        &math::ratio(&math::sub(closes, &floor), &math::sub(&ceiling, &floor)),
        100.0,
    );
    math::tdx_sma(&math::tdx_sma(&raw, 3, 1), 3, 1)
}
