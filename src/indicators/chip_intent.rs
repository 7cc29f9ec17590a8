//! Chip-intent indicator (sub chart): buy/sell points, main-force
//! accumulation and a top warning.
//!
//! The price-position line locates close inside the `[LLV(low,10),
//! HHV(high,25)]` range on a 0..4 scale; crossing up through 0.3 is a buy
//! point, crossing down through 3.5 a sell point. Accumulation tracks
//! smoothed day-over-day low churn, gated to fresh 30-bar lows. The top
//! warning fires when the long trend line runs away from its warning line.

use crate::common::math;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{ChipIntentLines, ChipIntentSignals};

/// Minimum history before the family produces a non-trivial result.
pub const MIN_BARS: usize = 65;

const POSITION_LOW_RANGE: usize = 10;
const POSITION_HIGH_RANGE: usize = 25;
const POSITION_BUY_LEVEL: f64 = 0.3;
const POSITION_SELL_LEVEL: f64 = 3.5;
const SURGE_FACTOR: f64 = 1.3;
const BOTTOM_RANGE: usize = 30;
const ACCUMULATION_DIVISOR: f64 = 618.0;
const ACCUMULATION_CAP: f64 = 100.0;
const WARNING_RANGE: usize = 21;
const WARNING_SPREAD: f64 = 85.0;
const SHAKEOUT_RANGE: usize = 60;
const SHAKEOUT_BAND: f64 = 0.10;

/// Latest-bar sub-signals; all false when the series is shorter than
/// [`MIN_BARS`].
pub fn calculate_chip_intent(series: &PriceSeries) -> ChipIntentSignals {
    chip_intent_history(series).pop().unwrap_or_default()
}

/// Per-bar sub-signals over the whole series.
pub fn chip_intent_history(series: &PriceSeries) -> Vec<ChipIntentSignals> {
    let len = series.len();
    if len < MIN_BARS {
        return vec![ChipIntentSignals::default(); len];
    }

    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();

    let position = position_line(&closes, &highs, &lows);
    let buy = math::crosses_above_level(&position, POSITION_BUY_LEVEL);
    let sell = math::crosses_below_level(&position, POSITION_SELL_LEVEL);

    let strength = accumulation_strength(&closes, &lows);

    let (trend, warning) = trend_lines(&closes, &highs, &lows);

    (0..len)
        .map(|i| ChipIntentSignals {
            buy: buy[i],
            sell: sell[i],
            accumulation: strength[i].is_finite() && strength[i] > 0.0,
            top_warning: trend[i].is_finite()
                && warning[i].is_finite()
                && trend[i] - warning[i] > WARNING_SPREAD,
            accumulation_strength: strength[i],
        })
        .collect()
}

/// Plot lines for chart display; not gated on [`MIN_BARS`].
pub fn chip_intent_lines(series: &PriceSeries) -> ChipIntentLines {
    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();
    let (trend, warning) = trend_lines(&closes, &highs, &lows);

    ChipIntentLines {
        position_line: position_line(&closes, &highs, &lows),
        accumulation_strength: accumulation_strength(&closes, &lows),
        trend_line: trend,
        warning_line: warning,
        shakeout: shakeout_line(&closes),
    }
}

/// Smoothed 0..4 position of close inside the trailing low/high range.
fn position_line(closes: &[f64], highs: &[f64], lows: &[f64]) -> Vec<f64> {
    let floor = math::rolling_min(lows, POSITION_LOW_RANGE);
    let ceiling = math::rolling_max(highs, POSITION_HIGH_RANGE);
    let raw = math::scale(
        &math::ratio(&math::sub(closes, &floor), &math::sub(&ceiling, &floor)),
        4.0,
    );
    math::tdx_sma(&raw, 4, 1)
}

/// Main-force accumulation quantity, capped at [`ACCUMULATION_CAP`].
fn accumulation_strength(closes: &[f64], lows: &[f64]) -> Vec<f64> {
    let low_change = math::sub(lows, &math::lag(lows, 1));
    let churn = math::scale(
        &math::ratio(
            &math::tdx_sma(&math::abs(&low_change), 3, 1),
            &math::tdx_sma(&math::positive_part(&low_change), 3, 1),
        ),
        100.0,
    );

    let prev_close = math::lag(closes, 1);
    let scaled: Vec<f64> = churn
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if closes[i] > SURGE_FACTOR * prev_close[i] {
                v * 10.0
            } else {
                v / 10.0
            }
        })
        .collect();

    let base = math::tdx_sma(&scaled, 3, 1);
    let peak = math::rolling_max(&base, BOTTOM_RANGE);
    let fresh_low = math::rolling_min(lows, BOTTOM_RANGE);
    let gated: Vec<f64> = (0..lows.len())
        .map(|i| {
            if lows[i] <= fresh_low[i] {
                (base[i] + 2.0 * peak[i]) / 2.0
            } else {
                0.0
            }
        })
        .collect();

    math::tdx_sma(&gated, 3, 1)
        .iter()
        .map(|v| {
            if v.is_finite() {
                (v / ACCUMULATION_DIVISOR).min(ACCUMULATION_CAP)
            } else {
                f64::NAN
            }
        })
        .collect()
}

/// Long trend line (ceil of a double 13,8 smoothing of the low-side position)
/// and its 21,8-smoothed warning counterpart.
fn trend_lines(closes: &[f64], highs: &[f64], lows: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let ceiling = math::rolling_max(highs, WARNING_RANGE);
    let floor = math::rolling_min(lows, WARNING_RANGE);
    let span = math::sub(&ceiling, &floor);

    let from_top: Vec<f64> = math::ratio(&math::sub(&ceiling, closes), &span)
        .iter()
        .map(|v| v * 100.0 - 10.0)
        .collect();
    let from_bottom = math::scale(&math::ratio(&math::sub(closes, &floor), &span), 100.0);

    let trend: Vec<f64> = math::tdx_sma(&math::tdx_sma(&from_bottom, 13, 8), 13, 8)
        .iter()
        .map(|v| v.ceil())
        .collect();
    let warning = math::tdx_sma(&from_top, 21, 8);
    (trend, warning)
}

/// Share of the trailing 60 closes within 10% of the current close, smoothed.
/// A rough winners-distribution proxy for NAV data, display only.
fn shakeout_line(closes: &[f64]) -> Vec<f64> {
    let len = closes.len();
    let mut held = vec![f64::NAN; len];
    for i in (SHAKEOUT_RANGE - 1)..len {
        let current = closes[i];
        if !current.is_finite() {
            continue;
        }
        let window = &closes[i + 1 - SHAKEOUT_RANGE..=i];
        let lower = (1.0 - SHAKEOUT_BAND) * current;
        let upper = (1.0 + SHAKEOUT_BAND) * current;
        let in_band = window
            .iter()
            .filter(|v| v.is_finite() && **v >= lower && **v <= upper)
            .count();
        held[i] = in_band as f64 / SHAKEOUT_RANGE as f64 * 100.0;
    }
    math::scale(
        &math::tdx_sma(&math::positive_part(&held), 10, 1),
        100.0,
    )
}
