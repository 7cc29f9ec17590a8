//! Main-force in/out indicator (sub chart).
//!
//! Two mirrored flow lines measure how hard price strains against the prior
//! bar's close: the inflow line only accumulates on fresh 33-bar lows, the
//! outflow line on fresh 33-bar highs. The direction of each line bar over
//! bar yields entry/washout and exit/top-rush sub-signals. Two further
//! oversold patterns mark swing entry points and bottom confirmations.

use crate::common::math;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{MainForceLines, MainForceSignals};

/// Minimum history before the family produces a non-trivial result.
pub const MIN_BARS: usize = 38;

const EXTREME_RANGE: usize = 33;
const BOTTOM_RANGE: usize = 30;
const SWING_ENTRY_LEVEL: f64 = 19.0;

/// Latest-bar sub-signals; all false when the series is shorter than
/// [`MIN_BARS`].
pub fn calculate_main_force(series: &PriceSeries) -> MainForceSignals {
    main_force_history(series).pop().unwrap_or_default()
}

/// Per-bar sub-signals over the whole series.
pub fn main_force_history(series: &PriceSeries) -> Vec<MainForceSignals> {
    let len = series.len();
    if len < MIN_BARS {
        return vec![MainForceSignals::default(); len];
    }

    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();

    let inflow = inflow_line(&closes, &lows);
    let outflow = outflow_line(&closes, &highs);
    let swing = swing_ratio(&closes);
    let bottom = bottom_line(&lows);

    (0..len)
        .map(|i| {
            let (in_up, in_down) = direction(&inflow, i);
            let (out_up, out_down) = direction(&outflow, i);
            MainForceSignals {
                main_entry: in_up,
                washout: in_down,
                main_exit: out_down,
                top_rush: out_up,
                swing_entry: swing[i].is_finite() && swing[i] < SWING_ENTRY_LEVEL,
                golden_bottom: bottom[i].is_finite() && bottom[i] > 0.0,
            }
        })
        .collect()
}

/// Plot lines for chart display; not gated on [`MIN_BARS`].
pub fn main_force_lines(series: &PriceSeries) -> MainForceLines {
    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();
    MainForceLines {
        inflow: inflow_line(&closes, &lows),
        outflow: outflow_line(&closes, &highs),
        swing: swing_ratio(&closes),
        bottom: bottom_line(&lows),
    }
}

/// Bar-over-bar direction of a line; (false, false) while undefined.
fn direction(line: &[f64], i: usize) -> (bool, bool) {
    if i == 0 || !line[i].is_finite() || !line[i - 1].is_finite() {
        return (false, false);
    }
    (line[i] > line[i - 1], line[i] < line[i - 1])
}

/// Low-anchored strain, gated to fresh 33-bar lows and re-smoothed.
fn inflow_line(closes: &[f64], lows: &[f64]) -> Vec<f64> {
    let base = math::lag(closes, 1);
    let deviation = math::sub(lows, &base);
    let strain = math::ratio(
        &math::tdx_sma(&math::abs(&deviation), 13, 1),
        &math::tdx_sma(&math::positive_part(&deviation), 10, 1),
    );
    let depth = math::tdx_sma(&strain, 10, 1);
    let fresh_low = math::rolling_min(lows, EXTREME_RANGE);
    let gated: Vec<f64> = (0..lows.len())
        .map(|i| if lows[i] <= fresh_low[i] { depth[i] } else { 0.0 })
        .collect();
    math::tdx_sma(&gated, 3, 1)
}

/// High-anchored mirror: absolute strain over the downward deviation,
/// gated to fresh 33-bar highs.
fn outflow_line(closes: &[f64], highs: &[f64]) -> Vec<f64> {
    let base = math::lag(closes, 1);
    let deviation = math::sub(highs, &base);
    let strain = math::ratio(
        &math::tdx_sma(&math::abs(&deviation), 13, 1),
        &math::tdx_sma(&math::positive_part(&math::sub(&base, highs)), 10, 1),
    );
    let depth = math::tdx_sma(&strain, 10, 1);
    let fresh_high = math::rolling_max(highs, EXTREME_RANGE);
    let gated: Vec<f64> = (0..highs.len())
        .map(|i| {
            if highs[i] >= fresh_high[i] {
                depth[i]
            } else {
                0.0
            }
        })
        .collect();
    math::tdx_sma(&gated, 3, 1)
}

/// Share of upward movement in the 2-bar price change, x100; low values mark
/// oversold bounces.
fn swing_ratio(closes: &[f64]) -> Vec<f64> {
    let change = math::sub(closes, &math::lag(closes, 2));
    math::scale(
        &math::ratio(
            &math::tdx_sma(&math::positive_part(&change), 7, 1),
            &math::tdx_sma(&math::abs(&change), 7, 1),
        ),
        100.0,
    )
}

/// Day-over-day low churn, gated to fresh 30-bar lows and re-smoothed;
/// positive values confirm a bottom.
fn bottom_line(lows: &[f64]) -> Vec<f64> {
    let change = math::sub(lows, &math::lag(lows, 1));
    let churn = math::ratio(
        &math::tdx_sma(&math::abs(&change), 3, 1),
        &math::tdx_sma(&math::positive_part(&change), 3, 1),
    );
    let fresh_low = math::rolling_min(lows, BOTTOM_RANGE);
    let gated: Vec<f64> = (0..lows.len())
        .map(|i| if lows[i] <= fresh_low[i] { churn[i] } else { 0.0 })
        .collect();
    math::tdx_sma(&gated, 3, 1)
}
