//! Unit tests for the pressure/support family

use chrono::{Duration, NaiveDate};
use navtrix::indicators::pressure_support::{
    calculate_pressure_support, pressure_support_history, pressure_support_lines, MIN_BARS,
};
use navtrix::models::bar::{PriceBar, PriceSeries};
use navtrix::models::indicators::PressureSupportSignals;

fn series_from_ohlc(rows: &[(f64, f64, f64)]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = rows
        .iter()
        .enumerate()
        .map(|(i, &(high, low, close))| {
            PriceBar::new(start + Duration::days(i as i64), close, high, low, close, 0.0)
        })
        .collect();
    PriceSeries::new(bars).unwrap()
}

fn flat_with_support_dip(count: usize) -> PriceSeries {
    let mut rows = vec![(1.0, 1.0, 1.0); count];
    // final bar pierces the support band intraday but closes back above it
    rows[count - 1] = (1.0, 0.5, 1.0);
    series_from_ohlc(&rows)
}

#[test]
fn test_minimum_length_is_exact() {
    let short = flat_with_support_dip(MIN_BARS - 1);
    assert_eq!(
        calculate_pressure_support(&short),
        PressureSupportSignals::default()
    );

    let enough = flat_with_support_dip(MIN_BARS);
    assert!(calculate_pressure_support(&enough).buy);
}

#[test]
fn test_support_dip_triggers_buy() {
    let series = flat_with_support_dip(40);
    let signals = calculate_pressure_support(&series);
    assert!(signals.buy);
    assert!(!signals.sell);
    assert!(!signals.entry);
}

#[test]
fn test_pressure_spike_triggers_sell() {
    let mut rows = vec![(1.0, 1.0, 1.0); 40];
    // spike above the pressure band (~1.08) with a close back below it
    rows[39] = (1.2, 1.0, 1.05);
    let signals = calculate_pressure_support(&series_from_ohlc(&rows));
    assert!(signals.sell);
    assert!(!signals.buy);
}

#[test]
fn test_momentum_bottom_triggers_entry() {
    // steady decline that decelerates, then a small bounce on the final bar
    let mut closes: Vec<f64> = (0..50).map(|i| 2.0 - 0.02 * i as f64).collect();
    let anchor = 2.0 - 0.02 * 44.0;
    closes[45] = anchor - 0.005;
    closes[46] = anchor - 0.008;
    closes[47] = anchor - 0.009;
    closes[48] = anchor - 0.0095;
    closes[49] = anchor + 0.01;
    let rows: Vec<(f64, f64, f64)> = closes.iter().map(|&c| (c, c, c)).collect();
    let signals = calculate_pressure_support(&series_from_ohlc(&rows));
    assert!(signals.entry);
}

#[test]
fn test_uptrend_stays_quiet() {
    let rows: Vec<(f64, f64, f64)> = (0..40)
        .map(|i| {
            let close = 1.0f64 * 1.01f64.powi(i);
            let low = if i == 0 { close } else { 1.0f64 * 1.01f64.powi(i - 1) };
            (close, low, close)
        })
        .collect();
    let signals = calculate_pressure_support(&series_from_ohlc(&rows));
    assert_eq!(signals, PressureSupportSignals::default());
}

#[test]
fn test_history_matches_series_length() {
    let series = flat_with_support_dip(40);
    let history = pressure_support_history(&series);
    assert_eq!(history.len(), 40);
    assert!(history[39].buy);
    assert!(!history[20].buy);
}

#[test]
fn test_lines_have_series_length_and_nan_warmup() {
    let series = flat_with_support_dip(40);
    let lines = pressure_support_lines(&series);
    assert_eq!(lines.buy_line.len(), 40);
    assert!(lines.buy_line[0].is_nan());
    assert!((lines.buy_line[39] - 0.9).abs() < 1e-9);
    assert!((lines.sell_line[39] - 1.08).abs() < 1e-9);
}

#[test]
fn test_constant_series_never_panics() {
    let rows = vec![(1.0, 1.0, 1.0); 80];
    let signals = calculate_pressure_support(&series_from_ohlc(&rows));
    assert_eq!(signals, PressureSupportSignals::default());
}
