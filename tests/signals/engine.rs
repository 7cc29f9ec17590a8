//! Unit tests for the signal engine

use chrono::{Duration, NaiveDate};
use navtrix::models::bar::{PriceBar, PriceSeries};
use navtrix::models::signal::SignalAction;
use navtrix::signals::engine::SignalEngine;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
}

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::new(day(i as i64), c, c, c, c, 0.0))
        .collect();
    PriceSeries::new(bars).unwrap()
}

fn steady_decline(count: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = (0..count)
        .map(|i| {
            let c = 2.0 - 0.012 * i as f64;
            PriceBar::new(
                start + Duration::days(i as i64),
                c,
                c + 0.002,
                c - 0.002,
                c,
                0.0,
            )
        })
        .collect();
    PriceSeries::new(bars).unwrap()
}

#[test]
fn test_empty_series_holds() {
    let signal = SignalEngine::new().evaluate(&PriceSeries::new(Vec::new()).unwrap());
    assert_eq!(signal.action, SignalAction::Hold);
    assert_eq!(signal.buy_score, 0.0);
    assert_eq!(signal.sell_score, 0.0);
}

#[test]
fn test_single_bar_holds() {
    let signal = SignalEngine::new().evaluate(&series_from_closes(&[1.0]));
    assert_eq!(signal.action, SignalAction::Hold);
}

#[test]
fn test_undefined_latest_close_holds_with_zero_scores() {
    let mut closes: Vec<f64> = (0..80).map(|i| 2.0 - 0.012 * i as f64).collect();
    closes[79] = f64::NAN;
    let signal = SignalEngine::new().evaluate(&series_from_closes(&closes));
    assert_eq!(signal.action, SignalAction::Hold);
    assert_eq!(signal.buy_score, 0.0);
    assert_eq!(signal.sell_score, 0.0);
    assert!(signal.reasons.is_empty());
}

#[test]
fn test_constant_series_holds() {
    let signal = SignalEngine::new().evaluate(&series_from_closes(&[1.0; 80]));
    assert_eq!(signal.action, SignalAction::Hold);
    assert_eq!(signal.buy_score, 0.0);
    assert_eq!(signal.sell_score, 0.0);
}

#[test]
fn test_oversold_decline_buys() {
    let (signal, output) = SignalEngine::new().evaluate_with_indicators(&steady_decline(80));
    assert_eq!(signal.action, SignalAction::Buy);
    assert_eq!(signal.buy_score, 2.0);
    assert_eq!(signal.sell_score, 0.0);
    assert!(output.main_force.swing_entry);
    assert_eq!(signal.reasons.len(), 1);
}

#[test]
fn test_repeated_evaluation_is_deterministic() {
    let series = steady_decline(80);
    let engine = SignalEngine::new();
    let first = engine.evaluate(&series);
    let second = engine.evaluate(&series);
    assert_eq!(first.action, second.action);
    assert_eq!(first.buy_score, second.buy_score);
    assert_eq!(first.sell_score, second.sell_score);
    assert_eq!(first.reasons.len(), second.reasons.len());
}

#[test]
fn test_history_covers_trailing_days() {
    let series = steady_decline(80);
    let history = SignalEngine::new().evaluate_history(&series, 10);
    assert_eq!(history.len(), 10);
    assert_eq!(history[0].date, day(70));
    assert_eq!(history[9].date, day(79));
    // the latest history row matches the latest-bar evaluation
    let latest = SignalEngine::new().evaluate(&series);
    assert_eq!(history[9].signal.action, latest.action);
    assert_eq!(history[9].signal.buy_score, latest.buy_score);
}

#[test]
fn test_history_longer_than_series_returns_everything() {
    let series = steady_decline(40);
    let history = SignalEngine::new().evaluate_history(&series, 100);
    assert_eq!(history.len(), 40);
}

#[test]
fn test_history_row_with_undefined_close_holds() {
    let mut closes: Vec<f64> = (0..80).map(|i| 2.0 - 0.012 * i as f64).collect();
    closes[78] = f64::NAN;
    let history = SignalEngine::new().evaluate_history(&series_from_closes(&closes), 5);
    let row = &history[3];
    assert_eq!(row.date, day(78));
    assert_eq!(row.signal.action, SignalAction::Hold);
    assert_eq!(row.signal.buy_score, 0.0);
}
