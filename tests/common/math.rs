//! Unit tests for the smoothed-series primitives

use navtrix::common::math;

#[test]
fn test_sma_values() {
    let out = math::sma(&[1.0, 2.0, 3.0, 4.0], 2);
    assert!(out[0].is_nan());
    assert_eq!(out[1], 1.5);
    assert_eq!(out[2], 2.5);
    assert_eq!(out[3], 3.5);
}

#[test]
fn test_sma_nan_poisons_window() {
    let out = math::sma(&[1.0, f64::NAN, 3.0], 2);
    assert!(out.iter().all(|v| v.is_nan()));
}

#[test]
#[should_panic]
fn test_sma_zero_window_is_a_caller_bug() {
    math::sma(&[1.0, 2.0], 0);
}

#[test]
fn test_tdx_sma_values() {
    // n=2, m=1: span 3, alpha 0.5, defined after 2 finite samples
    let out = math::tdx_sma(&[1.0, 2.0, 3.0, 4.0], 2, 1);
    assert!(out[0].is_nan());
    assert_eq!(out[1], 1.5);
    assert_eq!(out[2], 2.25);
    assert_eq!(out[3], 3.125);
}

#[test]
fn test_tdx_sma_unit_period_passes_through() {
    let out = math::tdx_sma(&[2.0, 5.0, 1.0], 1, 1);
    assert_eq!(out, vec![2.0, 5.0, 1.0]);
}

#[test]
fn test_tdx_sma_falls_back_when_alpha_out_of_range() {
    // m/n = 1.5 is outside (0, 1]: span falls back to n=2, alpha 2/3
    let out = math::tdx_sma(&[1.0, 2.0, 3.0], 2, 3);
    assert!(out[0].is_nan());
    assert!((out[1] - 5.0 / 3.0).abs() < 1e-12);
    assert!((out[2] - 23.0 / 9.0).abs() < 1e-12);
}

#[test]
fn test_tdx_sma_preserves_leading_undefined() {
    let out = math::tdx_sma(&[f64::NAN, f64::NAN, 1.0, 2.0], 2, 1);
    assert!(out[0].is_nan());
    assert!(out[1].is_nan());
    assert!(out[2].is_nan());
    assert_eq!(out[3], 1.5);
}

#[test]
fn test_tdx_sma_repeats_across_gaps() {
    let out = math::tdx_sma(&[1.0, 2.0, f64::NAN, 4.0], 2, 1);
    assert_eq!(out[1], 1.5);
    assert_eq!(out[2], 1.5);
    assert_eq!(out[3], 2.75);
}

#[test]
fn test_rolling_extrema() {
    let min = math::rolling_min(&[3.0, 1.0, 2.0, 0.5], 2);
    assert!(min[0].is_nan());
    assert_eq!(&min[1..], &[1.0, 1.0, 0.5][..]);

    let max = math::rolling_max(&[3.0, 1.0, 2.0, 0.5], 2);
    assert!(max[0].is_nan());
    assert_eq!(&max[1..], &[3.0, 2.0, 2.0][..]);
}

#[test]
fn test_lag() {
    let out = math::lag(&[1.0, 2.0, 3.0], 2);
    assert!(out[0].is_nan() && out[1].is_nan());
    assert_eq!(out[2], 1.0);
}

#[test]
fn test_crosses_above_fires_on_exactly_one_bar() {
    // strictly increasing through the level
    let a = [1.0, 2.0, 3.0];
    let level = [2.5, 2.5, 2.5];
    assert_eq!(math::crosses_above(&a, &level), vec![false, false, true]);

    // flat then jump
    let a = [1.0, 1.0, 1.0, 1.0, 4.0];
    let level = [2.0; 5];
    assert_eq!(
        math::crosses_above(&a, &level),
        vec![false, false, false, false, true]
    );
}

#[test]
fn test_crosses_above_allows_touch_on_prior_bar() {
    assert_eq!(
        math::crosses_above(&[1.5, 2.0], &[1.5, 1.5]),
        vec![false, true]
    );
}

#[test]
fn test_crosses_with_undefined_operand_is_false() {
    assert_eq!(
        math::crosses_above(&[f64::NAN, 2.0], &[1.5, 1.5]),
        vec![false, false]
    );
}

#[test]
fn test_crosses_below_mirror() {
    let a = [3.0, 2.0, 1.0];
    let level = [1.5, 1.5, 1.5];
    assert_eq!(math::crosses_below(&a, &level), vec![false, false, true]);
    assert_eq!(
        math::crosses_below_level(&a, 1.5),
        vec![false, false, true]
    );
}

#[test]
fn test_count_true_partial_windows() {
    let out = math::count_true(&[true, true, false, true], 2);
    assert_eq!(out, vec![1, 2, 1, 1]);
}

#[test]
fn test_ratio_undefined_on_zero_denominator() {
    let out = math::ratio(&[1.0, 2.0, f64::NAN], &[0.0, 4.0, 2.0]);
    assert!(out[0].is_nan());
    assert_eq!(out[1], 0.5);
    assert!(out[2].is_nan());
}

#[test]
fn test_positive_part_keeps_undefined() {
    let out = math::positive_part(&[-1.0, 2.0, f64::NAN]);
    assert_eq!(out[0], 0.0);
    assert_eq!(out[1], 2.0);
    assert!(out[2].is_nan());
}
