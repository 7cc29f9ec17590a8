//! Rolling and smoothed series primitives shared by the indicator families.
//!
//! Every function maps a slice to a vector of the same length. `f64::NAN`
//! marks positions where the value is undefined: warm-up before a window is
//! filled, windows containing undefined samples, and zero denominators.
//! Boolean helpers treat undefined operands as "condition not met".

/// Trailing simple moving average over `window` samples.
///
/// Undefined for the first `window - 1` positions and wherever the trailing
/// window contains an undefined sample.
pub fn sma(series: &[f64], window: usize) -> Vec<f64> {
    assert!(window > 0, "sma window must be positive");
    let mut out = vec![f64::NAN; series.len()];
    for i in (window - 1)..series.len() {
        let win = &series[i + 1 - window..=i];
        if win.iter().all(|v| v.is_finite()) {
            out[i] = win.iter().sum::<f64>() / window as f64;
        }
    }
    out
}

/// TDX-style `SMA(X,N,M)`: a recursive weighted average equivalent to an
/// exponential moving average with smoothing factor `M/N`, realized through
/// the EMA span `max(1, round(2N/M - 1))`. When `M/N` falls outside `(0, 1]`
/// the span falls back to `N`.
///
/// Leading undefined values are preserved: the recursion seeds on the first
/// finite sample and the output stays undefined until `n` finite samples have
/// been consumed. A later undefined sample leaves the state untouched and
/// repeats the current smoothed value.
pub fn tdx_sma(series: &[f64], n: usize, m: usize) -> Vec<f64> {
    assert!(n > 0, "tdx_sma period must be positive");
    let factor = m as f64 / n as f64;
    let span = if factor > 0.0 && factor <= 1.0 {
        ((2.0 * n as f64 / m as f64 - 1.0).round() as usize).max(1)
    } else {
        n
    };
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut out = vec![f64::NAN; series.len()];
    let mut state = f64::NAN;
    let mut seen = 0usize;
    for (i, &x) in series.iter().enumerate() {
        if x.is_finite() {
            state = if state.is_finite() {
                alpha * x + (1.0 - alpha) * state
            } else {
                x
            };
            seen += 1;
        }
        if seen >= n && state.is_finite() {
            out[i] = state;
        }
    }
    out
}

/// Trailing minimum over `window` samples (TDX `LLV`).
pub fn rolling_min(series: &[f64], window: usize) -> Vec<f64> {
    assert!(window > 0, "rolling_min window must be positive");
    let mut out = vec![f64::NAN; series.len()];
    for i in (window - 1)..series.len() {
        let win = &series[i + 1 - window..=i];
        if win.iter().all(|v| v.is_finite()) {
            out[i] = win.iter().copied().fold(f64::INFINITY, f64::min);
        }
    }
    out
}

/// Trailing maximum over `window` samples (TDX `HHV`).
pub fn rolling_max(series: &[f64], window: usize) -> Vec<f64> {
    assert!(window > 0, "rolling_max window must be positive");
    let mut out = vec![f64::NAN; series.len()];
    for i in (window - 1)..series.len() {
        let win = &series[i + 1 - window..=i];
        if win.iter().all(|v| v.is_finite()) {
            out[i] = win.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        }
    }
    out
}

/// Value `k` positions earlier (TDX `REF`); undefined for the first `k`.
pub fn lag(series: &[f64], k: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; series.len()];
    for i in k..series.len() {
        out[i] = series[i - k];
    }
    out
}

/// Crossover detector (TDX `CROSS(A,B)`): true at `i` iff both series are
/// defined at `i-1` and `i`, `a` was at or below `b`, and is now above it.
pub fn crosses_above(a: &[f64], b: &[f64]) -> Vec<bool> {
    assert_eq!(a.len(), b.len(), "crosses_above inputs must align");
    let mut out = vec![false; a.len()];
    for i in 1..a.len() {
        if a[i - 1].is_finite() && b[i - 1].is_finite() && a[i].is_finite() && b[i].is_finite() {
            out[i] = a[i - 1] <= b[i - 1] && a[i] > b[i];
        }
    }
    out
}

/// Mirror of [`crosses_above`]: `a` was at or above `b` and is now below it.
pub fn crosses_below(a: &[f64], b: &[f64]) -> Vec<bool> {
    assert_eq!(a.len(), b.len(), "crosses_below inputs must align");
    let mut out = vec![false; a.len()];
    for i in 1..a.len() {
        if a[i - 1].is_finite() && b[i - 1].is_finite() && a[i].is_finite() && b[i].is_finite() {
            out[i] = a[i - 1] >= b[i - 1] && a[i] < b[i];
        }
    }
    out
}

/// [`crosses_above`] against a constant level.
pub fn crosses_above_level(series: &[f64], level: f64) -> Vec<bool> {
    let mut out = vec![false; series.len()];
    for i in 1..series.len() {
        if series[i - 1].is_finite() && series[i].is_finite() {
            out[i] = series[i - 1] <= level && series[i] > level;
        }
    }
    out
}

/// [`crosses_below`] against a constant level.
pub fn crosses_below_level(series: &[f64], level: f64) -> Vec<bool> {
    let mut out = vec![false; series.len()];
    for i in 1..series.len() {
        if series[i - 1].is_finite() && series[i].is_finite() {
            out[i] = series[i - 1] >= level && series[i] < level;
        }
    }
    out
}

/// Count of `true` in the trailing `window` positions (TDX `COUNT`); counts
/// over the partial window while fewer than `window` positions exist.
pub fn count_true(series: &[bool], window: usize) -> Vec<usize> {
    assert!(window > 0, "count_true window must be positive");
    let mut out = vec![0usize; series.len()];
    for i in 0..series.len() {
        let start = (i + 1).saturating_sub(window);
        out[i] = series[start..=i].iter().filter(|&&v| v).count();
    }
    out
}

/// Element-wise `a - b`; undefined operands propagate.
pub fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "sub inputs must align");
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Element-wise absolute value, preserving undefined samples.
pub fn abs(series: &[f64]) -> Vec<f64> {
    series.iter().map(|v| v.abs()).collect()
}

/// Element-wise `max(x, 0)`. `f64::max` would swallow the NaN, so undefined
/// samples are preserved explicitly.
pub fn positive_part(series: &[f64]) -> Vec<f64> {
    series
        .iter()
        .map(|&v| if v.is_finite() { v.max(0.0) } else { f64::NAN })
        .collect()
}

/// Element-wise division. Undefined when either operand is undefined or the
/// denominator is zero; every ratio in the indicator engine goes through here.
pub fn ratio(num: &[f64], den: &[f64]) -> Vec<f64> {
    assert_eq!(num.len(), den.len(), "ratio inputs must align");
    num.iter()
        .zip(den)
        .map(|(&n, &d)| {
            if n.is_finite() && d.is_finite() && d != 0.0 {
                n / d
            } else {
                f64::NAN
            }
        })
        .collect()
}

/// Element-wise scaling by a constant.
pub fn scale(series: &[f64], factor: f64) -> Vec<f64> {
    series.iter().map(|v| v * factor).collect()
}
