//! Price bars and the validated series the engine consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contract violations in caller-supplied series.
///
/// Data-quality problems (NaN closes, short history) never surface here;
/// they resolve to defined fallback results downstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("bar dates must be strictly increasing: {next} does not follow {prev}")]
    NonMonotonicDates { prev: NaiveDate, next: NaiveDate },
}

/// One daily price bar. For fund data `close` carries the NAV and the other
/// fields are caller-side approximations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Build a bar from a single NAV quote, approximating the missing OHLC
    /// fields the way fund feeds require: open is the prior close, high/low
    /// span the two. Fund NAV feeds carry no volume.
    pub fn from_nav(date: NaiveDate, nav: f64, prev_nav: Option<f64>) -> Self {
        let open = prev_nav.unwrap_or(nav);
        Self {
            date,
            open,
            high: nav.max(open),
            low: nav.min(open),
            close: nav,
            volume: 0.0,
        }
    }
}

/// A date-ordered sequence of bars. Construction validates the ordering
/// contract once; everything downstream can rely on it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Wrap a bar sequence, rejecting out-of-order or duplicate dates.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, SeriesError> {
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::NonMonotonicDates {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn opens(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
