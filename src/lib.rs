//! TDX-style technical indicator engine and signal consolidator.
//!
//! The crate turns a daily price history (typically a fund NAV series with
//! approximated OHLC fields) into a ternary `Buy`/`Sell`/`Hold` decision.
//! Three indicator families produce boolean sub-signals for the latest bar;
//! a weighted scoring pass consolidates them into one decision plus the
//! buy/sell scores that produced it.
//!
//! Data fetching, report rendering and scheduling live outside this crate:
//! the only boundary is `PriceSeries` in, [`ConsolidatedSignal`] out.
//!
//! ```
//! use chrono::NaiveDate;
//! use navtrix::{PriceBar, PriceSeries, SignalEngine};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut bars = Vec::new();
//! let mut prev = 1.0_f64;
//! for i in 0..80i64 {
//!     let nav = 1.0 + (i as f64) * 0.002;
//!     bars.push(PriceBar::from_nav(start + chrono::Duration::days(i), nav, Some(prev)));
//!     prev = nav;
//! }
//! let series = PriceSeries::new(bars).unwrap();
//! let signal = SignalEngine::new().evaluate(&series);
//! println!("{:?} (buy {:.1} / sell {:.1})", signal.action, signal.buy_score, signal.sell_score);
//! ```

pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;

pub use models::bar::{PriceBar, PriceSeries, SeriesError};
pub use models::indicators::IndicatorOutput;
pub use models::signal::{ConsolidatedSignal, DailySignal, SignalAction};
pub use signals::engine::SignalEngine;
