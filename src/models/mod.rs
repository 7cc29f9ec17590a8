//! Shared data models spanning the engine layers.

pub mod bar;
pub mod indicators;
pub mod signal;

pub use bar::{PriceBar, PriceSeries, SeriesError};
pub use indicators::{
    ChipIntentSignals, IndicatorOutput, MainForceSignals, PressureSupportSignals,
};
pub use signal::{ConsolidatedSignal, DailySignal, SignalAction, SignalReason};
