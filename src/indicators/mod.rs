//! The three indicator families.
//!
//! Each family consumes a [`crate::models::bar::PriceSeries`], computes its
//! lines over the whole history, and reports boolean sub-signals for the
//! latest bar (or per bar, for trend display). Series shorter than a
//! family's minimum yield all-false sub-signals rather than an error.

pub mod chip_intent;
pub mod main_force;
pub mod pressure_support;

pub use chip_intent::{calculate_chip_intent, chip_intent_history, chip_intent_lines};
pub use main_force::{calculate_main_force, main_force_history, main_force_lines};
pub use pressure_support::{
    calculate_pressure_support, pressure_support_history, pressure_support_lines,
};
