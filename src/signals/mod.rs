//! Signal consolidation: scoring, decision rules, evaluation engine.

pub mod decision;
pub mod engine;
pub mod scoring;

pub use decision::decide;
pub use engine::SignalEngine;
pub use scoring::{score_signals, ScoreBreakdown};
