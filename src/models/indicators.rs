//! Per-family sub-signal structs and the combined output fed to the
//! consolidator.

use serde::{Deserialize, Serialize};

/// Latest-bar sub-signals of the pressure/support band indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressureSupportSignals {
    /// Price reclaimed the support band.
    pub buy: bool,
    /// Price fell back through the pressure band.
    pub sell: bool,
    /// Momentum-ratio bottoming pattern (moderate buy).
    pub entry: bool,
}

/// Latest-bar sub-signals of the chip-intent indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChipIntentSignals {
    /// Price-position line crossed up through the oversold level.
    pub buy: bool,
    /// Price-position line crossed down through the overbought level.
    pub sell: bool,
    /// Main-force accumulation quantity is positive.
    pub accumulation: bool,
    /// Spread between the trend and warning lines breached the top threshold.
    pub top_warning: bool,
    /// Capped accumulation quantity; NaN while undefined.
    pub accumulation_strength: f64,
}

impl Default for ChipIntentSignals {
    fn default() -> Self {
        Self {
            buy: false,
            sell: false,
            accumulation: false,
            top_warning: false,
            accumulation_strength: f64::NAN,
        }
    }
}

/// Latest-bar sub-signals of the main-force in/out indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainForceSignals {
    /// Low-anchored inflow line rising: main force entering.
    pub main_entry: bool,
    /// Inflow line falling: shakeout.
    pub washout: bool,
    /// High-anchored outflow line falling: main force exiting.
    pub main_exit: bool,
    /// Outflow line rising: top rush.
    pub top_rush: bool,
    /// Oversold bounce entry point.
    pub swing_entry: bool,
    /// Bottom confirmation on a fresh low.
    pub golden_bottom: bool,
}

/// Combined latest-bar output of all three families.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IndicatorOutput {
    pub pressure_support: PressureSupportSignals,
    pub chip_intent: ChipIntentSignals,
    pub main_force: MainForceSignals,
}

/// Full-length plot lines of the pressure/support family.
#[derive(Debug, Clone, Serialize)]
pub struct PressureSupportLines {
    pub sell_line: Vec<f64>,
    pub buy_line: Vec<f64>,
    pub momentum: Vec<f64>,
    pub oscillator: Vec<f64>,
}

/// Full-length plot lines of the chip-intent family.
#[derive(Debug, Clone, Serialize)]
pub struct ChipIntentLines {
    pub position_line: Vec<f64>,
    pub accumulation_strength: Vec<f64>,
    pub trend_line: Vec<f64>,
    pub warning_line: Vec<f64>,
    pub shakeout: Vec<f64>,
}

/// Full-length plot lines of the main-force family.
#[derive(Debug, Clone, Serialize)]
pub struct MainForceLines {
    pub inflow: Vec<f64>,
    pub outflow: Vec<f64>,
    pub swing: Vec<f64>,
    pub bottom: Vec<f64>,
}
