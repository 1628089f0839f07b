use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Radius transition tuning.
pub struct AnimationOptions {
    /// Tick period in milliseconds.
    #[schemars(title = "Tick Interval", range(min = 1, max = 100))]
    pub tick_interval_ms: u64,
    /// Fraction of the remaining gap closed per tick.
    #[schemars(title = "Step Fraction", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub step_fraction: f64,
    /// Gap below which the display radius snaps onto the target.
    #[schemars(skip)]
    pub settle_threshold: f64,
}

impl AnimationOptions {
    /// Tick period as a [`Duration`].
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            tick_interval_ms: 15,
            step_fraction: 0.05,
            settle_threshold: 0.01,
        }
    }
}
