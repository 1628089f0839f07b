use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
/// Plot-limit auto-scaling parameters.
pub struct ViewportOptions {
    /// Padding as a fraction of the display radius.
    #[schemars(title = "Padding Fraction", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub padding_fraction: f64,
    /// Fixed padding added on top of the fractional part.
    #[schemars(title = "Padding Base", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub padding_base: f64,
    /// Minimum per-edge movement before bounds are updated.
    #[schemars(skip)]
    pub hysteresis: f64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            padding_fraction: 0.5,
            padding_base: 5.0,
            hysteresis: 1.0,
        }
    }
}
