use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Input ranges and startup state.
pub struct ControlOptions {
    /// Smallest accepted radius (slider floor, entry validation).
    #[schemars(title = "Radius Min", range(min = 0.1, max = 10.0))]
    pub radius_min: f64,
    /// Largest accepted radius.
    #[schemars(title = "Radius Max", range(min = 10.0, max = 1000.0))]
    pub radius_max: f64,
    /// Radius at startup.
    #[schemars(title = "Initial Radius", range(min = 1.0, max = 100.0))]
    pub initial_radius: f64,
    /// Circle center at startup.
    #[schemars(skip)]
    pub initial_center: [f64; 2],
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            radius_min: 1.0,
            radius_max: 100.0,
            initial_radius: 5.0,
            initial_center: [0.0, 0.0],
        }
    }
}
