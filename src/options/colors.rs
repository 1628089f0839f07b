use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Static shape styling.
///
/// The circle outline color is not here: it is computed from the
/// rendered radius (see [`crate::render::edge_color_for`]).
pub struct ColorOptions {
    /// Wedge fill color, linear RGB.
    pub wedge_face: [f32; 3],
    /// Wedge fill opacity.
    pub wedge_alpha: f32,
    /// Wedge ring thickness in plot units.
    pub wedge_ring_width: f64,
    /// Circle outline width in points.
    pub circle_line_width: f32,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            wedge_face: [1.0, 0.647, 0.0],
            wedge_alpha: 0.5,
            wedge_ring_width: 0.05,
            circle_line_width: 2.0,
        }
    }
}
