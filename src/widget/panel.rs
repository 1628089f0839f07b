//! Observer-free mirror of the host's control widgets.
//!
//! There is no reactive binding anywhere in the widget: every
//! propagation point is an explicit sync call, and the host pushes this
//! struct's fields into its real slider/entry/label widgets after each
//! dispatch.

use crate::geometry;

/// Formatted derived-quantity strings for the readout labels.
///
/// Always computed from the *target* radius, so the numbers never show
/// an intermediate mid-animation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readouts {
    /// Target radius, 2 decimals.
    pub radius: String,
    /// Diameter, 2 decimals.
    pub diameter: String,
    /// Circumference, 2 decimals.
    pub circumference: String,
    /// Circumference/diameter ratio, 5 decimals.
    pub pi_ratio: String,
}

impl Readouts {
    /// Format all readouts for the given radius.
    #[must_use]
    pub fn for_radius(radius: f64) -> Self {
        Self {
            radius: format!("{radius:.2}"),
            diameter: format!("{:.2}", geometry::diameter(radius)),
            circumference: format!("{:.2}", geometry::circumference(radius)),
            pi_ratio: format!("{:.5}", geometry::pi_ratio(radius)),
        }
    }
}

/// Mirror state for the radius controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    /// Contents the radius entry field should show.
    pub radius_text: String,
    /// Position the radius slider should sit at.
    pub slider_value: f64,
    /// Whether the slider and entry accept input. Cleared while a
    /// radius transition is animating.
    pub radius_inputs_enabled: bool,
    /// Readout label strings.
    pub readouts: Readouts,
}

impl ControlPanel {
    /// Panel synced to the given target radius, inputs enabled.
    #[must_use]
    pub fn new(target_radius: f64) -> Self {
        Self {
            radius_text: format!("{target_radius:.2}"),
            slider_value: target_radius,
            radius_inputs_enabled: true,
            readouts: Readouts::for_radius(target_radius),
        }
    }

    /// Point the radius entry and slider mirrors at `target`.
    pub(crate) fn sync_radius(&mut self, target: f64) {
        self.radius_text = format!("{target:.2}");
        self.slider_value = target;
    }

    /// Recompute the readout strings for `target`.
    pub(crate) fn refresh_readouts(&mut self, target: f64) {
        self.readouts = Readouts::for_radius(target);
    }

    pub(crate) fn set_radius_inputs_enabled(&mut self, enabled: bool) {
        self.radius_inputs_enabled = enabled;
    }
}
