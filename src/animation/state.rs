//! The circle's mutable state: center plus target and display radii.

use glam::DVec2;

/// Center and radii of the visualized circle.
///
/// `target_radius` is what the user asked for; `display_radius` is what
/// is rendered and converges toward the target. Both radii are behind
/// crate-private mutators: only the animator (or an explicit snap)
/// moves the display radius, and the target moves only through the
/// animator's retarget entry points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleState {
    center: DVec2,
    target_radius: f64,
    display_radius: f64,
}

impl CircleState {
    /// State with both radii settled at `radius`.
    #[must_use]
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            target_radius: radius,
            display_radius: radius,
        }
    }

    /// Circle center.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// The radius the user asked for.
    #[must_use]
    pub fn target_radius(&self) -> f64 {
        self.target_radius
    }

    /// The radius currently rendered.
    #[must_use]
    pub fn display_radius(&self) -> f64 {
        self.display_radius
    }

    /// Signed remaining gap, `target - display`.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.target_radius - self.display_radius
    }

    pub(crate) fn set_center(&mut self, center: DVec2) {
        self.center = center;
    }

    pub(crate) fn set_target_radius(&mut self, radius: f64) {
        self.target_radius = radius;
    }

    pub(crate) fn set_display_radius(&mut self, radius: f64) {
        self.display_radius = radius;
    }

    /// Snap the display radius exactly onto the target.
    pub(crate) fn snap_to_target(&mut self) {
        self.display_radius = self.target_radius;
    }
}
