//! Renderable scene model and the drawing seam.
//!
//! The widget owns two shape objects (a circle outline and an angular
//! wedge) and mutates their properties in place; the host's rendering
//! surface receives the whole [`Scene`] on every redraw request and is
//! otherwise a black box.

use glam::DVec2;

use crate::viewport::ViewportBounds;

/// Circle outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    /// Center in plot coordinates.
    pub center: DVec2,
    /// Rendered radius (the display radius, mid-animation included).
    pub radius: f64,
    /// Outline color, linear RGB.
    pub edge_color: [f32; 3],
    /// Outline width in points.
    pub line_width: f32,
}

/// Annular wedge illustrating the circumference/diameter proportion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeShape {
    /// Center in plot coordinates.
    pub center: DVec2,
    /// Outer radius (tracks the circle outline).
    pub radius: f64,
    /// Start angle in degrees.
    pub theta1: f64,
    /// End angle in degrees.
    pub theta2: f64,
    /// Ring thickness in plot units.
    pub ring_width: f64,
    /// Fill color, linear RGB.
    pub face_color: [f32; 3],
    /// Fill opacity.
    pub alpha: f32,
}

/// Everything the surface needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    /// The circle outline.
    pub circle: CircleShape,
    /// The proportion wedge.
    pub wedge: WedgeShape,
    /// Current plot bounds.
    pub bounds: ViewportBounds,
}

/// The drawing seam. Hosts implement this over their real canvas.
pub trait RenderSurface {
    /// Redraw the scene. Called after every state-changing operation
    /// and on every animation tick.
    fn redraw(&mut self, scene: &Scene);
}

/// Outline color as a function of radius: red for small circles
/// blending to blue as the radius approaches 10 and beyond.
#[must_use]
pub fn edge_color_for(radius: f64) -> [f32; 3] {
    let c = (radius / 10.0).min(1.0) as f32;
    [1.0 - c, 0.0, c]
}

/// Surface that records every frame it is asked to draw.
///
/// Backs tests and headless hosts; the recorded frames double as a
/// trace of redraw-request timing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frames: Vec<Scene>,
}

impl RecordingSurface {
    /// Empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of redraws requested so far.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The most recently drawn frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&Scene> {
        self.frames.last()
    }

    /// All recorded frames, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[Scene] {
        &self.frames
    }
}

impl RenderSurface for RecordingSurface {
    fn redraw(&mut self, scene: &Scene) {
        self.frames.push(*scene);
    }
}
