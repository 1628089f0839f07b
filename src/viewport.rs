//! Plot-limit auto-scaling with hysteresis.

use glam::DVec2;

use crate::options::ViewportOptions;

/// Axis-aligned plot bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl ViewportBounds {
    /// Square bounds extending `half_extent` from `center` on each axis.
    #[must_use]
    pub fn around(center: DVec2, half_extent: f64) -> Self {
        Self {
            x_min: center.x - half_extent,
            x_max: center.x + half_extent,
            y_min: center.y - half_extent,
            y_max: center.y + half_extent,
        }
    }

    /// Largest absolute per-edge difference against `other`.
    #[must_use]
    pub fn max_edge_delta(&self, other: &Self) -> f64 {
        let deltas = [
            (self.x_min - other.x_min).abs(),
            (self.x_max - other.x_max).abs(),
            (self.y_min - other.y_min).abs(),
            (self.y_max - other.y_max).abs(),
        ];
        deltas.into_iter().fold(0.0, f64::max)
    }
}

/// Computes padded bounds from the display radius, suppressing
/// sub-threshold updates.
///
/// During an animation the display radius changes by a fraction of the
/// remaining gap every tick; rescaling the plot for each of those
/// slivers would shimmer. Bounds therefore only move when some edge of
/// the padded candidate box differs from the current bounds by more
/// than the hysteresis threshold.
#[derive(Debug, Clone)]
pub struct ViewportScaler {
    bounds: ViewportBounds,
    tuning: ViewportOptions,
}

impl ViewportScaler {
    /// Scaler seeded directly from the initial state (no hysteresis on
    /// the first bounds).
    #[must_use]
    pub fn new(
        center: DVec2,
        display_radius: f64,
        tuning: &ViewportOptions,
    ) -> Self {
        let bounds =
            ViewportBounds::around(center, Self::half_extent(display_radius, tuning));
        Self {
            bounds,
            tuning: tuning.clone(),
        }
    }

    /// Current bounds.
    #[must_use]
    pub fn bounds(&self) -> ViewportBounds {
        self.bounds
    }

    /// Recompute bounds for the given state. Returns `true` when the
    /// bounds actually moved.
    pub fn rescale(&mut self, center: DVec2, display_radius: f64) -> bool {
        let candidate = ViewportBounds::around(
            center,
            Self::half_extent(display_radius, &self.tuning),
        );
        if candidate.max_edge_delta(&self.bounds) > self.tuning.hysteresis {
            self.bounds = candidate;
            true
        } else {
            false
        }
    }

    fn half_extent(display_radius: f64, tuning: &ViewportOptions) -> f64 {
        let padding =
            display_radius * tuning.padding_fraction + tuning.padding_base;
        display_radius + padding
    }
}
