//! Pure circle geometry.
//!
//! Stateless functions from a radius value to its derived quantities.
//! Callers guard the domain (`r >= 0`); nothing here errors or logs.

/// Diameter of a circle with radius `r`.
#[inline]
#[must_use]
pub fn diameter(r: f64) -> f64 {
    2.0 * r
}

/// Circumference of a circle with radius `r`.
#[inline]
#[must_use]
pub fn circumference(r: f64) -> f64 {
    std::f64::consts::PI * diameter(r)
}

/// Ratio of circumference to diameter.
///
/// Identically pi for any positive radius. For the degenerate `r = 0`
/// circle the ratio is defined as `0.0` rather than dividing by zero.
#[inline]
#[must_use]
pub fn pi_ratio(r: f64) -> f64 {
    let d = diameter(r);
    if d == 0.0 {
        0.0
    } else {
        circumference(r) / d
    }
}
