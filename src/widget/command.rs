//! The widget's complete interactive vocabulary.
//!
//! Every user-facing operation — slider drag, entry submit, button
//! press, or programmatic call — is represented as a [`RondelCommand`].
//! Consumers construct commands and pass them to
//! [`CircleWidget::execute`](super::CircleWidget::execute); the widget
//! never cares *how* a command was triggered.

/// A user-facing operation on the circle widget.
#[derive(Debug, Clone, PartialEq)]
pub enum RondelCommand {
    /// Move the circle center. Centers update immediately, without
    /// animation.
    SetCenter {
        /// New center x coordinate.
        x: f64,
        /// New center y coordinate.
        y: f64,
    },

    /// Continuous slider movement. The value is clamped to the radius
    /// floor and becomes the new animation target.
    SetRadiusFromSlider {
        /// Raw slider value.
        value: f64,
    },

    /// Radius entry submission (Return key). Invalid or out-of-range
    /// text reverts the entry mirror; valid text becomes the new
    /// animation target.
    SubmitRadiusText {
        /// Raw entry contents.
        text: String,
    },

    /// The update button: re-validate the entry text, then snap the
    /// rendered radius onto the target immediately, aborting any
    /// animation in flight.
    CommitRadius {
        /// Raw entry contents at press time.
        text: String,
    },
}
