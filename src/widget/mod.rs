//! The interaction controller.
//!
//! [`CircleWidget`] owns the animator, the viewport scaler, the scene
//! and the control-panel mirror, and wires them together: commands come
//! in, explicit syncs go out. Nothing propagates implicitly.

mod command;
mod panel;

pub use command::RondelCommand;
use glam::DVec2;
pub use panel::{ControlPanel, Readouts};

use crate::animation::{CircleState, RadiusAnimator, TickScheduler};
use crate::geometry;
use crate::options::Options;
use crate::render::{
    edge_color_for, CircleShape, RenderSurface, Scene, WedgeShape,
};
use crate::viewport::ViewportScaler;

/// Composes the animator, viewport scaler, scene and panel mirror
/// behind a command interface.
///
/// The widget is generic over its two seams: `S` supplies one-shot
/// timer callbacks, `R` accepts redraw requests. Hosts translate raw
/// slider/entry/button events into [`RondelCommand`] values, call
/// [`on_tick`](Self::on_tick) whenever a scheduled callback fires, and
/// mirror [`panel`](Self::panel) back into their real controls after
/// each dispatch.
#[derive(Debug)]
pub struct CircleWidget<S, R> {
    animator: RadiusAnimator,
    scaler: ViewportScaler,
    scene: Scene,
    panel: ControlPanel,
    options: Options,
    scheduler: S,
    surface: R,
}

impl<S: TickScheduler, R: RenderSurface> CircleWidget<S, R> {
    /// Build a widget in its startup state and draw the first frame.
    pub fn new(scheduler: S, surface: R, options: Options) -> Self {
        let center = DVec2::from_array(options.controls.initial_center);
        let radius = options.controls.initial_radius;

        let animator = RadiusAnimator::new(
            CircleState::new(center, radius),
            options.animation.clone(),
        );
        let scaler = ViewportScaler::new(center, radius, &options.viewport);
        let scene = Scene {
            circle: CircleShape {
                center,
                radius,
                edge_color: edge_color_for(radius),
                line_width: options.colors.circle_line_width,
            },
            wedge: WedgeShape {
                center,
                radius,
                theta1: 0.0,
                theta2: wedge_angle(radius),
                ring_width: options.colors.wedge_ring_width,
                face_color: options.colors.wedge_face,
                alpha: options.colors.wedge_alpha,
            },
            bounds: scaler.bounds(),
        };

        let mut widget = Self {
            animator,
            scaler,
            scene,
            panel: ControlPanel::new(radius),
            options,
            scheduler,
            surface,
        };
        widget.surface.redraw(&widget.scene);
        widget
    }

    /// Dispatch one user-facing operation.
    pub fn execute(&mut self, command: RondelCommand) {
        match command {
            RondelCommand::SetCenter { x, y } => self.set_center(x, y),
            RondelCommand::SetRadiusFromSlider { value } => {
                self.radius_from_slider(value);
            }
            RondelCommand::SubmitRadiusText { text } => {
                self.submit_radius_text(&text);
            }
            RondelCommand::CommitRadius { text } => self.commit_radius(&text),
        }
    }

    /// Advance the animation when a scheduled callback fires.
    pub fn on_tick(&mut self) {
        if !self.animator.tick(&mut self.scheduler) {
            self.panel.set_radius_inputs_enabled(true);
            log::debug!(
                "radius settled at {}",
                self.animator.state().target_radius()
            );
        }
        self.sync_scene();
    }

    /// Current circle state.
    #[must_use]
    pub fn state(&self) -> &CircleState {
        self.animator.state()
    }

    /// Mirror state for the host's controls.
    #[must_use]
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// The renderable scene as of the last sync.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Whether a radius transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// The scheduler seam.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler seam, for hosts that pump it.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The rendering seam.
    #[must_use]
    pub fn surface(&self) -> &R {
        &self.surface
    }

    // ── Command handlers ─────────────────────────────────────────────

    fn set_center(&mut self, x: f64, y: f64) {
        self.animator.set_center(DVec2::new(x, y));
        self.sync_scene();
    }

    fn radius_from_slider(&mut self, value: f64) {
        if !self.panel.radius_inputs_enabled {
            return;
        }
        // Nominal slider range already starts at the floor; clamp anyway.
        let value = value.max(self.options.controls.radius_min);
        self.apply_target(value);
    }

    fn submit_radius_text(&mut self, text: &str) {
        if !self.panel.radius_inputs_enabled {
            return;
        }
        let target = self.animator.state().target_radius();
        let Some(value) = self.parse_radius(text) else {
            // Revert, don't alert: the entry mirror goes back to the
            // last valid target and nothing else happens.
            self.panel.sync_radius(target);
            return;
        };
        if (value - target).abs() <= self.options.animation.settle_threshold {
            self.panel.sync_radius(target);
            return;
        }
        self.apply_target(value);
    }

    fn commit_radius(&mut self, text: &str) {
        match self.parse_radius(text) {
            Some(value) => {
                self.animator.set_target_snapped(value, &mut self.scheduler);
                self.panel.sync_radius(value);
            }
            None => {
                let target = self.animator.state().target_radius();
                self.animator.snap(&mut self.scheduler);
                self.panel.sync_radius(target);
            }
        }
        self.panel.set_radius_inputs_enabled(true);
        self.sync_scene();
    }

    // ── Internals ────────────────────────────────────────────────────

    fn apply_target(&mut self, value: f64) {
        let started = self.animator.set_target(value, &mut self.scheduler);
        self.panel.sync_radius(value);
        if started {
            self.panel.set_radius_inputs_enabled(false);
            log::debug!(
                "animating radius {} -> {value}",
                self.animator.state().display_radius()
            );
        }
        self.sync_scene();
    }

    fn parse_radius(&self, text: &str) -> Option<f64> {
        let value: f64 = text.trim().parse().ok()?;
        let controls = &self.options.controls;
        (value >= controls.radius_min && value <= controls.radius_max)
            .then_some(value)
    }

    /// Push the current state into the scene and panel, then redraw.
    ///
    /// The rendered radius follows the display radius; the wedge's
    /// angular extent and all readouts follow the target radius, so the
    /// illustrated proportion never drifts mid-animation.
    fn sync_scene(&mut self) {
        let state = *self.animator.state();
        let center = state.center();
        let display = state.display_radius();
        let target = state.target_radius();

        self.scene.circle.center = center;
        self.scene.circle.radius = display;
        self.scene.circle.edge_color = edge_color_for(display);

        self.scene.wedge.center = center;
        self.scene.wedge.radius = display;
        self.scene.wedge.theta2 = wedge_angle(target);

        if self.scaler.rescale(center, display) {
            self.scene.bounds = self.scaler.bounds();
        }

        self.panel.refresh_readouts(target);
        self.surface.redraw(&self.scene);
    }
}

/// Wedge end angle in degrees for a target radius.
fn wedge_angle(target_radius: f64) -> f64 {
    (geometry::pi_ratio(target_radius) / std::f64::consts::PI) * 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualScheduler;
    use crate::render::RecordingSurface;

    type TestWidget = CircleWidget<ManualScheduler, RecordingSurface>;

    fn make_widget() -> TestWidget {
        CircleWidget::new(
            ManualScheduler::new(),
            RecordingSurface::new(),
            Options::default(),
        )
    }

    /// Pump scheduled callbacks until the animation settles.
    fn run_animation(widget: &mut TestWidget) {
        for _ in 0..10_000 {
            if widget.scheduler_mut().fire_next().is_none() {
                break;
            }
            widget.on_tick();
        }
    }

    #[test]
    fn test_initial_frame_and_readouts() {
        let widget = make_widget();
        assert_eq!(widget.surface().frame_count(), 1);

        let panel = widget.panel();
        assert_eq!(panel.radius_text, "5.00");
        assert_eq!(panel.readouts.diameter, "10.00");
        assert_eq!(panel.readouts.circumference, "31.42");
        assert_eq!(panel.readouts.pi_ratio, "3.14159");

        let scene = widget.scene();
        assert_eq!(scene.circle.radius, 5.0);
        assert_eq!(scene.wedge.theta2, 360.0);
        assert_eq!(scene.bounds.x_max, 12.5);
    }

    #[test]
    fn test_slider_starts_animation_and_disables_inputs() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SetRadiusFromSlider { value: 50.0 });

        assert!(widget.is_animating());
        assert!(!widget.panel().radius_inputs_enabled);
        assert_eq!(widget.panel().radius_text, "50.00");
        // Readouts already show the target...
        assert_eq!(widget.panel().readouts.diameter, "100.00");
        // ...while the rendered circle hasn't moved yet.
        assert_eq!(widget.scene().circle.radius, 5.0);
    }

    #[test]
    fn test_animation_runs_to_exact_target() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SetRadiusFromSlider { value: 50.0 });

        assert!(widget.scheduler_mut().fire_next().is_some());
        widget.on_tick();
        assert!((widget.scene().circle.radius - 7.25).abs() < 1e-12);
        // Wedge extent keeps illustrating the target ratio mid-flight.
        assert_eq!(widget.scene().wedge.theta2, 360.0);

        run_animation(&mut widget);
        assert!(!widget.is_animating());
        assert!(widget.panel().radius_inputs_enabled);
        assert_eq!(widget.scene().circle.radius, 50.0);
        assert_eq!(widget.state().display_radius(), 50.0);
    }

    #[test]
    fn test_slider_floor_is_enforced() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SetRadiusFromSlider { value: 0.25 });
        run_animation(&mut widget);
        assert_eq!(widget.state().target_radius(), 1.0);
    }

    #[test]
    fn test_radius_commands_dropped_while_inputs_disabled() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SetRadiusFromSlider { value: 50.0 });
        assert!(widget.is_animating());

        // A disabled slider/entry cannot emit events; late arrivals
        // are dropped rather than redirecting the transition.
        widget.execute(RondelCommand::SetRadiusFromSlider { value: 80.0 });
        widget.execute(RondelCommand::SubmitRadiusText {
            text: "80".to_owned(),
        });
        assert_eq!(widget.state().target_radius(), 50.0);
        assert_eq!(widget.scheduler().pending_count(), 1);

        run_animation(&mut widget);
        assert_eq!(widget.state().display_radius(), 50.0);
    }

    #[test]
    fn test_submit_malformed_text_reverts_silently() {
        let mut widget = make_widget();
        let frames_before = widget.surface().frame_count();
        widget.execute(RondelCommand::SubmitRadiusText {
            text: "abc".to_owned(),
        });

        assert_eq!(widget.panel().radius_text, "5.00");
        assert_eq!(widget.state().target_radius(), 5.0);
        assert!(!widget.is_animating());
        // No redraw: the failure is recovered purely in the entry mirror.
        assert_eq!(widget.surface().frame_count(), frames_before);
    }

    #[test]
    fn test_submit_out_of_range_reverts() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SubmitRadiusText {
            text: "150".to_owned(),
        });
        assert_eq!(widget.panel().radius_text, "5.00");
        assert!(!widget.is_animating());

        widget.execute(RondelCommand::SubmitRadiusText {
            text: "0.5".to_owned(),
        });
        assert_eq!(widget.panel().radius_text, "5.00");
        assert!(!widget.is_animating());
    }

    #[test]
    fn test_submit_valid_text_animates() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SubmitRadiusText {
            text: "42".to_owned(),
        });

        assert!(widget.is_animating());
        assert_eq!(widget.state().target_radius(), 42.0);
        assert_eq!(widget.panel().radius_text, "42.00");

        run_animation(&mut widget);
        assert_eq!(widget.state().display_radius(), 42.0);
    }

    #[test]
    fn test_submit_negligible_change_resyncs_formatting() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SubmitRadiusText {
            text: "5.001".to_owned(),
        });
        assert!(!widget.is_animating());
        assert_eq!(widget.panel().radius_text, "5.00");
        assert_eq!(widget.state().target_radius(), 5.0);
    }

    #[test]
    fn test_commit_mid_animation_snaps() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SetRadiusFromSlider { value: 50.0 });
        assert!(widget.scheduler_mut().fire_next().is_some());
        widget.on_tick();
        assert!(widget.is_animating());

        widget.execute(RondelCommand::CommitRadius {
            text: widget.panel().radius_text.clone(),
        });

        assert!(!widget.is_animating());
        assert!(widget.panel().radius_inputs_enabled);
        assert_eq!(widget.state().display_radius(), 50.0);
        assert_eq!(widget.scene().circle.radius, 50.0);
        assert_eq!(widget.scheduler().pending_count(), 0);
    }

    #[test]
    fn test_commit_with_bad_text_still_snaps() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SetRadiusFromSlider { value: 50.0 });
        widget.execute(RondelCommand::CommitRadius {
            text: "garbage".to_owned(),
        });

        assert!(!widget.is_animating());
        assert_eq!(widget.panel().radius_text, "50.00");
        assert_eq!(widget.state().display_radius(), 50.0);
    }

    #[test]
    fn test_set_center_redraws_immediately() {
        let mut widget = make_widget();
        let frames_before = widget.surface().frame_count();
        widget.execute(RondelCommand::SetCenter { x: 3.0, y: -2.0 });

        assert_eq!(widget.surface().frame_count(), frames_before + 1);
        assert_eq!(widget.scene().circle.center, DVec2::new(3.0, -2.0));
        assert_eq!(widget.scene().wedge.center, DVec2::new(3.0, -2.0));
        assert!(!widget.is_animating());
        // Bounds follow the center once past the hysteresis threshold.
        assert_eq!(widget.scene().bounds.x_max, 15.5);
    }

    #[test]
    fn test_viewport_holds_still_through_tail_ticks() {
        let mut widget = make_widget();
        widget.execute(RondelCommand::SetRadiusFromSlider { value: 50.0 });
        run_animation(&mut widget);

        let settled_bounds = widget.scene().bounds;
        // The tail of the exponential approach moves the radius by far
        // less than the hysteresis threshold per tick; bounds at the
        // end must match a fresh computation for the target radius.
        assert!((settled_bounds.x_max - 80.0).abs() <= 1.0);

        widget.execute(RondelCommand::SetCenter { x: 0.1, y: 0.1 });
        assert_eq!(widget.scene().bounds, settled_bounds);
    }

    #[test]
    fn test_edge_color_tracks_rendered_radius() {
        let mut widget = make_widget();
        assert_eq!(widget.scene().circle.edge_color, [0.5, 0.0, 0.5]);

        widget.execute(RondelCommand::SetRadiusFromSlider { value: 50.0 });
        run_animation(&mut widget);
        assert_eq!(widget.scene().circle.edge_color, [0.0, 0.0, 1.0]);
    }
}
