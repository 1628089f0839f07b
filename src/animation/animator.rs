//! The radius transition engine.

use super::scheduler::{TickHandle, TickScheduler};
use super::state::CircleState;
use crate::options::AnimationOptions;

/// Drives the display radius toward the target radius over discrete
/// timer ticks.
///
/// Two states: *idle* (no pending callback, display == target) and
/// *animating* (exactly one pending callback held in `session`). Each
/// tick closes a fixed fraction of the remaining gap, so the approach
/// is an exponential decay rather than a linear sweep; once the gap
/// falls inside the settle threshold the display snaps exactly onto
/// the target, eliminating the asymptotic residue.
///
/// Every retarget follows the same order: cancel the pending callback,
/// mutate the state, then reschedule if needed. A superseded session
/// can therefore never fire against stale state, and at most one
/// callback is pending at any instant.
#[derive(Debug)]
pub struct RadiusAnimator {
    state: CircleState,
    session: Option<TickHandle>,
    tuning: AnimationOptions,
}

impl RadiusAnimator {
    /// Animator starting settled at the given state.
    #[must_use]
    pub fn new(state: CircleState, tuning: AnimationOptions) -> Self {
        Self {
            state,
            session: None,
            tuning,
        }
    }

    /// Current circle state.
    #[must_use]
    pub fn state(&self) -> &CircleState {
        &self.state
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    /// Move the circle center. Centers are never animated.
    pub fn set_center(&mut self, center: glam::DVec2) {
        self.state.set_center(center);
    }

    /// Set a new target radius, starting or redirecting a transition.
    ///
    /// Returns `true` if an animation is now running. A target within
    /// the settle threshold of the current display radius is applied
    /// by snapping instead.
    pub fn set_target(
        &mut self,
        radius: f64,
        sched: &mut dyn TickScheduler,
    ) -> bool {
        self.cancel_session(sched);
        self.state.set_target_radius(radius);

        if self.state.gap().abs() > self.tuning.settle_threshold {
            self.session =
                Some(sched.schedule(self.tuning.tick_interval()));
            true
        } else {
            self.state.snap_to_target();
            false
        }
    }

    /// Set a new target and apply it immediately, without animation.
    pub fn set_target_snapped(
        &mut self,
        radius: f64,
        sched: &mut dyn TickScheduler,
    ) {
        self.cancel_session(sched);
        self.state.set_target_radius(radius);
        self.state.snap_to_target();
    }

    /// Abort any in-flight transition and jump the display radius onto
    /// the target.
    pub fn snap(&mut self, sched: &mut dyn TickScheduler) {
        self.cancel_session(sched);
        self.state.snap_to_target();
    }

    /// Advance one animation step. Call when the scheduled callback
    /// fires.
    ///
    /// Returns `true` while the transition keeps running (a follow-up
    /// callback has been scheduled), `false` once it settles. Idle
    /// animators ignore stray ticks.
    pub fn tick(&mut self, sched: &mut dyn TickScheduler) -> bool {
        let Some(handle) = self.session.take() else {
            return false;
        };
        // A fired handle is spent; cancelling it is a no-op. A handle
        // somehow still pending must not outlive this tick.
        sched.cancel(handle);

        let step = self.state.gap() * self.tuning.step_fraction;
        self.state
            .set_display_radius(self.state.display_radius() + step);

        if self.state.gap().abs() < self.tuning.settle_threshold {
            self.state.snap_to_target();
            false
        } else {
            self.session =
                Some(sched.schedule(self.tuning.tick_interval()));
            true
        }
    }

    fn cancel_session(&mut self, sched: &mut dyn TickScheduler) {
        if let Some(handle) = self.session.take() {
            sched.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::animation::scheduler::ManualScheduler;

    fn animator_at(radius: f64) -> RadiusAnimator {
        RadiusAnimator::new(
            CircleState::new(DVec2::ZERO, radius),
            AnimationOptions::default(),
        )
    }

    /// Drive the animator until it settles, returning the display radius
    /// after every tick.
    fn run_to_settle(
        animator: &mut RadiusAnimator,
        sched: &mut ManualScheduler,
    ) -> Vec<f64> {
        let mut trace = Vec::new();
        for _ in 0..10_000 {
            if sched.fire_next().is_none() {
                break;
            }
            let running = animator.tick(sched);
            trace.push(animator.state().display_radius());
            if !running {
                break;
            }
        }
        trace
    }

    #[test]
    fn test_first_tick_closes_five_percent() {
        let mut animator = animator_at(5.0);
        let mut sched = ManualScheduler::new();

        assert!(animator.set_target(50.0, &mut sched));
        assert!(sched.fire_next().is_some());
        assert!(animator.tick(&mut sched));
        // 5 + (50 - 5) * 0.05
        assert!((animator.state().display_radius() - 7.25).abs() < 1e-12);
    }

    #[test]
    fn test_convergence_is_monotone_and_exact() {
        let mut animator = animator_at(5.0);
        let mut sched = ManualScheduler::new();
        assert!(animator.set_target(50.0, &mut sched));

        let trace = run_to_settle(&mut animator, &mut sched);
        assert!(!trace.is_empty());
        for pair in trace.windows(2) {
            assert!(pair[1] > pair[0], "approach must be monotone");
        }
        // Settles in finite ticks and lands exactly on the target.
        assert_eq!(animator.state().display_radius(), 50.0);
        assert!(!animator.is_animating());
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn test_shrinking_transition_is_monotone_down() {
        let mut animator = animator_at(80.0);
        let mut sched = ManualScheduler::new();
        assert!(animator.set_target(10.0, &mut sched));

        let trace = run_to_settle(&mut animator, &mut sched);
        for pair in trace.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert_eq!(animator.state().display_radius(), 10.0);
    }

    #[test]
    fn test_rapid_retargets_keep_one_pending_callback() {
        let mut animator = animator_at(5.0);
        let mut sched = ManualScheduler::new();

        for target in [50.0, 60.0, 70.0, 80.0, 90.0] {
            assert!(animator.set_target(target, &mut sched));
            assert_eq!(sched.pending_count(), 1);
        }
        assert_eq!(animator.state().target_radius(), 90.0);

        // The surviving callback drives the last target home.
        let _ = run_to_settle(&mut animator, &mut sched);
        assert_eq!(animator.state().display_radius(), 90.0);
    }

    #[test]
    fn test_retarget_mid_flight_reschedules() {
        let mut animator = animator_at(5.0);
        let mut sched = ManualScheduler::new();

        assert!(animator.set_target(50.0, &mut sched));
        assert!(sched.fire_next().is_some());
        assert!(animator.tick(&mut sched));

        assert!(animator.set_target(20.0, &mut sched));
        assert_eq!(sched.pending_count(), 1);
        assert_eq!(animator.state().target_radius(), 20.0);
        // Display keeps its mid-flight value until the next tick.
        assert!((animator.state().display_radius() - 7.25).abs() < 1e-12);
    }

    #[test]
    fn test_snap_cancels_and_lands_on_target() {
        let mut animator = animator_at(5.0);
        let mut sched = ManualScheduler::new();

        assert!(animator.set_target(50.0, &mut sched));
        animator.snap(&mut sched);

        assert!(!animator.is_animating());
        assert_eq!(sched.pending_count(), 0);
        assert_eq!(animator.state().display_radius(), 50.0);
        // The canceled callback never comes back.
        assert_eq!(sched.fire_next(), None);
    }

    #[test]
    fn test_negligible_target_change_snaps_without_animation() {
        let mut animator = animator_at(5.0);
        let mut sched = ManualScheduler::new();

        assert!(!animator.set_target(5.005, &mut sched));
        assert!(!animator.is_animating());
        assert_eq!(sched.pending_count(), 0);
        assert_eq!(animator.state().display_radius(), 5.005);
    }

    #[test]
    fn test_set_target_snapped() {
        let mut animator = animator_at(5.0);
        let mut sched = ManualScheduler::new();

        assert!(animator.set_target(50.0, &mut sched));
        animator.set_target_snapped(42.0, &mut sched);

        assert!(!animator.is_animating());
        assert_eq!(sched.pending_count(), 0);
        assert_eq!(animator.state().target_radius(), 42.0);
        assert_eq!(animator.state().display_radius(), 42.0);
    }

    #[test]
    fn test_idle_tick_is_ignored() {
        let mut animator = animator_at(5.0);
        let mut sched = ManualScheduler::new();
        assert!(!animator.tick(&mut sched));
        assert_eq!(animator.state().display_radius(), 5.0);
    }
}
