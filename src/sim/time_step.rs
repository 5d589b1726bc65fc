//! Time step control.
//!
//! Jumping straight to a new time step visibly breaks the orbits, so a
//! requested target is approached in bounded increments and only snapped to
//! once it is close.

use crate::sim::units::Float;

/// Above this distance from the target, the ramp keeps stepping.
pub(crate) const RAMP_TOLERANCE: Float = 100_000.;
pub(crate) const RAMP_INCREMENT: Float = 25_000.;

/// Time steps (s) that put the presets into visible resonances, selected with keys 0 to 5.
pub(crate) const RESONANT_TARGETS: [Float; 6] = [
    0.,
    4_946_400.,
    6_048_000.,
    7_844_400.,
    9_248_400.,
    11_296_800.,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum RampState {
    Idle,
    Ramping { target: Float },
}

#[derive(Clone, Debug)]
pub(crate) struct TimeStepController {
    state: RampState,
}

impl Default for TimeStepController {
    fn default() -> Self {
        Self {
            state: RampState::Idle,
        }
    }
}

impl TimeStepController {
    pub(crate) fn target(&self) -> Option<Float> {
        match self.state {
            RampState::Ramping { target } => Some(target),
            RampState::Idle => None,
        }
    }

    /// Starts (or retargets) a ramp towards `target`.
    pub(crate) fn set_target(&mut self, target: Float) {
        self.state = RampState::Ramping { target };
    }

    /// Moves `time_step` one increment closer to the target, snapping once close.
    pub(crate) fn advance(&mut self, time_step: &mut Float) {
        let RampState::Ramping { target } = self.state else {
            return;
        };

        let difference = (target - *time_step).abs();
        if difference > RAMP_TOLERANCE {
            if *time_step < target {
                *time_step += RAMP_INCREMENT;
            } else {
                *time_step -= RAMP_INCREMENT;
            }
        } else {
            *time_step = target;
            self.state = RampState::Idle;
            log::info!("Time step settled at {} s", target);
        }
    }

    /// Applies a manual change to `time_step`. Any active ramp carries on from the new value.
    pub(crate) fn nudge(&self, time_step: &mut Float, delta: Float) {
        *time_step += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::units::{EIGHTH_DAY, QUARTER_DAY};

    #[test]
    fn ramp_up_increments_then_snaps_without_overshoot() {
        let target = 11_296_800.;
        let mut controller = TimeStepController::default();
        let mut time_step = 0.;
        controller.set_target(target);

        let mut ticks = 0;
        while controller.target().is_some() {
            let before = time_step;
            controller.advance(&mut time_step);
            ticks += 1;
            assert!(time_step <= target);
            if (target - before).abs() > RAMP_TOLERANCE {
                assert_eq!(time_step, before + RAMP_INCREMENT);
            } else {
                assert_eq!(time_step, target);
            }
            assert!(ticks < 10_000);
        }

        println!("Settled after {} ticks", ticks);
        // 448 increments leave 96800 s, which is within tolerance
        assert_eq!(ticks, 449);
        assert_eq!(time_step, target);
        assert_eq!(controller.target(), None);
    }

    #[test]
    fn ramp_down_decrements_towards_lower_target() {
        let mut controller = TimeStepController::default();
        let mut time_step = 1_000_000.;
        controller.set_target(0.);

        controller.advance(&mut time_step);
        assert_eq!(time_step, 975_000.);
        while controller.target().is_some() {
            controller.advance(&mut time_step);
            assert!(time_step >= 0.);
        }
        assert_eq!(time_step, 0.);
    }

    #[test]
    fn close_target_is_snapped_immediately() {
        let mut controller = TimeStepController::default();
        let mut time_step = 86_400.;
        controller.set_target(0.);
        controller.advance(&mut time_step);
        assert_eq!(time_step, 0.);
        assert!(controller.target().is_none());
    }

    #[test]
    fn idle_controller_leaves_time_step_alone() {
        let mut controller = TimeStepController::default();
        let mut time_step = 12_345.;
        controller.advance(&mut time_step);
        assert_eq!(time_step, 12_345.);
        assert_eq!(controller.target(), None);
    }

    #[test]
    fn nudges_do_not_touch_ramp_state() {
        let mut controller = TimeStepController::default();
        let mut time_step = 0.;
        controller.nudge(&mut time_step, QUARTER_DAY);
        controller.nudge(&mut time_step, -EIGHTH_DAY);
        assert_eq!(time_step, 10_800.);
        assert!(controller.target().is_none());

        controller.set_target(RESONANT_TARGETS[5]);
        controller.nudge(&mut time_step, QUARTER_DAY);
        assert_eq!(time_step, 32_400.);
        assert_eq!(controller.target(), Some(11_296_800.));

        controller.advance(&mut time_step);
        assert_eq!(time_step, 57_400.);
    }

    #[test]
    fn retargeting_mid_ramp_changes_direction() {
        let mut controller = TimeStepController::default();
        let mut time_step = 0.;
        controller.set_target(6_048_000.);
        for _ in 0..10 {
            controller.advance(&mut time_step);
        }
        assert_eq!(time_step, 250_000.);

        controller.set_target(-1_000_000.);
        controller.advance(&mut time_step);
        assert_eq!(time_step, 225_000.);
    }
}
