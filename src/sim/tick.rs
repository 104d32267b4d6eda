//! Per-frame simulation tick
//!
//! Advances the swing once per display frame. There is no fixed timestep:
//! one call is one frame, so the swing runs faster on faster displays.

use serde::Serialize;

use super::state::{SwingState, Zone};
use crate::rad_to_deg;
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pushes requested since the last tick (click/tap/space), applied before integrating
    pub pushes: u32,
}

/// What one tick hands to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    /// Swing angle in degrees (rotation transform)
    pub angle_deg: f64,
    /// Estimated peak angle of the current swing in degrees, in [0, 180]
    pub amplitude_deg: f64,
    /// Zone derived from `amplitude_deg` only
    pub zone: Zone,
}

impl Frame {
    /// Frame describing a state as it is, without ticking
    pub fn of(state: &SwingState, tuning: &Tuning) -> Self {
        let amplitude_deg = amplitude_deg(state, tuning);
        Self {
            angle_deg: rad_to_deg(state.angle),
            amplitude_deg,
            zone: Zone::classify(amplitude_deg, tuning.max_zone_from_deg()),
        }
    }

    /// Rotation to apply to the swing, in degrees
    #[inline]
    pub fn rotation_deg(&self) -> f64 {
        self.angle_deg
    }
}

/// Apply a push. Returns the new angular velocity.
///
/// From rest the swing always starts in the positive direction; otherwise
/// the impulse is added along the current motion, so a push never slows
/// the swing down.
pub fn push(state: &mut SwingState, tuning: &Tuning) -> f64 {
    let impulse = tuning.push_impulse();
    if state.is_resting() {
        state.angular_vel = impulse;
    } else {
        state.angular_vel += impulse * state.direction();
    }
    log::debug!(
        "push: direction {:+}, velocity now {:.4}",
        state.direction(),
        state.angular_vel
    );
    state.angular_vel
}

/// Peak angle (radians) the swing would reach from its current position
/// and speed without damping, via energy conservation:
/// `cos(max) = cos(angle) - v² / 2k`.
pub fn amplitude(state: &SwingState, tuning: &Tuning) -> f64 {
    let v = state.angular_vel;
    let cos_max = state.angle.cos() - (0.5 * v * v) / tuning.k();
    // Out-of-range values mean "over the top" or "below rest"; acos needs [-1, 1]
    cos_max.clamp(-1.0, 1.0).acos()
}

/// [`amplitude`] in degrees
#[inline]
pub fn amplitude_deg(state: &SwingState, tuning: &Tuning) -> f64 {
    rad_to_deg(amplitude(state, tuning))
}

/// Mechanical energy per unit mass-length² (kinetic + potential)
pub fn energy(state: &SwingState, tuning: &Tuning) -> f64 {
    0.5 * state.angular_vel * state.angular_vel + tuning.k() * (1.0 - state.angle.cos())
}

/// Advance the swing by one frame
pub fn tick(state: &mut SwingState, input: &TickInput, tuning: &Tuning) -> Frame {
    for _ in 0..input.pushes {
        push(state, tuning);
    }

    // Full pendulum law (no small-angle linearisation): a = -k sin(theta)
    let k = tuning.k();
    let acceleration = -k * state.angle.sin();

    // Semi-implicit Euler: velocity first, then position with the new velocity
    state.angular_vel += acceleration;
    state.angular_vel *= tuning.damping;
    state.angle += state.angular_vel;

    clamp_to_limit(state, tuning.max_angle_rad());

    Frame::of(state, tuning)
}

/// Pin the angle to ±max. Velocity pushing further out is dropped so the
/// clamp never adds energy.
fn clamp_to_limit(state: &mut SwingState, max_rad: f64) {
    if state.angle > max_rad {
        state.angle = max_rad;
        if state.angular_vel > 0.0 {
            state.angular_vel = 0.0;
        }
        log::trace!("clamped at +{:.3} rad", max_rad);
    } else if state.angle < -max_rad {
        state.angle = -max_rad;
        if state.angular_vel < 0.0 {
            state.angular_vel = 0.0;
        }
        log::trace!("clamped at -{:.3} rad", max_rad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deg_to_rad;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_rest_stays_stopped() {
        let tuning = Tuning::default();
        let mut state = SwingState::new();
        let input = TickInput::default();

        for _ in 0..10_000 {
            let frame = tick(&mut state, &input, &tuning);
            assert_eq!(frame.zone, Zone::Stopped);
            assert!(frame.amplitude_deg.abs() < EPS);
        }
        assert_eq!(state, SwingState::new());
    }

    #[test]
    fn test_push_from_rest() {
        let tuning = Tuning::default();
        let mut state = SwingState::new();

        let vel = push(&mut state, &tuning);
        assert!((vel - 0.035).abs() < EPS);
        assert!((state.angular_vel - 0.035).abs() < EPS);

        // One push is enough to leave the calm bands but never enough to scare
        let frame = tick(&mut state, &TickInput::default(), &tuning);
        assert!(!matches!(frame.zone, Zone::High | Zone::Max));
        assert!(frame.amplitude_deg > 2.0 && frame.amplitude_deg < 35.0);
        assert!(frame.angle_deg > 0.0);
    }

    #[test]
    fn test_push_from_near_rest_replaces_velocity() {
        let tuning = Tuning::default();
        let mut state = SwingState::with(0.2, -0.005);
        push(&mut state, &tuning);
        assert!((state.angular_vel - 0.035).abs() < EPS);
    }

    #[test]
    fn test_push_reinforces_motion() {
        let tuning = Tuning::default();

        let mut forward = SwingState::with(0.0, 0.5);
        push(&mut forward, &tuning);
        assert!((forward.angular_vel - 0.535).abs() < EPS);

        let mut backward = SwingState::with(0.1, -0.5);
        push(&mut backward, &tuning);
        assert!((backward.angular_vel + 0.535).abs() < EPS);
    }

    #[test]
    fn test_tick_applies_push_input() {
        let tuning = Tuning::default();
        let mut pushed = SwingState::new();
        let mut manual = SwingState::new();

        tick(&mut pushed, &TickInput { pushes: 1 }, &tuning);
        push(&mut manual, &tuning);
        tick(&mut manual, &TickInput::default(), &tuning);

        assert_eq!(pushed, manual);
    }

    #[test]
    fn test_clamp_at_positive_limit() {
        let tuning = Tuning::default();
        let max = tuning.max_angle_rad();
        let mut state = SwingState::with(max, 0.1);

        let frame = tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.angle, max);
        assert_eq!(state.angular_vel, 0.0);
        assert!((frame.angle_deg - 85.0).abs() < 1e-9);
        assert_eq!(frame.zone, Zone::Max);
    }

    #[test]
    fn test_clamp_at_negative_limit() {
        let tuning = Tuning::default();
        let max = tuning.max_angle_rad();
        let mut state = SwingState::with(-max, -0.1);

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.angle, -max);
        assert_eq!(state.angular_vel, 0.0);
    }

    #[test]
    fn test_swing_falls_back_from_limit() {
        let tuning = Tuning::default();
        let max = tuning.max_angle_rad();
        let mut state = SwingState::with(max, 0.0);

        tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.angle < max);
        assert!(state.angular_vel < 0.0);
    }

    #[test]
    fn test_amplitude_of_still_swing_is_its_angle() {
        let tuning = Tuning::default();
        let state = SwingState::with(deg_to_rad(40.0), 0.0);
        assert!((amplitude_deg(&state, &tuning) - 40.0).abs() < 1e-9);

        let state = SwingState::with(deg_to_rad(-40.0), 0.0);
        assert!((amplitude_deg(&state, &tuning) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_amplitude_saturates_at_180() {
        let tuning = Tuning::default();
        let state = SwingState::with(0.0, 10.0);
        let amp = amplitude_deg(&state, &tuning);
        assert!(!amp.is_nan());
        assert!((amp - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_zone_steady_through_bottom() {
        // Zone must not flicker as the swing passes through zero
        let tuning = Tuning::default();
        let mut state = SwingState::with(deg_to_rad(50.0), 0.0);
        let input = TickInput::default();

        let mut crossed = false;
        for _ in 0..40 {
            let before = state.angle;
            let frame = tick(&mut state, &input, &tuning);
            if before.signum() != state.angle.signum() {
                crossed = true;
            }
            assert_eq!(frame.zone, Zone::Fun);
        }
        assert!(crossed, "swing should pass through the bottom");
    }

    #[test]
    fn test_peaks_decay() {
        let tuning = Tuning::default();
        let mut state = SwingState::with(0.5, 0.0);
        let input = TickInput::default();

        let mut peaks = Vec::new();
        let mut prev_vel = state.angular_vel;
        for _ in 0..2000 {
            tick(&mut state, &input, &tuning);
            if prev_vel * state.angular_vel < 0.0 {
                peaks.push(state.angle.abs());
            }
            prev_vel = state.angular_vel;
        }

        assert!(peaks.len() > 5);
        assert!(peaks[0] < 0.5);
        for pair in peaks.windows(2) {
            assert!(pair[1] < pair[0], "peaks should shrink: {:?}", pair);
        }
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning::default();
        let mut a = SwingState::new();
        let mut b = SwingState::new();

        for i in 0..500 {
            let input = TickInput {
                pushes: u32::from(i % 37 == 0),
            };
            let fa = tick(&mut a, &input, &tuning);
            let fb = tick(&mut b, &input, &tuning);
            assert_eq!(fa, fb);
        }
        assert_eq!(a, b);
    }
}
