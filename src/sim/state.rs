//! Swing state and zone types
//!
//! The only mutable physics state is [`SwingState`]. Everything else
//! (amplitude, zone) is derived from it each tick.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Amplitude band the swing is in, ordered calm to wild
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Effectively at rest, waiting for a push
    #[default]
    Stopped,
    /// Swinging, but gently
    Low,
    /// The happy band
    Fun,
    /// Too fast
    High,
    /// At the clamp limit
    Max,
}

impl Zone {
    /// All zones, calmest first
    pub const ALL: [Zone; 5] = [Zone::Stopped, Zone::Low, Zone::Fun, Zone::High, Zone::Max];

    /// Classify an amplitude (degrees). `max_from_deg` is where the max
    /// band starts, see [`Tuning::max_zone_from_deg`](crate::Tuning::max_zone_from_deg).
    ///
    /// Checked top to bottom, first match wins:
    /// `< 2` stopped, `>= max_from_deg` max, `> 75` high, `>= 30` fun, else low.
    pub fn classify(amplitude_deg: f64, max_from_deg: f64) -> Self {
        if amplitude_deg < STOPPED_BELOW_DEG {
            return Zone::Stopped;
        }
        if amplitude_deg >= max_from_deg {
            return Zone::Max;
        }
        if amplitude_deg > HIGH_ABOVE_DEG {
            return Zone::High;
        }
        if amplitude_deg >= FUN_FROM_DEG {
            return Zone::Fun;
        }
        Zone::Low
    }

    /// Lowercase name, as used in logs, JSON and `data-zone`
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Stopped => "stopped",
            Zone::Low => "low",
            Zone::Fun => "fun",
            Zone::High => "high",
            Zone::Max => "max",
        }
    }

    /// Index into [`Zone::ALL`]. Relies on the variants being declared in
    /// the same order as `ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical state of the swing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SwingState {
    /// Current angle (radians, 0 = hanging straight down)
    pub angle: f64,
    /// Angular velocity (radians per tick)
    pub angular_vel: f64,
}

impl SwingState {
    /// A swing hanging at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Swing at a given angle and velocity (used for scripted starts and tests)
    pub fn with(angle: f64, angular_vel: f64) -> Self {
        Self { angle, angular_vel }
    }

    /// Slow enough that a push restarts the swing instead of reinforcing it
    pub fn is_resting(&self) -> bool {
        self.angular_vel.abs() < REST_VELOCITY
    }

    /// Sign of the current motion (+1 for zero velocity)
    pub fn direction(&self) -> f64 {
        if self.angular_vel < 0.0 { -1.0 } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Tuning;

    #[test]
    fn test_zone_boundaries() {
        let max = Tuning::default().max_zone_from_deg();
        assert_eq!(Zone::classify(83.0, max), Zone::Max);
        assert_eq!(Zone::classify(82.999, max), Zone::High);
        assert_eq!(Zone::classify(75.0, max), Zone::Fun);
        assert_eq!(Zone::classify(75.001, max), Zone::High);
        assert_eq!(Zone::classify(30.0, max), Zone::Fun);
        assert_eq!(Zone::classify(29.999, max), Zone::Low);
        assert_eq!(Zone::classify(2.0, max), Zone::Low);
        assert_eq!(Zone::classify(1.999, max), Zone::Stopped);
        assert_eq!(Zone::classify(0.0, max), Zone::Stopped);
        assert_eq!(Zone::classify(180.0, max), Zone::Max);
    }

    #[test]
    fn test_max_threshold_follows_max_angle() {
        // A lower limit pulls the max band down past the high band
        let tuning = Tuning {
            max_angle_deg: 72.0,
            ..Default::default()
        };
        let max = tuning.max_zone_from_deg();
        assert_eq!(Zone::classify(70.0, max), Zone::Max);
        assert_eq!(Zone::classify(69.9, max), Zone::Fun);
    }

    #[test]
    fn test_zone_order_and_names() {
        for (i, zone) in Zone::ALL.iter().enumerate() {
            assert_eq!(zone.index(), i);
        }
        assert!(Zone::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Zone::Fun.to_string(), "fun");
        assert_eq!(serde_json::to_string(&Zone::Max).unwrap(), "\"max\"");
    }

    #[test]
    fn test_resting_and_direction() {
        assert!(SwingState::new().is_resting());
        assert!(SwingState::with(0.3, -0.009).is_resting());
        assert!(!SwingState::with(0.0, 0.01).is_resting());
        assert_eq!(SwingState::with(0.0, -0.2).direction(), -1.0);
        assert_eq!(SwingState::new().direction(), 1.0);
    }
}
