//! Puff Swing - a pendulum swing toy with a moody rider
//!
//! Core modules:
//! - `sim`: Pendulum physics (tick, push, amplitude estimate, zone classification)
//! - `tuning`: The fixed constant set carried as a value
//! - `feedback`: Wall-clock push flash timer (not part of the physics state)
//! - `scene`: Zone → message/mood/sky contract consumed by the renderer
//! - `session`: One swing per page/process, input queued to tick boundaries

pub mod feedback;
pub mod scene;
pub mod session;
pub mod sim;
pub mod tuning;

pub use feedback::PushFeedback;
pub use session::Session;
pub use tuning::{Tuning, TuningError};

/// Swing tuning constants
pub mod consts {
    /// Gravity factor (per-frame units)
    pub const GRAVITY: f64 = 0.4;
    /// Rope length factor; `GRAVITY / LENGTH_FACTOR` is the restoring constant k
    pub const LENGTH_FACTOR: f64 = 100.0;
    /// Per-tick velocity multiplier (air resistance)
    pub const DAMPING: f64 = 0.992;
    /// Push strength; a push adds `PUSH_FORCE / 10` to the velocity
    pub const PUSH_FORCE: f64 = 0.35;
    /// Hard limit of the swing angle in degrees
    pub const MAX_ANGLE_DEG: f64 = 85.0;

    /// Below this speed the swing counts as resting for a push
    pub const REST_VELOCITY: f64 = 0.01;

    /// Amplitude below this is "stopped"
    pub const STOPPED_BELOW_DEG: f64 = 2.0;
    /// Amplitude within this margin of the max angle is "max"
    pub const MAX_ZONE_MARGIN_DEG: f64 = 2.0;
    /// Amplitude above this is "high"
    pub const HIGH_ABOVE_DEG: f64 = 75.0;
    /// Amplitude from this up is "fun"
    pub const FUN_FROM_DEG: f64 = 30.0;

    /// Push flash duration (wall clock)
    pub const PUSH_FEEDBACK_MS: f64 = 200.0;
    /// Nominal display refresh rate the constants were tuned at
    pub const FRAME_RATE: u32 = 60;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

/// Radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Nominal frame duration in milliseconds at [`consts::FRAME_RATE`]
#[inline]
pub fn frame_ms() -> f64 {
    1000.0 / consts::FRAME_RATE as f64
}
