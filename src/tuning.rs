//! Swing tuning values
//!
//! The constants in [`crate::consts`] carried as one value so the simulator
//! reads them from a single place. Shipped builds only ever use
//! [`Tuning::default`]; sessions validate it on start.

use serde::Serialize;
use thiserror::Error;

use crate::consts::*;
use crate::deg_to_rad;

/// A tuning value the simulator cannot run with
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    /// A field is out of its allowed range
    #[error("invalid tuning value {field} = {value}: {reason}")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// The physical constant set of the swing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tuning {
    pub gravity: f64,
    pub length_factor: f64,
    /// Per-tick velocity multiplier, in (0, 1]
    pub damping: f64,
    pub push_force: f64,
    pub max_angle_deg: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            length_factor: LENGTH_FACTOR,
            damping: DAMPING,
            push_force: PUSH_FORCE,
            max_angle_deg: MAX_ANGLE_DEG,
        }
    }
}

impl Tuning {
    /// Restoring constant k = g / L
    #[inline]
    pub fn k(&self) -> f64 {
        self.gravity / self.length_factor
    }

    /// Velocity added by one push
    #[inline]
    pub fn push_impulse(&self) -> f64 {
        self.push_force / 10.0
    }

    #[inline]
    pub fn max_angle_rad(&self) -> f64 {
        deg_to_rad(self.max_angle_deg)
    }

    /// Amplitude (degrees) at which the swing counts as maxed out
    #[inline]
    pub fn max_zone_from_deg(&self) -> f64 {
        self.max_angle_deg - MAX_ZONE_MARGIN_DEG
    }

    /// Check every field is in range
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("gravity", self.gravity),
            ("length_factor", self.length_factor),
            ("damping", self.damping),
            ("push_force", self.push_force),
            ("max_angle_deg", self.max_angle_deg),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid(field, value, "must be finite"));
            }
        }

        if self.gravity <= 0.0 {
            return Err(invalid("gravity", self.gravity, "must be positive"));
        }
        if self.length_factor <= 0.0 {
            return Err(invalid("length_factor", self.length_factor, "must be positive"));
        }
        if self.damping <= 0.0 || self.damping > 1.0 {
            return Err(invalid("damping", self.damping, "must be in (0, 1]"));
        }
        if self.push_force < 0.0 {
            return Err(invalid("push_force", self.push_force, "must not be negative"));
        }
        if self.max_angle_deg <= 0.0 || self.max_angle_deg >= 180.0 {
            return Err(invalid(
                "max_angle_deg",
                self.max_angle_deg,
                "must be in (0, 180) degrees",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> TuningError {
    TuningError::Invalid {
        field,
        value,
        reason,
    }
}
