//! Swing simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - One tick per display frame
//! - No clocks, no rendering or platform dependencies
//! - Zone derived from amplitude only, never from the instantaneous angle

pub mod state;
pub mod tick;

pub use state::{SwingState, Zone};
pub use tick::{Frame, TickInput, amplitude, amplitude_deg, energy, push, tick};
