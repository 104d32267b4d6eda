//! One swing for the lifetime of a page or process
//!
//! Input handlers and the frame loop share a single `Session` on one
//! thread. Pushes are queued and consumed at the start of the next tick, so
//! they never land mid-tick.

use serde::Serialize;

use crate::feedback::PushFeedback;
use crate::scene::Presentation;
use crate::sim::{Frame, SwingState, TickInput, Zone, tick};
use crate::tuning::{Tuning, TuningError};

/// A tick's output plus session-level bits
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionFrame {
    /// Ticks completed so far (1 for the first frame)
    pub tick: u64,
    #[serde(flatten)]
    pub frame: Frame,
    /// Push flash showing
    pub push_feedback: bool,
}

/// Swing state, pending input and the push flash timer
#[derive(Debug, Clone)]
pub struct Session {
    state: SwingState,
    tuning: Tuning,
    /// Input collected since the last tick
    input: TickInput,
    feedback: PushFeedback,
    zone: Zone,
    ticks: u64,
}

impl Session {
    /// Session with the swing at rest. The tuning is validated first.
    pub fn with_tuning(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        log::info!(
            "Swing session started (k = {:.4}, tuning {})",
            tuning.k(),
            serde_json::to_string(&tuning).unwrap_or_default()
        );

        let state = SwingState::new();
        let zone = Frame::of(&state, &tuning).zone;
        Ok(Self {
            state,
            tuning,
            input: TickInput::default(),
            feedback: PushFeedback::default(),
            zone,
            ticks: 0,
        })
    }

    /// Queue a push for the next tick and start the flash
    pub fn request_push(&mut self, now_ms: f64) {
        self.input.pushes = self.input.pushes.saturating_add(1);
        self.feedback.trigger(now_ms);
    }

    /// Run one tick with the queued input
    pub fn advance(&mut self, now_ms: f64) -> SessionFrame {
        let frame = tick(&mut self.state, &self.input, &self.tuning);
        self.ticks += 1;

        // Clear one-shot inputs after processing
        self.input.pushes = 0;

        if frame.zone != self.zone {
            log::debug!(
                "zone {} -> {} (amplitude {:.1}°, tick {})",
                self.zone,
                frame.zone,
                frame.amplitude_deg,
                self.ticks
            );
            self.zone = frame.zone;
        }

        SessionFrame {
            tick: self.ticks,
            frame,
            push_feedback: self.feedback.update(now_ms),
        }
    }

    /// Presentation for the zone of the last tick
    pub fn presentation(&self) -> Presentation {
        Presentation::for_zone(self.zone)
    }

    pub fn state(&self) -> &SwingState {
        &self.state
    }

    /// Zone of the last tick
    pub fn zone(&self) -> Zone {
        self.zone
    }
}
