//! Per-frame session update
//!
//! Order within a tick: input events, countdown, clock, hook. Once the
//! countdown hits zero the session freezes where it stands; the hook does not
//! get to finish its current move.

use super::explosive;
use super::hook;
use super::scoring::DrawSource;
use super::state::{Session, SessionEvent, SessionPhase};

/// Discrete player/host input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Terminate the session immediately
    Quit,
    /// Drop the hook (only while swinging)
    ExtendHook,
    /// Blow up the hauled target (only while hauling, with a charge)
    Detonate,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub quit: bool,
    pub extend: bool,
    pub detonate: bool,
}

impl TickInput {
    pub fn from_events(events: &[InputEvent]) -> Self {
        let mut input = Self::default();
        for event in events {
            match event {
                InputEvent::Quit => input.quit = true,
                InputEvent::ExtendHook => input.extend = true,
                InputEvent::Detonate => input.detonate = true,
            }
        }
        input
    }

    pub fn is_empty(&self) -> bool {
        !(self.quit || self.extend || self.detonate)
    }
}

/// Advance the session by `dt` seconds.
///
/// Negative or non-finite deltas count as zero. A zero-length tick with no
/// input leaves the session untouched.
pub fn tick<D: DrawSource>(session: &mut Session<D>, input: &TickInput, dt: f32) {
    if session.phase != SessionPhase::Playing {
        return;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    if dt == 0.0 && input.is_empty() {
        return;
    }

    session.events.clear();

    if input.quit {
        session.phase = SessionPhase::Quit;
        session.events.push(SessionEvent::Quit);
        log::info!("Session quit with score {}", session.score);
        return;
    }
    if input.extend {
        hook::try_extend(session);
    }
    if input.detonate {
        explosive::try_detonate(session);
    }

    session.time_remaining -= dt;
    if session.time_remaining <= 0.0 {
        session.time_remaining = 0.0;
        session.phase = SessionPhase::TimeUp;
        if let Some(outcome) = session.outcome() {
            session.events.push(SessionEvent::TimeUp { outcome });
            log::info!(
                "Time up: {:?} with {} / {} points",
                outcome,
                session.score,
                session.tuning.target_score
            );
        }
        return;
    }

    session.clock += dt;
    session.hook.anchor = session.anchor_rect.center();
    hook::update(session, dt);
}
