// src/cooking/engine.rs — Cooking session state machine
//
// Holds at most one session. Every operation reads the clock once, mutates,
// and returns; there is no internal timer. Calls made in the wrong state
// are silent no-ops.

use std::sync::Arc;

use tracing::{debug, trace};

use super::session::{ActiveSession, SessionSnapshot, SessionStatus};
use crate::infra::clock::{Clock, SystemClock};
use crate::recipes::Recipe;

/// Result of `stop` and `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Precondition not met, or no time passed.
    Ignored,
    /// Time was added; still on the same step.
    Accrued,
    /// Moved on to `step_index`.
    Advanced { step_index: usize },
    /// The last step is done.
    Completed,
}

pub struct SessionEngine {
    clock: Arc<dyn Clock>,
    status: SessionStatus,
    active: Option<ActiveSession>,
}

impl SessionEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            status: SessionStatus::Idle,
            active: None,
        }
    }

    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            active: self.active.clone(),
        }
    }

    /// Begin cooking `recipe_id` from the first step, discarding any
    /// existing session.
    pub fn start(&mut self, recipe_id: &str) {
        let now = self.clock.now_ms();
        if let Some(old) = &self.active {
            debug!(
                "Replacing session for '{}' at step {}",
                old.recipe_id, old.step_index
            );
        }
        self.active = Some(ActiveSession::new(recipe_id, now));
        self.status = SessionStatus::Running;
        debug!("Session started for '{}'", recipe_id);
    }

    pub fn pause(&mut self) {
        if self.status != SessionStatus::Running {
            return;
        }
        let Some(session) = self.active.as_mut() else {
            return;
        };
        let delta = session.accrue(self.clock.now_ms());
        self.status = SessionStatus::Paused;
        debug!(
            "Session paused at step {} (+{}ms, total {}ms)",
            session.step_index, delta, session.total_elapsed_ms
        );
    }

    pub fn resume(&mut self) {
        if self.status != SessionStatus::Paused {
            return;
        }
        let Some(session) = self.active.as_mut() else {
            return;
        };
        session.started_at_ms = self.clock.now_ms();
        self.status = SessionStatus::Running;
        debug!("Session resumed at step {}", session.step_index);
    }

    /// Abandon the current step: move to the next one and keep running, or
    /// complete the session when this was the last step. Works from any
    /// status while a session exists.
    pub fn stop(&mut self, recipe: &Recipe) -> Transition {
        if self.active.is_none() {
            return Transition::Ignored;
        }
        let now = self.clock.now_ms();
        let transition = self.advance(recipe, now);
        debug!("Session stop -> {:?}", transition);
        transition
    }

    /// Reconcile wall-clock time into the counters and auto-advance when
    /// the current step's duration is used up. At most one step moves per
    /// call; overshoot counts toward the total but not toward the new step.
    pub fn tick(&mut self, recipe: &Recipe) -> Transition {
        if self.status != SessionStatus::Running {
            return Transition::Ignored;
        }
        let now = self.clock.now_ms();
        let Some(session) = self.active.as_mut() else {
            return Transition::Ignored;
        };
        if now - session.started_at_ms <= 0 {
            return Transition::Ignored;
        }
        session.accrue(now);

        let Some(step) = recipe.step(session.step_index) else {
            return Transition::Accrued;
        };
        if session.elapsed_ms_in_step < step.duration_ms() {
            trace!(
                "tick: step {} at {}ms/{}ms",
                session.step_index,
                session.elapsed_ms_in_step,
                step.duration_ms()
            );
            return Transition::Accrued;
        }

        let transition = self.advance(recipe, now);
        debug!("Step time elapsed -> {:?}", transition);
        transition
    }

    /// Drop the session entirely.
    pub fn reset(&mut self) {
        if let Some(old) = self.active.take() {
            debug!("Session for '{}' reset", old.recipe_id);
        }
        self.status = SessionStatus::Idle;
    }

    fn advance(&mut self, recipe: &Recipe, now: i64) -> Transition {
        let Some(session) = self.active.as_mut() else {
            return Transition::Ignored;
        };
        if recipe.is_last_step(session.step_index) {
            self.status = SessionStatus::Completed;
            Transition::Completed
        } else {
            session.enter_next_step(now);
            self.status = SessionStatus::Running;
            Transition::Advanced {
                step_index: session.step_index,
            }
        }
    }
}
