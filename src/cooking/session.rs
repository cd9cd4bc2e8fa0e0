// src/cooking/session.rs — Cooking session record

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// No session exists.
    #[default]
    Idle,
    Running,
    Paused,
    /// Last step finished; the session is kept, frozen, until reset.
    Completed,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Running => "running",
            SessionStatus::Paused => "paused",
            SessionStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An in-progress walk through one recipe. Holds only the recipe's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub recipe_id: String,
    pub step_index: usize,
    /// Start of the current running interval. Meaningless while paused.
    pub started_at_ms: i64,
    pub elapsed_ms_in_step: i64,
    pub total_elapsed_ms: i64,
}

impl ActiveSession {
    pub fn new(recipe_id: &str, now_ms: i64) -> Self {
        Self {
            recipe_id: recipe_id.to_string(),
            step_index: 0,
            started_at_ms: now_ms,
            elapsed_ms_in_step: 0,
            total_elapsed_ms: 0,
        }
    }

    /// Fold time since `started_at_ms` into both counters.
    pub(crate) fn accrue(&mut self, now_ms: i64) -> i64 {
        let delta = (now_ms - self.started_at_ms).max(0);
        self.elapsed_ms_in_step += delta;
        self.total_elapsed_ms += delta;
        self.started_at_ms = now_ms;
        delta
    }

    pub(crate) fn enter_next_step(&mut self, now_ms: i64) {
        self.step_index += 1;
        self.elapsed_ms_in_step = 0;
        self.started_at_ms = now_ms;
    }
}

/// What observers see after every engine operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub active: Option<ActiveSession>,
}

impl SessionSnapshot {
    pub fn recipe_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.recipe_id.as_str())
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running && self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accrue_moves_start_and_counters() {
        let mut s = ActiveSession::new("r", 1_000);
        assert_eq!(s.accrue(1_400), 400);
        assert_eq!(s.started_at_ms, 1_400);
        assert_eq!(s.elapsed_ms_in_step, 400);
        assert_eq!(s.total_elapsed_ms, 400);
    }

    #[test]
    fn test_accrue_never_goes_backwards() {
        let mut s = ActiveSession::new("r", 1_000);
        assert_eq!(s.accrue(900), 0);
        assert_eq!(s.total_elapsed_ms, 0);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snap = SessionSnapshot {
            status: SessionStatus::Paused,
            active: Some(ActiveSession::new("r1", 5)),
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["status"], "paused");
        assert_eq!(json["active"]["recipeId"], "r1");
        assert_eq!(json["active"]["elapsedMsInStep"], 0);
    }
}
