// src/cooking/shared.rs — Thread-safe engine handle with change notification
//
// One mutex covers each whole operation, so a tick can never interleave
// with a pause/resume/stop. After each operation the new snapshot is
// published on a watch channel while the lock is still held, which keeps
// observer order identical to operation order.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;

use super::engine::{SessionEngine, Transition};
use super::session::{SessionSnapshot, SessionStatus};
use crate::infra::clock::Clock;
use crate::recipes::Recipe;

struct Inner {
    engine: Mutex<SessionEngine>,
    changes: watch::Sender<SessionSnapshot>,
}

#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Inner>,
}

impl SharedEngine {
    pub fn new(engine: SessionEngine) -> Self {
        let (changes, _) = watch::channel(engine.snapshot());
        Self {
            inner: Arc::new(Inner {
                engine: Mutex::new(engine),
                changes,
            }),
        }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::new(SessionEngine::new(clock))
    }

    /// Observe every state change. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.changes.subscribe()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    pub fn status(&self) -> SessionStatus {
        self.lock().status()
    }

    pub fn start(&self, recipe_id: &str) {
        self.apply(|e| e.start(recipe_id))
    }

    pub fn pause(&self) {
        self.apply(SessionEngine::pause)
    }

    pub fn resume(&self) {
        self.apply(SessionEngine::resume)
    }

    pub fn stop(&self, recipe: &Recipe) -> Transition {
        self.apply(|e| e.stop(recipe))
    }

    /// Ticks only when `recipe` is the one being cooked, so a stale timer
    /// can't push another recipe's session along.
    pub fn tick(&self, recipe: &Recipe) -> Transition {
        self.apply(|e| {
            if e.active().map(|a| a.recipe_id.as_str()) != Some(recipe.id.as_str()) {
                return Transition::Ignored;
            }
            e.tick(recipe)
        })
    }

    pub fn reset(&self) {
        self.apply(SessionEngine::reset)
    }

    fn apply<R>(&self, op: impl FnOnce(&mut SessionEngine) -> R) -> R {
        let mut engine = self.lock();
        let result = op(&mut engine);
        let snapshot = engine.snapshot();
        self.inner.changes.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
        result
    }

    fn lock(&self) -> MutexGuard<'_, SessionEngine> {
        // Operations never panic mid-update, so a poisoned state is still whole.
        self.inner
            .engine
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::clock::ManualClock;

    #[test]
    fn test_observers_see_each_change() {
        let clock = Arc::new(ManualClock::new(0));
        let shared = SharedEngine::with_clock(clock.clone());
        let mut rx = shared.subscribe();
        let mut other = shared.subscribe();

        assert_eq!(rx.borrow_and_update().status, SessionStatus::Idle);

        shared.start("r");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().status, SessionStatus::Running);
        assert_eq!(other.borrow_and_update().recipe_id(), Some("r"));

        clock.advance(10);
        shared.pause();
        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.status, SessionStatus::Paused);
        assert_eq!(snap.active.unwrap().total_elapsed_ms, 10);
    }

    #[test]
    fn test_noop_does_not_notify() {
        let shared = SharedEngine::with_clock(Arc::new(ManualClock::new(0)));
        let mut rx = shared.subscribe();
        rx.borrow_and_update();
        shared.pause();
        shared.resume();
        assert!(!rx.has_changed().unwrap());
    }
}
