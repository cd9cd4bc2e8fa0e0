// src/cooking/ticker.rs — Periodic tick driver for a running session
//
// One supervisor task per ticker follows the engine's change channel. While
// the session is running it ticks the active recipe on a fixed period; any
// change of status or recipe restarts or drops that schedule, so callers
// never have to nudge it after pause/resume/start/stop.

use std::future::pending;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, warn};

use super::engine::Transition;
use super::session::SessionSnapshot;
use super::shared::SharedEngine;
use crate::store::RecipeLookup;

pub struct SessionTicker {
    period: Duration,
    supervisor: Option<JoinHandle<()>>,
    /// Recipe currently being ticked, as reported by the supervisor.
    ticking: watch::Receiver<Option<String>>,
}

impl SessionTicker {
    pub fn new(period: Duration) -> Self {
        let (_, ticking) = watch::channel(None);
        Self {
            period: period.max(Duration::from_millis(1)),
            supervisor: None,
            ticking,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// True while a recipe is being ticked.
    pub fn is_active(&self) -> bool {
        self.is_attached() && self.ticking.borrow().is_some()
    }

    /// True while the supervisor follows an engine.
    pub fn is_attached(&self) -> bool {
        self.supervisor.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Follow `engine` from now on, replacing any engine followed before.
    /// Without an async runtime this only logs; the session then advances
    /// on explicit ticks alone.
    pub fn attach(&mut self, engine: &SharedEngine, recipes: Arc<dyn RecipeLookup>) {
        self.detach();
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime available; session will not advance on its own");
            return;
        };
        let (report, ticking) = watch::channel(None);
        let changes = engine.subscribe();
        debug!("Ticker attached, period {:?}", self.period);
        self.supervisor = Some(runtime.spawn(supervise(
            engine.clone(),
            recipes,
            changes,
            report,
            self.period,
        )));
        self.ticking = ticking;
    }

    pub fn detach(&mut self) {
        if let Some(handle) = self.supervisor.take() {
            handle.abort();
            debug!("Ticker detached");
        }
        let (_, ticking) = watch::channel(None);
        self.ticking = ticking;
    }
}

impl Drop for SessionTicker {
    fn drop(&mut self) {
        self.detach();
    }
}

struct Schedule {
    recipe_id: String,
    interval: Interval,
}

async fn supervise(
    engine: SharedEngine,
    recipes: Arc<dyn RecipeLookup>,
    mut changes: watch::Receiver<SessionSnapshot>,
    report: watch::Sender<Option<String>>,
    period: Duration,
) {
    let mut schedule: Option<Schedule> = None;
    let initial = changes.borrow_and_update().clone();
    follow(&initial, &mut schedule, &report, period);

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = changes.borrow_and_update().clone();
                follow(&snapshot, &mut schedule, &report, period);
            }
            recipe_id = next_tick(&mut schedule) => {
                if !tick_once(&engine, recipes.as_ref(), &recipe_id) {
                    schedule = None;
                    report.send_replace(None);
                }
            }
        }
    }
    debug!("Ticker supervisor finished");
}

/// Start, keep, or drop the schedule so it matches `snapshot`. A schedule
/// that is already ticking the running recipe keeps its phase.
fn follow(
    snapshot: &SessionSnapshot,
    schedule: &mut Option<Schedule>,
    report: &watch::Sender<Option<String>>,
    period: Duration,
) {
    let wanted = snapshot.is_running().then(|| snapshot.recipe_id()).flatten();
    let current = schedule.as_ref().map(|s| s.recipe_id.as_str());
    if current == wanted {
        return;
    }

    *schedule = wanted.map(|id| {
        debug!("Ticking '{}' every {:?}", id, period);
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Schedule {
            recipe_id: id.to_string(),
            interval,
        }
    });
    if schedule.is_none() {
        debug!("Ticking stopped");
    }
    report.send_replace(wanted.map(str::to_string));
}

async fn next_tick(schedule: &mut Option<Schedule>) -> String {
    match schedule {
        Some(s) => {
            s.interval.tick().await;
            s.recipe_id.clone()
        }
        None => pending().await,
    }
}

/// One scheduled tick. Returns false when the schedule should end.
fn tick_once(engine: &SharedEngine, recipes: &dyn RecipeLookup, recipe_id: &str) -> bool {
    let Some(recipe) = recipes.find_recipe(recipe_id) else {
        warn!("Recipe '{}' disappeared while cooking", recipe_id);
        return false;
    };
    engine.tick(&recipe) != Transition::Completed
}
