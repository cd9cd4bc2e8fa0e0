// src/cooking/mod.rs — Cooking session engine, progress and timer

pub mod engine;
pub mod progress;
pub mod session;
pub mod shared;
pub mod ticker;

pub use engine::{SessionEngine, Transition};
pub use progress::{format_remaining, SessionProgress};
pub use session::{ActiveSession, SessionSnapshot, SessionStatus};
pub use shared::SharedEngine;
pub use ticker::SessionTicker;
