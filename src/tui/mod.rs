// src/tui/mod.rs — Terminal recipe browser and cook view.
//
// Built with ratatui. Launch via `stovetop` / `stovetop browse`, or
// `stovetop cook <id>` to open straight into a session.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{run_browser, App, View};
