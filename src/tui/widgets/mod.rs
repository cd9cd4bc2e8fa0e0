// src/tui/widgets/mod.rs — Panels drawn by the browser views.

pub mod cook;
pub mod mini_player;
pub mod recipes;
