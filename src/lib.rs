// src/lib.rs — Library root for Stovetop

pub mod cli;
pub mod cooking;
pub mod infra;
pub mod recipes;
pub mod store;
pub mod tui;
pub mod util;
