// src/tui/theme.rs — Color scheme and style definitions for the TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::cooking::SessionStatus;
use crate::recipes::Difficulty;

/// Warm kitchen palette.
pub struct Theme;

impl Theme {
    // ── Palette ──────────────────────────────────────────────────
    pub const EMBER: Color = Color::Rgb(235, 110, 60);
    pub const CREAM: Color = Color::Rgb(245, 238, 225);
    pub const HERB: Color = Color::Rgb(110, 190, 100);
    pub const SAFFRON: Color = Color::Rgb(240, 190, 60);
    pub const CHILI: Color = Color::Rgb(220, 70, 60);
    pub const STEEL: Color = Color::Rgb(125, 125, 135);
    pub const SMOKE: Color = Color::Rgb(80, 80, 90);
    pub const SELECTED_BG: Color = Color::Rgb(50, 40, 35);

    // ── Semantic styles ──────────────────────────────────────────

    pub fn header() -> Style {
        Style::default()
            .fg(Theme::EMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Theme::SMOKE)
    }

    pub fn border_focus() -> Style {
        Style::default().fg(Theme::EMBER)
    }

    pub fn text() -> Style {
        Style::default().fg(Theme::CREAM)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Theme::STEEL)
    }

    pub fn success() -> Style {
        Style::default().fg(Theme::HERB)
    }

    pub fn warning() -> Style {
        Style::default().fg(Theme::SAFFRON)
    }

    pub fn error() -> Style {
        Style::default().fg(Theme::CHILI)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Theme::SAFFRON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::EMBER)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn table_selected() -> Style {
        Style::default().bg(Theme::SELECTED_BG).fg(Theme::CREAM)
    }

    /// Key hint in the footer.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::EMBER)
    }

    /// Description next to key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::STEEL)
    }

    /// Filter chip: lit when the filter is active.
    pub fn chip(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Theme::EMBER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::SMOKE)
        }
    }

    pub fn gauge() -> Style {
        Style::default().fg(Theme::EMBER).bg(Theme::SMOKE)
    }

    pub fn difficulty(d: Difficulty) -> Style {
        match d {
            Difficulty::Easy => Theme::success(),
            Difficulty::Medium => Theme::warning(),
            Difficulty::Hard => Theme::error(),
        }
    }

    pub fn status(s: SessionStatus) -> Style {
        match s {
            SessionStatus::Running => Theme::success().add_modifier(Modifier::BOLD),
            SessionStatus::Paused => Theme::warning().add_modifier(Modifier::BOLD),
            SessionStatus::Completed => Theme::highlight(),
            SessionStatus::Idle => Theme::text_dim(),
        }
    }
}
