// src/tui/widgets/mini_player.rs — Compact session bar under the recipe list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::cooking::{format_remaining, ActiveSession, SessionProgress, SessionStatus};
use crate::recipes::Recipe;
use crate::tui::theme::Theme;
use crate::util::fit_width;

/// Rows the mini-player needs, borders included.
pub const HEIGHT: u16 = 4;

pub fn render(
    f: &mut Frame,
    area: Rect,
    recipe: &Recipe,
    active: &ActiveSession,
    status: SessionStatus,
) {
    let progress = SessionProgress::compute(active, recipe);
    let block = Block::default()
        .title(Span::styled(
            format!(" Now cooking: {} ", fit_width(&recipe.title, 40)),
            Theme::header(),
        ))
        .borders(Borders::ALL)
        .border_style(Theme::border_focus());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let description = progress
        .current_step(recipe)
        .map(|s| s.description.as_str())
        .unwrap_or("");
    let line = Line::from(vec![
        Span::styled(format!(" {} ", status.label()), Theme::status(status)),
        Span::styled(
            format!(" Step {}/{} ", progress.step_number, progress.step_count),
            Theme::text(),
        ),
        Span::styled(fit_width(description, 48).into_owned(), Theme::text_dim()),
        Span::styled(
            format!("  {} left", format_remaining(progress.step_remaining_ms)),
            Theme::highlight(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Theme::gauge())
        .ratio((progress.overall_percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}% overall", progress.overall_percent));
    f.render_widget(gauge, chunks[1]);
}
