// src/tui/widgets/cook.rs — Full cook view: gauges, countdown, step list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::cooking::{format_remaining, SessionProgress, SessionSnapshot, SessionStatus};
use crate::recipes::{Recipe, StepKind};
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, recipe: &Recipe, snapshot: &SessionSnapshot) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", recipe.title), Theme::header()))
        .borders(Borders::ALL)
        .border_style(Theme::border_focus());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let active = snapshot
        .active
        .as_ref()
        .filter(|a| a.recipe_id == recipe.id);
    let Some(active) = active else {
        let p = Paragraph::new(Line::from(Span::styled(
            "  No session for this recipe. Press Esc to go back.",
            Theme::text_dim(),
        )));
        f.render_widget(p, inner);
        return;
    };
    let progress = SessionProgress::compute(active, recipe);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status
            Constraint::Length(3), // overall gauge
            Constraint::Length(3), // step gauge
            Constraint::Length(3), // current step detail
            Constraint::Min(3),    // step list
        ])
        .split(inner);

    let status = Line::from(vec![
        Span::styled(format!(" {} ", snapshot.status.label().to_uppercase()), Theme::status(snapshot.status)),
        Span::styled(
            format!(" Step {}/{}", progress.step_number, progress.step_count),
            Theme::text(),
        ),
        Span::styled(
            format!("   {} left", format_remaining(progress.step_remaining_ms)),
            Theme::highlight(),
        ),
    ]);
    f.render_widget(Paragraph::new(status), chunks[0]);

    f.render_widget(
        gauge(" Overall ", progress.overall_percent),
        chunks[1],
    );
    f.render_widget(
        gauge(" This step ", progress.step_percent),
        chunks[2],
    );

    render_current_step(f, chunks[3], recipe, &progress, snapshot.status);
    render_step_list(f, chunks[4], recipe, active.step_index);
}

fn gauge(title: &str, percent: f64) -> Gauge<'_> {
    Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .gauge_style(Theme::gauge())
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", percent))
}

fn render_current_step(
    f: &mut Frame,
    area: Rect,
    recipe: &Recipe,
    progress: &SessionProgress,
    status: SessionStatus,
) {
    let lines = if status == SessionStatus::Completed {
        vec![Line::from(Span::styled(
            "  All steps done. Press x to finish.",
            Theme::success(),
        ))]
    } else {
        match progress.current_step(recipe) {
            Some(step) => {
                let detail = match &step.kind {
                    StepKind::Cooking { settings } => format!(
                        "{}\u{00b0}C \u{00b7} speed {}",
                        settings.temperature_c, settings.speed
                    ),
                    StepKind::Instruction { ingredient_ids } => ingredient_ids
                        .iter()
                        .filter_map(|id| recipe.ingredient(id))
                        .map(|i| format!("{} {} {}", i.quantity, i.unit, i.name))
                        .collect::<Vec<_>>()
                        .join(", "),
                };
                vec![
                    Line::from(Span::styled(
                        format!("  {}", step.description),
                        Theme::text().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(format!("  {}", detail), Theme::text_dim())),
                ]
            }
            None => vec![Line::from(Span::styled(
                "  This step no longer exists in the recipe.",
                Theme::warning(),
            ))],
        }
    };
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_step_list(f: &mut Frame, area: Rect, recipe: &Recipe, current: usize) {
    let lines: Vec<Line> = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let (marker, style) = if i == current {
                ("\u{25b6}", Theme::highlight())
            } else if i < current {
                ("\u{2713}", Theme::text_dim())
            } else {
                (" ", Theme::text())
            };
            Line::from(Span::styled(
                format!(
                    " {} {:>2}. {} ({})",
                    marker,
                    i + 1,
                    step.description,
                    format_remaining(step.duration_ms())
                ),
                style,
            ))
        })
        .collect();

    let p = Paragraph::new(lines).block(
        Block::default()
            .title(" Steps ")
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    f.render_widget(p, area);
}
