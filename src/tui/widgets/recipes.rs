// src/tui/widgets/recipes.rs — Recipe list with filter bar.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::recipes::query::RecipeQuery;
use crate::recipes::{Difficulty, Recipe};
use crate::tui::theme::Theme;
use crate::util::fit_width;

pub fn render_filters(f: &mut Frame, area: Rect, query: &RecipeQuery, shown: usize, total: usize) {
    let mut spans = vec![Span::styled(" Difficulty: ", Theme::text_dim())];
    for (i, d) in Difficulty::ALL.iter().enumerate() {
        let active = query.difficulties.contains(d);
        spans.push(Span::styled(
            format!("[{}] {} ", i + 1, d.label()),
            Theme::chip(active),
        ));
    }
    spans.push(Span::styled("  Sort: ", Theme::text_dim()));
    spans.push(Span::styled(query.sort.label(), Theme::highlight()));

    let p = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Span::styled(
                format!(" Stovetop  {}/{} recipes ", shown, total),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    f.render_widget(p, area);
}

pub fn render_table(f: &mut Frame, area: Rect, items: &[Recipe], state: &mut TableState) {
    let block = Block::default()
        .title(" Recipes ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    if items.is_empty() {
        let p = Paragraph::new(Line::from(Span::styled(
            "  No recipes match. Add one with `stovetop add <file>`.",
            Theme::text_dim(),
        )))
        .block(block);
        f.render_widget(p, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from(" ").style(Theme::table_header()),
        Cell::from("Title").style(Theme::table_header()),
        Cell::from("Cuisine").style(Theme::table_header()),
        Cell::from("Level").style(Theme::table_header()),
        Cell::from("Time").style(Theme::table_header()),
        Cell::from("Ingr").style(Theme::table_header()),
        Cell::from("Score").style(Theme::table_header()),
    ]);

    let rows: Vec<Row> = items
        .iter()
        .map(|r| {
            let star = if r.favorite { "\u{2605}" } else { " " };
            Row::new(vec![
                Cell::from(star).style(Theme::highlight()),
                Cell::from(fit_width(&r.title, 40).into_owned()).style(Theme::text()),
                Cell::from(r.cuisine.clone().unwrap_or_else(|| "-".into()))
                    .style(Theme::text_dim()),
                Cell::from(r.difficulty.label()).style(Theme::difficulty(r.difficulty)),
                Cell::from(format!("{} min", r.total_time_minutes)).style(Theme::text()),
                Cell::from(r.total_ingredients.to_string()).style(Theme::text_dim()),
                Cell::from(r.complexity_score.to_string()).style(Theme::text_dim()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Theme::table_selected())
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, state);
}
