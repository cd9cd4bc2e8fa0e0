// src/tui/app.rs — TUI application state, event loop, and rendering.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, TableState},
    Frame, Terminal,
};
use tracing::warn;

use crate::cooking::{SessionStatus, SessionTicker, SharedEngine};
use crate::infra::clock::SystemClock;
use crate::infra::config::Config;
use crate::recipes::query::RecipeQuery;
use crate::recipes::{Difficulty, Recipe};
use crate::store::{RecipeLookup, RecipeStore};

use super::theme::Theme;
use super::widgets;

// ── Views ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List,
    Cook { recipe_id: String },
}

// ── App state ────────────────────────────────────────────────────

pub struct App {
    store: Arc<Mutex<RecipeStore>>,
    engine: SharedEngine,
    ticker: SessionTicker,
    pub query: RecipeQuery,
    pub table_state: TableState,
    pub view: View,
    /// One-line message shown in the footer until the next key.
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        store: RecipeStore,
        engine: SharedEngine,
        query: RecipeQuery,
        tick_interval: Duration,
    ) -> Self {
        let mut ticker = SessionTicker::new(tick_interval);
        let store = Arc::new(Mutex::new(store));
        let lookup: Arc<dyn RecipeLookup> = store.clone();
        ticker.attach(&engine, lookup);
        let mut app = Self {
            store,
            engine,
            ticker,
            query,
            table_state: TableState::default(),
            view: View::List,
            notice: None,
            should_quit: false,
        };
        app.clamp_selection();
        app
    }

    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    fn lock_store(&self) -> MutexGuard<'_, RecipeStore> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn total_recipes(&self) -> usize {
        self.lock_store().len()
    }

    /// Recipes after the current filter and sort.
    pub fn visible_recipes(&self) -> Vec<Recipe> {
        let store = self.lock_store();
        self.query
            .apply(store.list_all())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn recipe(&self, id: &str) -> Option<Recipe> {
        self.lock_store().find_by_id(id).cloned()
    }

    pub fn selected_recipe(&self) -> Option<Recipe> {
        let i = self.table_state.selected()?;
        self.visible_recipes().into_iter().nth(i)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_recipes().len();
        if len == 0 {
            self.table_state.select(None);
        } else {
            let i = self.table_state.selected().unwrap_or(0).min(len - 1);
            self.table_state.select(Some(i));
        }
    }

    /// Show the cook view for `recipe_id`, starting a session unless one
    /// already exists for that recipe.
    pub fn open_cook_view(&mut self, recipe_id: &str) {
        if self.engine.snapshot().recipe_id() != Some(recipe_id) {
            self.engine.start(recipe_id);
        }
        self.view = View::Cook {
            recipe_id: recipe_id.to_string(),
        };
    }

    /// Jump to the cook view of whatever is cooking now.
    pub fn open_active_session(&mut self) {
        match self.engine.snapshot().recipe_id() {
            Some(id) => {
                self.view = View::Cook {
                    recipe_id: id.to_string(),
                }
            }
            None => self.notice = Some("Nothing is cooking".into()),
        }
    }

    /// True while the ticker is driving a session on its own.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        self.notice = None;

        match self.view.clone() {
            View::List => self.handle_list_key(key.code),
            View::Cook { recipe_id } => self.handle_cook_key(key.code, &recipe_id),
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.visible_recipes().len().saturating_sub(1);
                let i = self.table_state.selected().unwrap_or(0);
                self.table_state.select(Some((i + 1).min(max)));
                self.clamp_selection();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.table_state.selected().unwrap_or(0);
                self.table_state.select(Some(i.saturating_sub(1)));
                self.clamp_selection();
            }

            KeyCode::Char('1') => self.toggle_filter(Difficulty::Easy),
            KeyCode::Char('2') => self.toggle_filter(Difficulty::Medium),
            KeyCode::Char('3') => self.toggle_filter(Difficulty::Hard),
            KeyCode::Char('o') => {
                self.query.sort = self.query.sort.toggled();
            }

            KeyCode::Char('f') => {
                let Some(recipe) = self.selected_recipe() else {
                    return;
                };
                let result = self.lock_store().toggle_favorite(&recipe.id);
                if let Err(e) = result {
                    warn!("Could not save favorite for '{}': {}", recipe.id, e);
                    self.notice = Some(format!("Could not save: {}", e));
                }
            }

            KeyCode::Enter => {
                if let Some(recipe) = self.selected_recipe() {
                    self.engine.start(&recipe.id);
                    self.view = View::Cook {
                        recipe_id: recipe.id,
                    };
                }
            }
            KeyCode::Char('c') => self.open_active_session(),
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('s') => {
                if let Some(id) = self.engine.snapshot().recipe_id() {
                    self.stop_step(id);
                }
            }
            _ => {}
        }
    }

    fn handle_cook_key(&mut self, code: KeyCode, recipe_id: &str) {
        match code {
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('s') => self.stop_step(recipe_id),
            KeyCode::Char('x') => {
                self.engine.reset();
                self.view = View::List;
            }
            KeyCode::Esc => self.view = View::List,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn toggle_pause(&self) {
        match self.engine.status() {
            SessionStatus::Running => self.engine.pause(),
            SessionStatus::Paused => self.engine.resume(),
            _ => {}
        }
    }

    fn stop_step(&self, recipe_id: &str) {
        if let Some(recipe) = self.recipe(recipe_id) {
            self.engine.stop(&recipe);
        }
    }

    fn toggle_filter(&mut self, difficulty: Difficulty) {
        self.query.toggle_difficulty(difficulty);
        self.clamp_selection();
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the recipe browser, optionally straight into a recipe's cook
/// view. Blocks until the user quits (q / Ctrl-C).
pub async fn run_browser(
    config: &Config,
    store: RecipeStore,
    open: Option<String>,
) -> anyhow::Result<()> {
    let engine = SharedEngine::with_clock(Arc::new(SystemClock));
    let mut app = App::new(store, engine, config.initial_query(), config.tick_interval());
    if let Some(id) = open {
        app.open_cook_view(&id);
    }

    // The terminal loop blocks; keep it off the worker threads the ticker runs on.
    tokio::task::spawn_blocking(move || run_terminal(app)).await?
}

fn run_terminal(mut app: App) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // Short poll so countdowns repaint between keys
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    match app.view.clone() {
        View::List => render_list_view(f, size, app),
        View::Cook { recipe_id } => render_cook_view(f, size, app, &recipe_id),
    }
}

fn render_list_view(f: &mut Frame, area: Rect, app: &mut App) {
    let snapshot = app.engine.snapshot();
    let playing = snapshot
        .active
        .as_ref()
        .and_then(|a| app.recipe(&a.recipe_id).map(|r| (r, a.clone())));
    let player_height = if playing.is_some() {
        widgets::mini_player::HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title + filters
            Constraint::Min(5),                // Recipe table
            Constraint::Length(player_height), // Mini-player
            Constraint::Length(1),             // Footer / key hints
        ])
        .split(area);

    let items = app.visible_recipes();
    let total = app.total_recipes();
    widgets::recipes::render_filters(f, chunks[0], &app.query, items.len(), total);
    widgets::recipes::render_table(f, chunks[1], &items, &mut app.table_state);
    if let Some((recipe, active)) = playing {
        widgets::mini_player::render(f, chunks[2], &recipe, &active, snapshot.status);
    }

    let mut hints: Vec<(&str, &str)> = vec![
        ("q", "quit"),
        ("j/k", "move"),
        ("1-3", "difficulty"),
        ("o", "sort"),
        ("f", "favorite"),
        ("Enter", "cook"),
    ];
    if snapshot.active.is_some() {
        hints.extend([("space", "pause/resume"), ("s", "next step"), ("c", "open session")]);
    }
    render_footer(f, chunks[3], &hints, app.notice.as_deref());
}

fn render_cook_view(f: &mut Frame, area: Rect, app: &App, recipe_id: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    match app.recipe(recipe_id) {
        Some(recipe) => {
            widgets::cook::render(f, chunks[0], &recipe, &app.engine.snapshot());
        }
        None => {
            let p = Paragraph::new(Line::from(Span::styled(
                " Recipe not found. Press Esc to go back.",
                Theme::error(),
            )));
            f.render_widget(p, chunks[0]);
        }
    }

    let hints: &[(&str, &str)] = &[
        ("space", "pause/resume"),
        ("s", "next step"),
        ("x", "reset"),
        ("Esc", "back"),
        ("q", "quit"),
    ];
    render_footer(f, chunks[1], hints, app.notice.as_deref());
}

fn render_footer(f: &mut Frame, area: Rect, hints: &[(&str, &str)], notice: Option<&str>) {
    let line = match notice {
        Some(msg) => Line::from(Span::styled(format!(" {}", msg), Theme::error())),
        None => Line::from(
            hints
                .iter()
                .flat_map(|(key, desc)| {
                    [
                        Span::styled(format!(" {}", key), Theme::key_hint()),
                        Span::styled(format!(" {} ", desc), Theme::key_desc()),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
    };
    f.render_widget(Paragraph::new(line), area);
}
