// src/cli/cook.rs — `stovetop cook <id> [--plain]`
//
// Without --plain this opens the terminal UI straight into the cook view.
// The plain runner reads one-letter commands from stdin and prints a
// progress line whenever the session changes.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cooking::{
    format_remaining, SessionProgress, SessionSnapshot, SessionStatus, SessionTicker,
    SharedEngine,
};
use crate::infra::clock::SystemClock;
use crate::infra::config::Config;
use crate::infra::errors::StovetopError;
use crate::recipes::Recipe;
use crate::store::{open_recipe_store, RecipeLookup};

pub async fn run_cook(config: &Config, id: &str, plain: bool) -> anyhow::Result<()> {
    let store = open_recipe_store(config)?;
    let recipe = store
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| StovetopError::RecipeNotFound { id: id.to_string() })?;

    if !plain {
        return crate::tui::run_browser(config, store, Some(recipe.id)).await;
    }
    run_plain(config, recipe).await
}

/// What a stdin line asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainCommand {
    Pause,
    Resume,
    Stop,
    Quit,
}

impl PlainCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "p" | "pause" => Some(PlainCommand::Pause),
            "r" | "resume" => Some(PlainCommand::Resume),
            "s" | "stop" | "next" => Some(PlainCommand::Stop),
            "q" | "quit" => Some(PlainCommand::Quit),
            _ => None,
        }
    }
}

async fn run_plain(config: &Config, recipe: Recipe) -> anyhow::Result<()> {
    let engine = SharedEngine::with_clock(Arc::new(SystemClock));
    let lookup: Arc<dyn RecipeLookup> = Arc::new(vec![recipe.clone()]);
    let mut ticker = SessionTicker::new(config.tick_interval());
    ticker.attach(&engine, lookup);

    println!("Cooking '{}' ({} steps)", recipe.title, recipe.steps.len());
    println!("Commands: p pause, r resume, s next step, q quit");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    drive_plain(&engine, &recipe, stdin, tokio::signal::ctrl_c(), &mut stdout).await?;

    ticker.detach();
    Ok(())
}

/// How a plain cooking run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainOutcome {
    Completed,
    Quit,
    Interrupted,
}

/// Start `recipe` and run it until it completes, the user quits, or
/// `interrupt` resolves. Stdin commands steer the session; every change is
/// written to `out` as one progress line. Quit and interrupt both reset.
pub async fn drive_plain<R, I, W>(
    engine: &SharedEngine,
    recipe: &Recipe,
    input: R,
    interrupt: I,
    out: &mut W,
) -> anyhow::Result<PlainOutcome>
where
    R: AsyncBufRead + Unpin,
    I: Future<Output = std::io::Result<()>>,
    W: Write,
{
    let mut changes = engine.subscribe();
    engine.start(&recipe.id);

    let mut lines = input.lines();
    let mut input_open = true;
    let mut last_line = String::new();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    return Ok(PlainOutcome::Quit);
                }
                let snapshot = changes.borrow_and_update().clone();
                let line = format_progress_line(recipe, &snapshot);
                if line != last_line {
                    writeln!(out, "{}", line)?;
                    last_line = line;
                }
                if snapshot.status == SessionStatus::Completed {
                    writeln!(out, "Done. Enjoy your {}!", recipe.title)?;
                    return Ok(PlainOutcome::Completed);
                }
            }
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(text) => match PlainCommand::parse(&text) {
                        Some(PlainCommand::Pause) => engine.pause(),
                        Some(PlainCommand::Resume) => engine.resume(),
                        Some(PlainCommand::Stop) => {
                            engine.stop(recipe);
                        }
                        Some(PlainCommand::Quit) => {
                            engine.reset();
                            return Ok(PlainOutcome::Quit);
                        }
                        None if text.trim().is_empty() => {}
                        None => writeln!(out, "Unknown command '{}'", text.trim())?,
                    },
                    None => input_open = false,
                }
            }
            signal = &mut interrupt => {
                signal?;
                engine.reset();
                writeln!(out, "Session reset.")?;
                return Ok(PlainOutcome::Interrupted);
            }
        }
    }
}

/// One status line: state, step position, time left, overall percent.
pub fn format_progress_line(recipe: &Recipe, snapshot: &SessionSnapshot) -> String {
    let Some(active) = &snapshot.active else {
        return format!("[{}]", snapshot.status);
    };
    let progress = SessionProgress::compute(active, recipe);
    let description = progress
        .current_step(recipe)
        .map(|s| s.description.as_str())
        .unwrap_or("");
    format!(
        "[{}] Step {}/{}  {}  {} left  ({:.0}%)",
        snapshot.status,
        progress.step_number,
        progress.step_count,
        description,
        format_remaining(progress.step_remaining_ms),
        progress.overall_percent,
    )
}
