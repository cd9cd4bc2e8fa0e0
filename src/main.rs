// src/main.rs — Stovetop entry point

use std::path::{Path, PathBuf};

use clap::Parser;

use stovetop::cli::{Cli, Commands};
use stovetop::infra::config::Config;
use stovetop::infra::logger;
use stovetop::store::open_recipe_store;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Falls back to defaults if no config.toml
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    let log_file = config.logging.file.as_ref().map(PathBuf::from);
    logger::init_logging(&config.logging.level, log_file.as_deref())?;
    tracing::debug!("Database: {}", config.database_path().display());

    match cli.command {
        Some(Commands::List {
            difficulty,
            sort,
            json,
        }) => stovetop::cli::list::run_list(&config, &difficulty, sort, json).await,
        Some(Commands::Show { id }) => stovetop::cli::show::run_show(&config, &id).await,
        Some(Commands::Add { source }) => stovetop::cli::add::run_add(&config, &source).await,
        Some(Commands::Favorite { id }) => {
            stovetop::cli::favorite::run_favorite(&config, &id).await
        }
        Some(Commands::Export { format, output }) => {
            stovetop::cli::export::run_export(&config, &format, output.as_deref()).await
        }
        Some(Commands::Cook { id, plain }) => {
            stovetop::cli::cook::run_cook(&config, &id, plain).await
        }
        Some(Commands::Migrate { status, rollback }) => {
            stovetop::cli::migrate::run_migrate(&config, status, rollback).await
        }
        Some(Commands::Browse) | None => {
            let store = open_recipe_store(&config)?;
            stovetop::tui::run_browser(&config, store, None).await
        }
    }
}
