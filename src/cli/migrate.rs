// src/cli/migrate.rs — Database migration command
//
// Migrations run automatically whenever the store is opened; this command
// shows what is applied and can undo the latest one.

use std::path::Path;

use rusqlite::Connection;

use crate::infra::config::Config;
use crate::store::schema;

pub async fn run_migrate(config: &Config, status_only: bool, rollback: bool) -> anyhow::Result<()> {
    let db_path = config.database_path();

    if !db_path.exists() && (status_only || rollback) {
        println!("No database found at: {}", db_path.display());
        return Ok(());
    }

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(&db_path)?;

    if status_only {
        return show_migration_status(&conn, &db_path);
    }

    if rollback {
        match schema::rollback_last(&conn)? {
            Some(version) => println!("Rolled back migration v{}.", version),
            None => println!("No migrations to roll back."),
        }
        return Ok(());
    }

    println!("Running database migrations...");
    schema::run_migrations(&conn)?;
    println!("Migrations complete.");
    show_migration_status(&conn, &db_path)
}

fn show_migration_status(conn: &Connection, db_path: &Path) -> anyhow::Result<()> {
    let table_exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='_migrations'",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        println!("No migrations have been run yet.");
        return Ok(());
    }

    println!("Database: {}", db_path.display());
    println!("Current schema version: {}", schema::current_version(conn)?);
    println!();

    let mut stmt =
        conn.prepare("SELECT version, name, applied_at FROM _migrations ORDER BY version")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, u32>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    println!("Applied migrations:");
    for row in rows {
        let (version, name, applied_at) = row?;
        println!("  v{}: {} (applied {})", version, name, applied_at);
    }
    Ok(())
}
