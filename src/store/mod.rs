// src/store/mod.rs — Local persistence

pub mod kv;
pub mod recipes;
pub mod schema;

use crate::infra::config::Config;
use crate::infra::errors::StovetopError;

pub use kv::{KeyValueStore, MemoryKv, SqliteKv};
pub use recipes::{RecipeLookup, RecipeStore};

/// Open the configured SQLite database and load the recipe collection.
pub fn open_recipe_store(config: &Config) -> Result<RecipeStore, StovetopError> {
    let kv = SqliteKv::open(&config.database_path())?;
    Ok(RecipeStore::load(
        Box::new(kv),
        config.storage.recipes_key.clone(),
    ))
}
