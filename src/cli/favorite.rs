// src/cli/favorite.rs — `stovetop favorite <id>`

use crate::infra::config::Config;
use crate::infra::errors::StovetopError;
use crate::store::open_recipe_store;

pub async fn run_favorite(config: &Config, id: &str) -> anyhow::Result<()> {
    let mut store = open_recipe_store(config)?;
    let favorite = store
        .toggle_favorite(id)?
        .ok_or_else(|| StovetopError::RecipeNotFound { id: id.to_string() })?;

    let title = store.find_by_id(id).map(|r| r.title.as_str()).unwrap_or(id);
    if favorite {
        println!("Marked '{}' as favorite", title);
    } else {
        println!("Removed '{}' from favorites", title);
    }
    Ok(())
}
