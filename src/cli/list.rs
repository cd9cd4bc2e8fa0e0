// src/cli/list.rs — `stovetop list`

use crate::infra::config::Config;
use crate::recipes::query::SortOrder;
use crate::recipes::{Difficulty, Recipe};
use crate::store::open_recipe_store;
use crate::util::{pad_width, short_id};

/// Print recipes matching the filters. Flags override `[browse]` defaults.
pub async fn run_list(
    config: &Config,
    difficulties: &[Difficulty],
    sort: Option<SortOrder>,
    json: bool,
) -> anyhow::Result<()> {
    let store = open_recipe_store(config)?;

    let mut query = config.initial_query();
    if !difficulties.is_empty() {
        query.difficulties = difficulties.to_vec();
    }
    if let Some(sort) = sort {
        query.sort = sort;
    }

    let items = query.apply(store.list_all());

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        if store.is_empty() {
            println!("No recipes yet. Add one with `stovetop add <file>`.");
        } else {
            println!("No recipes match the current filters.");
        }
        return Ok(());
    }

    println!("{} ({} of {})", query.sort.label(), items.len(), store.len());
    for recipe in items {
        println!("{}", format_row(recipe));
    }
    Ok(())
}

/// One summary line per recipe.
pub fn format_row(recipe: &Recipe) -> String {
    let star = if recipe.favorite { "*" } else { " " };
    format!(
        "{} {:<8}  {}  {:<6}  {:>4} min  {:>2} ingr  score {}",
        star,
        short_id(&recipe.id, 8),
        pad_width(&recipe.title, 32),
        recipe.difficulty.label(),
        recipe.total_time_minutes,
        recipe.total_ingredients,
        recipe.complexity_score,
    )
}
