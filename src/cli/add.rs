// src/cli/add.rs — `stovetop add <file|->`
//
// Reads a recipe form as JSON, validates it, and stores the result.

use std::io::Read;

use anyhow::Context;

use crate::infra::config::Config;
use crate::recipes::form::RecipeForm;
use crate::store::open_recipe_store;

pub async fn run_add(config: &Config, source: &str) -> anyhow::Result<()> {
    let raw = read_source(source)?;
    let form = parse_form(&raw)?;

    let mut store = open_recipe_store(config)?;
    let recipe = store.add_form(form)?;

    println!("Added '{}' ({})", recipe.title, recipe.id);
    println!(
        "  {} min, {} ingredient(s), complexity {}",
        recipe.total_time_minutes, recipe.total_ingredients, recipe.complexity_score
    );
    Ok(())
}

fn read_source(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).with_context(|| format!("Could not read '{}'", source))
}

pub fn parse_form(raw: &str) -> anyhow::Result<RecipeForm> {
    if raw.trim().is_empty() {
        anyhow::bail!("No recipe form received");
    }
    serde_json::from_str(raw).context("Recipe form is not valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_defaults_missing_fields() {
        let form = parse_form(r#"{"title": "Toast"}"#).unwrap();
        assert_eq!(form.title, "Toast");
        assert!(form.steps.is_empty());
    }

    #[test]
    fn test_parse_form_rejects_blank_and_garbage() {
        assert!(parse_form("  ").is_err());
        assert!(parse_form("[1, 2").is_err());
    }
}
