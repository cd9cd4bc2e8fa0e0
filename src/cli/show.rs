// src/cli/show.rs — `stovetop show <id>`

use std::fmt::Write;

use crate::infra::config::Config;
use crate::infra::errors::StovetopError;
use crate::recipes::{Recipe, StepKind};
use crate::store::open_recipe_store;

pub async fn run_show(config: &Config, id: &str) -> anyhow::Result<()> {
    let store = open_recipe_store(config)?;
    let recipe = store
        .find_by_id(id)
        .ok_or_else(|| StovetopError::RecipeNotFound { id: id.to_string() })?;
    print!("{}", format_detail(recipe));
    Ok(())
}

pub fn format_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    let star = if recipe.favorite { " *" } else { "" };
    let _ = writeln!(out, "{}{}", recipe.title, star);
    let _ = writeln!(out, "  id:          {}", recipe.id);
    if let Some(cuisine) = &recipe.cuisine {
        let _ = writeln!(out, "  cuisine:     {}", cuisine);
    }
    let _ = writeln!(out, "  difficulty:  {}", recipe.difficulty);
    let _ = writeln!(out, "  total time:  {} min", recipe.total_time_minutes);
    let _ = writeln!(out, "  complexity:  {}", recipe.complexity_score);

    let _ = writeln!(out, "\nIngredients ({}):", recipe.total_ingredients);
    for ing in &recipe.ingredients {
        let _ = writeln!(out, "  - {} {} {}", ing.quantity, ing.unit, ing.name);
    }

    let _ = writeln!(out, "\nSteps:");
    for (i, step) in recipe.steps.iter().enumerate() {
        let detail = match &step.kind {
            StepKind::Cooking { settings } => {
                format!("{}°C, speed {}", settings.temperature_c, settings.speed)
            }
            StepKind::Instruction { ingredient_ids } => ingredient_ids
                .iter()
                .filter_map(|id| recipe.ingredient(id))
                .map(|ing| ing.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        };
        let _ = writeln!(
            out,
            "  {}. [{}] {} ({}s) {}",
            i + 1,
            step.kind.step_type(),
            step.description,
            step.duration_seconds,
            detail
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::{CookingSettings, Difficulty, Ingredient, Step};

    #[test]
    fn test_format_detail_lists_steps() {
        let recipe = Recipe {
            id: "r1".into(),
            title: "Risotto".into(),
            cuisine: Some("Italian".into()),
            difficulty: Difficulty::Hard,
            favorite: false,
            ingredients: vec![Ingredient {
                id: "rice".into(),
                name: "Arborio".into(),
                quantity: 300.0,
                unit: "g".into(),
            }],
            steps: vec![
                Step {
                    id: "s1".into(),
                    description: "Toast the rice".into(),
                    duration_seconds: 120,
                    kind: StepKind::Instruction {
                        ingredient_ids: vec!["rice".into(), "gone".into()],
                    },
                },
                Step {
                    id: "s2".into(),
                    description: "Simmer".into(),
                    duration_seconds: 900,
                    kind: StepKind::Cooking {
                        settings: CookingSettings {
                            temperature_c: 95,
                            speed: 1,
                        },
                    },
                },
            ],
            total_time_minutes: 17,
            total_ingredients: 1,
            complexity_score: 11,
        };
        let text = format_detail(&recipe);
        assert!(text.contains("cuisine:     Italian"));
        assert!(text.contains("1. [instruction] Toast the rice (120s) Arborio\n"));
        assert!(text.contains("2. [cooking] Simmer (900s) 95°C, speed 1"));
    }
}
