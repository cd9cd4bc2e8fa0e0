// src/recipes/metrics.rs — Derived recipe fields
//
// Computed once when a recipe is created and stored alongside it.

use super::types::{Difficulty, Ingredient, Recipe, RecipeDraft, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub total_time_minutes: u32,
    pub total_ingredients: u32,
    pub complexity_score: u32,
}

/// total time = round(seconds / 60)
/// complexity = round((step weight + ingredients / 2 + seconds / 180) * difficulty factor)
/// where cooking steps weigh 2 and instruction steps weigh 1.
pub fn derive_metrics(
    ingredients: &[Ingredient],
    steps: &[Step],
    difficulty: Difficulty,
) -> DerivedMetrics {
    let total_seconds: f64 = steps.iter().map(|s| f64::from(s.duration_seconds)).sum();
    let total_ingredients = ingredients.len() as u32;
    let step_complexity: f64 = steps
        .iter()
        .map(|s| if s.is_cooking() { 2.0 } else { 1.0 })
        .sum();

    let score = (step_complexity + f64::from(total_ingredients) / 2.0 + total_seconds / 180.0)
        * difficulty.factor();

    DerivedMetrics {
        total_time_minutes: (total_seconds / 60.0).round() as u32,
        total_ingredients,
        complexity_score: score.round() as u32,
    }
}

/// Give a draft its identity and derived fields.
pub fn compute_derived(id: String, draft: RecipeDraft) -> Recipe {
    let metrics = derive_metrics(&draft.ingredients, &draft.steps, draft.difficulty);
    Recipe {
        id,
        title: draft.title,
        cuisine: draft.cuisine,
        difficulty: draft.difficulty,
        favorite: draft.favorite,
        ingredients: draft.ingredients,
        steps: draft.steps,
        total_time_minutes: metrics.total_time_minutes,
        total_ingredients: metrics.total_ingredients,
        complexity_score: metrics.complexity_score,
    }
}
