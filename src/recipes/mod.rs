// src/recipes/mod.rs — Recipe model, derived metrics, authoring, querying

pub mod form;
pub mod metrics;
pub mod query;
pub mod types;

pub use types::{
    CookingSettings, Difficulty, Ingredient, Recipe, RecipeDraft, Step, StepKind, StepType,
};
