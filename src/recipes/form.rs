// src/recipes/form.rs — Recipe authoring form and validation
//
// The form is what a user edits: rows may be half-filled and a step row
// may carry the wrong payload for its type. `into_draft` cleans and
// validates it into a strongly typed `RecipeDraft`. Validation failures
// are returned as human-readable messages, never raised.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{CookingSettings, Difficulty, Ingredient, RecipeDraft, Step, StepKind, StepType};

pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<i32> = 40..=200;
pub const SPEED_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_difficulty() -> Difficulty {
    Difficulty::Easy
}

fn default_step_type() -> StepType {
    StepType::Instruction
}

/// Longest single step: one week.
pub const MAX_STEP_SECONDS: i64 = 7 * 24 * 60 * 60;

fn default_duration() -> i64 {
    60
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub ingredients: Vec<IngredientRow>,
    #[serde(default)]
    pub steps: Vec<StepRow>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            cuisine: String::new(),
            difficulty: default_difficulty(),
            favorite: false,
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRow {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

impl IngredientRow {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.quantity > 0.0 && !self.unit.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRow {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default = "default_step_type")]
    pub step_type: StepType,
    #[serde(default = "default_duration")]
    pub duration_seconds: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_settings: Option<CookingSettings>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl RecipeForm {
    // -- Ingredients --

    /// Append an empty ingredient row and return its id.
    pub fn add_ingredient(&mut self) -> String {
        let id = new_id();
        self.ingredients.push(IngredientRow {
            id: id.clone(),
            name: String::new(),
            quantity: 0.0,
            unit: String::new(),
        });
        id
    }

    pub fn remove_ingredient(&mut self, id: &str) {
        self.ingredients.retain(|i| i.id != id);
    }

    pub fn update_ingredient(&mut self, id: &str, patch: impl FnOnce(&mut IngredientRow)) -> bool {
        match self.ingredients.iter_mut().find(|i| i.id == id) {
            Some(row) => {
                patch(row);
                true
            }
            None => false,
        }
    }

    // -- Steps --

    /// Append a one-minute instruction step and return its id.
    pub fn add_step(&mut self) -> String {
        let id = new_id();
        self.steps.push(StepRow {
            id: id.clone(),
            description: String::new(),
            step_type: StepType::Instruction,
            duration_seconds: default_duration(),
            ingredient_ids: Some(Vec::new()),
            cooking_settings: None,
        });
        id
    }

    pub fn remove_step(&mut self, id: &str) {
        self.steps.retain(|s| s.id != id);
    }

    pub fn update_step(&mut self, id: &str, patch: impl FnOnce(&mut StepRow)) -> bool {
        match self.steps.iter_mut().find(|s| s.id == id) {
            Some(row) => {
                patch(row);
                true
            }
            None => false,
        }
    }

    /// Swap a step with its neighbour. Moving past either end does nothing.
    pub fn move_step(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(idx) = self.steps.iter().position(|s| s.id == id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up => idx.checked_sub(1),
            MoveDirection::Down => Some(idx + 1).filter(|t| *t < self.steps.len()),
        };
        match target {
            Some(t) => {
                self.steps.swap(idx, t);
                true
            }
            None => false,
        }
    }

    // -- Saving --

    /// Clean, validate and convert into a draft ready for the store.
    pub fn into_draft(self) -> Result<RecipeDraft, Vec<String>> {
        let invalid = self.ingredients.iter().filter(|i| !i.is_complete()).count();
        if invalid > 0 {
            return Err(vec![format!(
                "{} invalid ingredient(s) were removed. Please fill in name, quantity, and unit for all ingredients.",
                invalid
            )]);
        }

        let cleaned = self.without_dangling_references();
        let errors = validate_recipe(&cleaned);
        if !errors.is_empty() {
            return Err(errors);
        }

        let steps = cleaned
            .steps
            .into_iter()
            .enumerate()
            .map(|(idx, row)| into_step(row).ok_or_else(|| format!("Step {}: invalid", idx + 1)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| vec![e])?;

        let ingredients = cleaned
            .ingredients
            .into_iter()
            .map(|row| Ingredient {
                id: row.id,
                name: row.name.trim().to_string(),
                quantity: row.quantity,
                unit: row.unit.trim().to_string(),
            })
            .collect();

        let cuisine = Some(cleaned.cuisine.trim().to_string()).filter(|c| !c.is_empty());

        Ok(RecipeDraft {
            title: cleaned.title.trim().to_string(),
            cuisine,
            difficulty: cleaned.difficulty,
            favorite: cleaned.favorite,
            ingredients,
            steps,
        })
    }

    /// Drop step references to ingredients that are not on the form.
    fn without_dangling_references(mut self) -> Self {
        let known: std::collections::HashSet<String> =
            self.ingredients.iter().map(|i| i.id.clone()).collect();
        for step in &mut self.steps {
            if let Some(ids) = step.ingredient_ids.as_mut() {
                ids.retain(|id| known.contains(id));
            }
        }
        self
    }
}

fn into_step(row: StepRow) -> Option<Step> {
    let kind = match row.step_type {
        StepType::Instruction => StepKind::Instruction {
            ingredient_ids: row.ingredient_ids.filter(|ids| !ids.is_empty())?,
        },
        StepType::Cooking => StepKind::Cooking {
            settings: row.cooking_settings?,
        },
    };
    Some(Step {
        id: row.id,
        description: row.description.trim().to_string(),
        duration_seconds: u32::try_from(row.duration_seconds).ok()?,
        kind,
    })
}

pub fn validate_step(step: &StepRow) -> Vec<String> {
    let mut errors = Vec::new();
    if step.description.trim().is_empty() {
        errors.push("Step description is required".to_string());
    }
    if step.duration_seconds <= 0 {
        errors.push("Step duration must be > 0".to_string());
    } else if step.duration_seconds > MAX_STEP_SECONDS {
        errors.push("Step duration must be at most 7 days".to_string());
    }
    match step.step_type {
        StepType::Cooking => match &step.cooking_settings {
            None => errors.push("Cooking step requires settings".to_string()),
            Some(settings) => {
                if !TEMPERATURE_RANGE.contains(&settings.temperature_c) {
                    errors.push("Temperature must be 40–200°C".to_string());
                }
                if !SPEED_RANGE.contains(&settings.speed) {
                    errors.push("Speed must be 1–5".to_string());
                }
            }
        },
        StepType::Instruction => {
            if step.ingredient_ids.as_ref().is_none_or(|ids| ids.is_empty()) {
                errors.push("Instruction step requires ingredientIds".to_string());
            }
        }
    }
    errors
}

pub fn validate_recipe(form: &RecipeForm) -> Vec<String> {
    let mut errors = Vec::new();
    if form.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    }
    if form.ingredients.is_empty() {
        errors.push("At least one ingredient is required".to_string());
    }
    if form.steps.is_empty() {
        errors.push("At least one step is required".to_string());
    }
    for (idx, step) in form.steps.iter().enumerate() {
        let step_errors = validate_step(step);
        if !step_errors.is_empty() {
            errors.push(format!("Step {}: {}", idx + 1, step_errors.join(", ")));
        }
    }
    errors
}
