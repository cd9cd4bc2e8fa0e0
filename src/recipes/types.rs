// src/recipes/types.rs — Recipe data model
//
// Field names serialize in camelCase; this is the persisted layout of the
// recipe collection.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Easy,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "hard")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Multiplier applied to the complexity score.
    pub fn factor(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}'. Options: easy, medium, hard",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingSettings {
    /// 40–200
    #[serde(rename = "temperatureC")]
    pub temperature_c: i32,
    /// 1–5
    pub speed: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Instruction,
    Cooking,
}

impl StepType {
    pub fn label(&self) -> &'static str {
        match self {
            StepType::Instruction => "instruction",
            StepType::Cooking => "cooking",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a step does. The variant decides which payload exists, so a step
/// can never carry both ingredient references and cooking settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepKind {
    Instruction {
        #[serde(rename = "ingredientIds")]
        ingredient_ids: Vec<String>,
    },
    Cooking {
        #[serde(rename = "cookingSettings")]
        settings: CookingSettings,
    },
}

impl StepKind {
    pub fn step_type(&self) -> StepType {
        match self {
            StepKind::Instruction { .. } => StepType::Instruction,
            StepKind::Cooking { .. } => StepType::Cooking,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub description: String,
    pub duration_seconds: u32,
    #[serde(flatten)]
    pub kind: StepKind,
}

impl Step {
    pub fn duration_ms(&self) -> i64 {
        i64::from(self.duration_seconds) * 1000
    }

    pub fn is_cooking(&self) -> bool {
        matches!(self.kind, StepKind::Cooking { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub cuisine: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub favorite: bool,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,

    // Derived once at creation, never recomputed
    #[serde(default)]
    pub total_time_minutes: u32,
    #[serde(default)]
    pub total_ingredients: u32,
    #[serde(default)]
    pub complexity_score: u32,
}

impl Recipe {
    /// Sum of all step durations.
    pub fn total_duration_ms(&self) -> i64 {
        self.steps.iter().map(Step::duration_ms).sum()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// True when `index` is the final step (or past it).
    pub fn is_last_step(&self, index: usize) -> bool {
        index + 1 >= self.steps.len()
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }
}

/// A validated recipe that has not been given an identity yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub cuisine: Option<String>,
    pub difficulty: Difficulty,
    pub favorite: bool,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_json() -> &'static str {
        r#"{
            "id": "r1",
            "title": "Tomato soup",
            "cuisine": "",
            "difficulty": "Medium",
            "favorite": true,
            "ingredients": [{"id": "i1", "name": "Tomato", "quantity": 4, "unit": "pc"}],
            "steps": [
                {"id": "s1", "description": "Chop", "type": "instruction",
                 "durationSeconds": 30, "ingredientIds": ["i1"]},
                {"id": "s2", "description": "Simmer", "type": "cooking",
                 "durationSeconds": 90, "cookingSettings": {"temperatureC": 100, "speed": 2}}
            ],
            "totalTimeMinutes": 2,
            "totalIngredients": 1,
            "complexityScore": 6
        }"#
    }

    #[test]
    fn test_deserialize_persisted_layout() {
        let recipe: Recipe = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(recipe.cuisine, None);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(
            recipe.steps[0].kind,
            StepKind::Instruction {
                ingredient_ids: vec!["i1".into()]
            }
        );
        assert_eq!(
            recipe.steps[1].kind,
            StepKind::Cooking {
                settings: CookingSettings {
                    temperature_c: 100,
                    speed: 2
                }
            }
        );
        assert_eq!(recipe.total_duration_ms(), 120_000);
    }

    #[test]
    fn test_serialize_step_is_flat_and_tagged() {
        let recipe: Recipe = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&recipe.steps[1]).unwrap();
        assert_eq!(value["type"], "cooking");
        assert_eq!(value["durationSeconds"], 90);
        assert_eq!(value["cookingSettings"]["temperatureC"], 100);
        assert!(value.get("ingredientIds").is_none());
    }

    #[test]
    fn test_step_with_unknown_type_is_rejected() {
        let json = r#"{"id":"s","description":"x","type":"bake","durationSeconds":1}"#;
        assert!(serde_json::from_str::<Step>(json).is_err());
    }

    #[test]
    fn test_is_last_step() {
        let recipe: Recipe = serde_json::from_str(sample_json()).unwrap();
        assert!(!recipe.is_last_step(0));
        assert!(recipe.is_last_step(1));
        assert!(recipe.is_last_step(5));
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("spicy".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_factor() {
        assert_eq!(Difficulty::Easy.factor(), 1.0);
        assert_eq!(Difficulty::Medium.factor(), 1.5);
        assert_eq!(Difficulty::Hard.factor(), 2.0);
    }
}
