// tests/form_test.rs — Integration test: JSON recipe forms through validation into the store

use pretty_assertions::assert_eq;
use stovetop::cli::add::parse_form;
use stovetop::infra::errors::StovetopError;
use stovetop::recipes::form::{MoveDirection, RecipeForm};
use stovetop::recipes::{StepKind, StepType};
use stovetop::store::{MemoryKv, RecipeStore};

const PANCAKES: &str = r#"{
  "title": "  Pancakes ",
  "cuisine": "",
  "difficulty": "Medium",
  "ingredients": [
    {"id": "flour", "name": "Flour", "quantity": 200, "unit": "g"},
    {"id": "milk", "name": "Milk", "quantity": 0.3, "unit": "l"}
  ],
  "steps": [
    {"id": "mix", "description": "Whisk", "type": "instruction", "durationSeconds": 90,
     "ingredientIds": ["flour", "milk", "eggs"]},
    {"id": "fry", "description": "Fry", "type": "cooking", "durationSeconds": 30,
     "cookingSettings": {"temperatureC": 180, "speed": 1}}
  ]
}"#;

fn store() -> RecipeStore {
    RecipeStore::load(Box::new(MemoryKv::new()), "recipes")
}

#[test]
fn test_json_form_is_cleaned_and_stored() {
    let mut store = store();
    let recipe = store.add_form(parse_form(PANCAKES).unwrap()).unwrap();

    assert_eq!(recipe.title, "Pancakes");
    assert_eq!(recipe.cuisine, None);
    assert_eq!(recipe.total_time_minutes, 2);
    assert_eq!(recipe.complexity_score, 7);
    match &recipe.steps[0].kind {
        StepKind::Instruction { ingredient_ids } => {
            assert_eq!(ingredient_ids, &vec!["flour".to_string(), "milk".to_string()]);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn test_instruction_left_without_ingredients_is_rejected() {
    let mut form = parse_form(PANCAKES).unwrap();
    form.remove_ingredient("flour");
    form.remove_ingredient("milk");
    form.ingredients.push(serde_json::from_str(
        r#"{"id": "sugar", "name": "Sugar", "quantity": 1, "unit": "tbsp"}"#,
    ).unwrap());

    let err = store().add_form(form).unwrap_err();
    assert_eq!(err.to_string(), "Step 1: Instruction step requires ingredientIds");
    assert!(err.is_user_error());
}

#[test]
fn test_first_message_is_what_users_see() {
    let err = store().add_form(RecipeForm::default()).unwrap_err();
    match &err {
        StovetopError::InvalidRecipe { errors } => assert_eq!(errors.len(), 3),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.to_string(), "Title is required");
}

#[test]
fn test_step_reordering_survives_save() {
    let mut form = parse_form(PANCAKES).unwrap();
    assert!(form.move_step("fry", MoveDirection::Up));
    assert!(!form.move_step("fry", MoveDirection::Up));

    let draft = form.into_draft().unwrap();
    let order: Vec<&str> = draft.steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, vec!["fry", "mix"]);
    assert_eq!(draft.steps[0].kind.step_type(), StepType::Cooking);
}

#[test]
fn test_out_of_range_settings_rejected() {
    let mut form = parse_form(PANCAKES).unwrap();
    form.update_step("fry", |s| {
        if let Some(settings) = s.cooking_settings.as_mut() {
            settings.temperature_c = 20;
        }
    });
    let errors = form.into_draft().unwrap_err();
    assert_eq!(errors, vec!["Step 2: Temperature must be 40–200°C".to_string()]);
}
