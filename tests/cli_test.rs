// tests/cli_test.rs — Integration test: command handlers against a temporary database

use std::path::Path;

use stovetop::cli;
use stovetop::infra::config::Config;
use stovetop::store::open_recipe_store;

const OMELETTE: &str = r#"{
  "title": "Omelette",
  "difficulty": "Easy",
  "ingredients": [{"id": "egg", "name": "Egg", "quantity": 3, "unit": "pcs"}],
  "steps": [
    {"id": "beat", "description": "Beat eggs", "type": "instruction",
     "durationSeconds": 60, "ingredientIds": ["egg"]},
    {"id": "cook", "description": "Cook", "type": "cooking",
     "durationSeconds": 120, "cookingSettings": {"temperatureC": 160, "speed": 1}}
  ]
}"#;

fn config_for(db: &Path) -> Config {
    toml::from_str(&format!("[storage]\ndatabase = \"{}\"", db.display())).unwrap()
}

#[test]
fn test_add_then_favorite_then_export() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("book.db"));
    let form_path = dir.path().join("omelette.json");
    std::fs::write(&form_path, OMELETTE).unwrap();

    tokio_test::block_on(cli::add::run_add(&config, form_path.to_str().unwrap())).unwrap();

    let id = {
        let store = open_recipe_store(&config).unwrap();
        assert_eq!(store.len(), 1);
        store.list_all()[0].id.clone()
    };

    tokio_test::block_on(cli::favorite::run_favorite(&config, &id)).unwrap();
    assert!(open_recipe_store(&config).unwrap().find_by_id(&id).unwrap().favorite);

    let out = dir.path().join("export.yaml");
    tokio_test::block_on(cli::export::run_export(
        &config,
        "yaml",
        Some(out.to_str().unwrap()),
    ))
    .unwrap();
    let yaml = std::fs::read_to_string(&out).unwrap();
    assert!(yaml.contains("Omelette"));
    assert!(yaml.contains("favorite: true"));
}

#[test]
fn test_add_invalid_form_leaves_store_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("book.db"));
    let form_path = dir.path().join("bad.json");
    std::fs::write(&form_path, r#"{"title": "Nothing"}"#).unwrap();

    let err = tokio_test::block_on(cli::add::run_add(&config, form_path.to_str().unwrap()))
        .unwrap_err();
    assert_eq!(err.to_string(), "At least one ingredient is required");
    assert!(open_recipe_store(&config).unwrap().is_empty());
}

#[test]
fn test_unknown_ids_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("book.db"));

    let err = tokio_test::block_on(cli::show::run_show(&config, "nope")).unwrap_err();
    assert_eq!(err.to_string(), "Recipe 'nope' not found");

    let err = tokio_test::block_on(cli::favorite::run_favorite(&config, "nope")).unwrap_err();
    assert_eq!(err.to_string(), "Recipe 'nope' not found");

    let err = tokio_test::block_on(cli::cook::run_cook(&config, "nope", true)).unwrap_err();
    assert_eq!(err.to_string(), "Recipe 'nope' not found");
}

#[test]
fn test_migrate_rollback_and_reapply() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("book.db");
    let config = config_for(&db);

    tokio_test::block_on(cli::migrate::run_migrate(&config, false, false)).unwrap();
    tokio_test::block_on(cli::migrate::run_migrate(&config, false, true)).unwrap();

    let conn = rusqlite::Connection::open(&db).unwrap();
    assert_eq!(stovetop::store::schema::current_version(&conn).unwrap(), 0);

    // Opening the store migrates again
    drop(conn);
    assert!(open_recipe_store(&config).unwrap().is_empty());
    let conn = rusqlite::Connection::open(&db).unwrap();
    assert_eq!(stovetop::store::schema::current_version(&conn).unwrap(), 1);
}
