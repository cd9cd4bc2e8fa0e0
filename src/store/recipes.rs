// src/store/recipes.rs — Recipe collection persisted as one JSON blob
//
// The whole collection is loaded at open and rewritten on every mutation.
// Missing or malformed data loads as an empty collection.

use std::sync::Mutex;

use tracing::{info, warn};
use uuid::Uuid;

use super::kv::KeyValueStore;
use crate::infra::errors::StovetopError;
use crate::recipes::form::RecipeForm;
use crate::recipes::metrics::compute_derived;
use crate::recipes::{Recipe, RecipeDraft};

/// Read-only lookup used by the session ticker and presentation layer.
pub trait RecipeLookup: Send + Sync {
    fn find_recipe(&self, id: &str) -> Option<Recipe>;
}

pub struct RecipeStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
    items: Vec<Recipe>,
}

impl RecipeStore {
    /// Load the collection stored under `key`.
    pub fn load(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let raw = match backend.get(&key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read recipes under '{}': {}", key, e);
                None
            }
        };
        let items = decode_collection(raw.as_deref());
        info!("Loaded {} recipe(s)", items.len());
        Self {
            backend,
            key,
            items,
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Recipe> {
        self.items.iter().find(|r| r.id == id)
    }

    /// All recipes in insertion order.
    pub fn list_all(&self) -> &[Recipe] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Assign an identifier, compute derived fields, and persist.
    pub fn add(&mut self, draft: RecipeDraft) -> Result<Recipe, StovetopError> {
        let recipe = compute_derived(Uuid::new_v4().to_string(), draft);
        self.items.push(recipe.clone());
        if let Err(e) = self.persist() {
            self.items.pop();
            return Err(e);
        }
        info!("Added recipe '{}' ({})", recipe.title, recipe.id);
        Ok(recipe)
    }

    /// Validate a form and add it.
    pub fn add_form(&mut self, form: RecipeForm) -> Result<Recipe, StovetopError> {
        let draft = form
            .into_draft()
            .map_err(|errors| StovetopError::InvalidRecipe { errors })?;
        self.add(draft)
    }

    /// Flip the favorite flag. `Ok(None)` when no recipe has this id.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<Option<bool>, StovetopError> {
        let Some(idx) = self.items.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        self.items[idx].favorite = !self.items[idx].favorite;
        if let Err(e) = self.persist() {
            self.items[idx].favorite = !self.items[idx].favorite;
            return Err(e);
        }
        Ok(Some(self.items[idx].favorite))
    }

    fn persist(&self) -> Result<(), StovetopError> {
        let json = serde_json::to_string(&self.items)?;
        self.backend.put(&self.key, &json)
    }
}

/// Parse a stored collection, yielding nothing on any problem.
pub fn decode_collection(raw: Option<&str>) -> Vec<Recipe> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Recipe>>(raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Stored recipes are unreadable, starting empty: {}", e);
            Vec::new()
        }
    }
}

impl RecipeLookup for Mutex<RecipeStore> {
    fn find_recipe(&self, id: &str) -> Option<Recipe> {
        self.lock().ok()?.find_by_id(id).cloned()
    }
}

impl RecipeLookup for Vec<Recipe> {
    fn find_recipe(&self, id: &str) -> Option<Recipe> {
        self.iter().find(|r| r.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryKv;

    #[test]
    fn test_decode_absent_and_blank() {
        assert!(decode_collection(None).is_empty());
        assert!(decode_collection(Some("   ")).is_empty());
    }

    #[test]
    fn test_decode_not_an_array() {
        assert!(decode_collection(Some("{\"id\": \"x\"}")).is_empty());
        assert!(decode_collection(Some("not json")).is_empty());
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut store = RecipeStore::load(Box::new(MemoryKv::new()), "recipes");
        assert_eq!(store.toggle_favorite("nope").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_form_surfaces_validation() {
        let mut store = RecipeStore::load(Box::new(MemoryKv::new()), "recipes");
        let err = store.add_form(RecipeForm::default()).unwrap_err();
        match err {
            StovetopError::InvalidRecipe { errors } => {
                assert_eq!(errors[0], "Title is required");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.is_empty());
    }
}
