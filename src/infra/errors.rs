// src/infra/errors.rs — Error types for Stovetop

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StovetopError {
    // User errors
    #[error("Recipe '{id}' not found")]
    RecipeNotFound { id: String },

    #[error("{}", first_message(.errors))]
    InvalidRecipe { errors: Vec<String> },

    // Infra
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn first_message(errors: &[String]) -> &str {
    errors
        .first()
        .map(String::as_str)
        .unwrap_or("Recipe is invalid")
}

impl StovetopError {
    /// Validation failures are shown to the user verbatim; everything else
    /// is an environment problem.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            StovetopError::RecipeNotFound { .. } | StovetopError::InvalidRecipe { .. }
        )
    }
}
