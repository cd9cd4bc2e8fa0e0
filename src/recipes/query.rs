// src/recipes/query.rs — Recipe list filtering and sorting

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::types::{Difficulty, Recipe};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Shortest first
    #[default]
    Asc,
    /// Longest first
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Shortest first",
            SortOrder::Desc => "Longest first",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("Unknown sort order '{}'. Options: asc, desc", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    /// Empty keeps every difficulty.
    pub difficulties: Vec<Difficulty>,
    pub sort: SortOrder,
}

impl RecipeQuery {
    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        if let Some(pos) = self.difficulties.iter().position(|d| *d == difficulty) {
            self.difficulties.remove(pos);
        } else {
            self.difficulties.push(difficulty);
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.difficulties.is_empty() || self.difficulties.contains(&recipe.difficulty)
    }

    /// Filter then sort by total time. Ties keep their stored order.
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        let mut items: Vec<&Recipe> = recipes.iter().filter(|r| self.matches(r)).collect();
        match self.sort {
            SortOrder::Asc => items.sort_by_key(|r| r.total_time_minutes),
            SortOrder::Desc => items.sort_by(|a, b| b.total_time_minutes.cmp(&a.total_time_minutes)),
        }
        items
    }
}
