use foodgram_shared::recipe::Recipe;
use std::collections::HashSet;

/// Read-only view of one user's cart at the time it was read.
///
/// Cart membership is a set: a recipe id appears at most once, the first
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    user_id: String,
    recipes: Vec<Recipe>,
}

impl CartSnapshot {
    pub fn new(user_id: impl Into<String>, recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let mut seen = HashSet::new();
        let recipes = recipes
            .into_iter()
            .filter(|recipe| seen.insert(recipe.id.to_owned()))
            .collect();

        Self {
            user_id: user_id.into(),
            recipes,
        }
    }

    pub fn empty(user_id: impl Into<String>) -> Self {
        Self::new(user_id, [])
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
