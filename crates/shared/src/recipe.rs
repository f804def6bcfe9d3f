use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping key of a shopping-list line.
///
/// Two ingredient records describe the same line only when both the name and
/// the measurement unit match exactly. Comparison is case-sensitive and no
/// normalization is applied. The derived ordering sorts by name, then unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IngredientIdentity {
    pub name: String,
    pub measurement_unit: String,
}

impl IngredientIdentity {
    pub fn new(name: impl Into<String>, measurement_unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measurement_unit: measurement_unit.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.measurement_unit.is_empty()
    }
}

impl fmt::Display for IngredientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.measurement_unit)
    }
}

/// One ingredient of a recipe, as persisted by the recipe store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    pub identity: IngredientIdentity,
    pub amount: i64,
}

impl RecipeIngredientLine {
    pub fn new(name: impl Into<String>, measurement_unit: impl Into<String>, amount: i64) -> Self {
        Self {
            identity: IngredientIdentity::new(name, measurement_unit),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub cooking_time: u16,
    pub ingredients: Vec<RecipeIngredientLine>,
}

impl Recipe {
    pub fn ingredients(&self) -> &[RecipeIngredientLine] {
        &self.ingredients
    }
}
