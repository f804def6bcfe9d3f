use foodgram_shared::recipe::{IngredientIdentity, Recipe};
use std::collections::BTreeMap;

use crate::CartSnapshot;

/// One consolidated shopping-list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedLine {
    pub identity: IngredientIdentity,
    pub total_amount: u64,
}

/// Aggregated ingredients sorted by name, then measurement unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    pub lines: Vec<AggregatedLine>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<BTreeMap<IngredientIdentity, u64>> for ShoppingList {
    fn from(totals: BTreeMap<IngredientIdentity, u64>) -> Self {
        Self {
            lines: totals
                .into_iter()
                .map(|(identity, total_amount)| AggregatedLine {
                    identity,
                    total_amount,
                })
                .collect(),
        }
    }
}

/// Cart Aggregator
///
/// Stateless domain service that sums the ingredient lines of every recipe in
/// a cart into one total per (name, measurement unit):
/// - "Flour 200 g" + "Flour 300 g" = "Flour 500 g"
/// - "Flour 1 kg" + "Flour 300 g" = 2 separate lines (no unit conversion)
/// - "salt 5 g" + "Salt 5 g" = 2 separate lines (no name normalization)
pub struct CartAggregator;

impl CartAggregator {
    /// Sum every ingredient line of every recipe, keyed by identity.
    ///
    /// Lines with an empty name or unit, or a negative amount, are rejected
    /// with [`foodgram_shared::Error::Integrity`]. Zero amounts are kept.
    pub fn aggregate<'a, I>(recipes: I) -> foodgram_shared::Result<BTreeMap<IngredientIdentity, u64>>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let mut totals = BTreeMap::new();

        for recipe in recipes {
            for line in recipe.ingredients() {
                if !line.identity.is_complete() {
                    foodgram_shared::integrity!(
                        "recipe {} has an ingredient without name or unit",
                        recipe.id
                    );
                }

                let Ok(amount) = u64::try_from(line.amount) else {
                    foodgram_shared::integrity!(
                        "recipe {} has negative amount {} of {}",
                        recipe.id,
                        line.amount,
                        line.identity
                    );
                };

                let total = totals.entry(line.identity.clone()).or_insert(0u64);
                let Some(sum) = total.checked_add(amount) else {
                    foodgram_shared::integrity!("total amount of {} overflows", line.identity);
                };

                *total = sum;
            }
        }

        Ok(totals)
    }

    pub fn shopping_list(snapshot: &CartSnapshot) -> foodgram_shared::Result<ShoppingList> {
        let totals = Self::aggregate(snapshot.recipes())?;

        tracing::debug!(
            user_id = snapshot.user_id(),
            recipes = snapshot.recipes().len(),
            lines = totals.len(),
            "cart aggregated"
        );

        Ok(totals.into())
    }
}
