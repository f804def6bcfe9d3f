use foodgram_db::table::Ingredient;
use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct IngredientInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub measurement_unit: String,
}

impl IngredientInput {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            measurement_unit: self.measurement_unit.trim().to_owned(),
        }
    }
}

impl super::Command {
    /// Get-or-create every ingredient by (name, unit), returns how many were new.
    pub async fn import_ingredients(
        &self,
        input: Vec<IngredientInput>,
    ) -> foodgram_shared::Result<u64> {
        let input = input
            .into_iter()
            .map(IngredientInput::trimmed)
            .collect::<Vec<_>>();

        for ingredient in input.iter() {
            ingredient.validate()?;
        }

        let mut tx = self.write_db.begin().await?;
        let mut created = 0;

        for ingredient in input {
            let statement = Query::insert()
                .into_table(Ingredient::Table)
                .columns([
                    Ingredient::Id,
                    Ingredient::Name,
                    Ingredient::MeasurementUnit,
                ])
                .values_panic([
                    ulid::Ulid::new().to_string().into(),
                    ingredient.name.into(),
                    ingredient.measurement_unit.into(),
                ])
                .on_conflict(
                    OnConflict::columns([Ingredient::Name, Ingredient::MeasurementUnit])
                        .do_nothing()
                        .to_owned(),
                )
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            created += sqlx::query_with(&sql, values)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;

        tracing::info!(created, "ingredients imported");

        Ok(created)
    }
}
