use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Ingredient;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Ingredient::Table)
        .col(
            ColumnDef::new(Ingredient::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Ingredient::Name)
                .string()
                .not_null()
                .string_len(256),
        )
        .col(
            ColumnDef::new(Ingredient::MeasurementUnit)
                .string()
                .not_null()
                .string_len(50),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Ingredient::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateNameUnitIdx;

fn create_name_unit_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_ingredient_name_unit")
        .table(Ingredient::Table)
        .unique()
        .col(Ingredient::Name)
        .col(Ingredient::MeasurementUnit)
        .to_owned()
}

fn drop_name_unit_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_ingredient_name_unit")
        .table(Ingredient::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateNameUnitIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_name_unit_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_name_unit_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
