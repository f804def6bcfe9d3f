use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Recipe;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Recipe::Table)
        .col(
            ColumnDef::new(Recipe::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Recipe::AuthorId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Recipe::Name)
                .string()
                .not_null()
                .string_len(256),
        )
        .col(ColumnDef::new(Recipe::Text).text().not_null())
        .col(
            ColumnDef::new(Recipe::CookingTime)
                .small_integer()
                .not_null(),
        )
        .col(ColumnDef::new(Recipe::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Recipe::Table).to_owned()
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

pub struct CreateNameAuthorIdx;

fn create_name_author_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_name_author")
        .table(Recipe::Table)
        .unique()
        .col(Recipe::Name)
        .col(Recipe::AuthorId)
        .to_owned()
}

fn drop_name_author_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_name_author")
        .table(Recipe::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateNameAuthorIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_name_author_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_name_author_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
