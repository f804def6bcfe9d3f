use foodgram_db::table::Tag;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::SqliteConnection;
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct CreateTagInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub slug: String,
}

impl CreateTagInput {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            slug: self.slug.trim().to_owned(),
        }
    }
}

async fn find_tag(
    connection: &mut SqliteConnection,
    input: &CreateTagInput,
) -> foodgram_shared::Result<Option<String>> {
    let statement = Query::select()
        .column(Tag::Id)
        .from(Tag::Table)
        .cond_where(
            Expr::col(Tag::Name)
                .eq(&input.name)
                .or(Expr::col(Tag::Slug).eq(&input.slug)),
        )
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_scalar_with::<_, String, _>(&sql, values)
        .fetch_optional(connection)
        .await?)
}

async fn insert_tag(
    connection: &mut SqliteConnection,
    input: CreateTagInput,
) -> foodgram_shared::Result<String> {
    let id = ulid::Ulid::new().to_string();
    let statement = Query::insert()
        .into_table(Tag::Table)
        .columns([Tag::Id, Tag::Name, Tag::Slug])
        .values_panic([id.to_owned().into(), input.name.into(), input.slug.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(connection).await?;

    Ok(id)
}

impl super::Command {
    pub async fn create_tag(&self, input: CreateTagInput) -> foodgram_shared::Result<String> {
        let input = input.trimmed();
        input.validate()?;

        let mut tx = self.write_db.begin().await?;

        if find_tag(&mut tx, &input).await?.is_some() {
            foodgram_shared::user!("tag {} already exists", input.slug);
        }

        let id = insert_tag(&mut tx, input).await?;
        tx.commit().await?;

        Ok(id)
    }

    /// Get-or-create every tag, a tag sharing its name or slug with an
    /// existing one is skipped. Returns how many were new.
    pub async fn import_tags(&self, input: Vec<CreateTagInput>) -> foodgram_shared::Result<u64> {
        let input = input
            .into_iter()
            .map(CreateTagInput::trimmed)
            .collect::<Vec<_>>();

        for tag in input.iter() {
            tag.validate()?;
        }

        let mut tx = self.write_db.begin().await?;
        let mut created = 0;

        for tag in input {
            if find_tag(&mut tx, &tag).await?.is_some() {
                continue;
            }

            insert_tag(&mut tx, tag).await?;
            created += 1;
        }

        tx.commit().await?;

        tracing::info!(created, "tags imported");

        Ok(created)
    }
}
