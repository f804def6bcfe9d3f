use sqlx_migrator::{Info, Migrate, Migrator, Plan};

mod m0_1;
mod m0_2;
pub mod table;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::Migration), Box::new(m0_2::Migration)])?;

    Ok(migrator)
}

/// Applies every pending migration on the given connection.
pub async fn migrate(connection: &mut sqlx::SqliteConnection) -> anyhow::Result<()> {
    migrator()?.run(connection, &Plan::apply_all()).await?;

    Ok(())
}
