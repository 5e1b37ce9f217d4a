#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_in_memory;

/// Fresh, fully migrated database private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // In-memory SQLite lives as long as its single pooled connection
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
