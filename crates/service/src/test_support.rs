#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, sqlite_memory_config};

use crate::employee::repo::seaorm::SeaOrmEmployeeStore;

/// Fresh in-memory SQLite store with the schema applied. Each call is isolated.
pub async fn sqlite_store() -> Result<SeaOrmEmployeeStore, anyhow::Error> {
    let db = connect_with_config(&sqlite_memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(SeaOrmEmployeeStore { db })
}
