use crate::config::AppConfig;
use crate::database::models::Store;
use crate::database::Database;

/// Fresh, migrated in-memory database private to the calling test
pub async fn memory_database() -> Database {
    Database::connect(&AppConfig::in_memory().database)
        .await
        .expect("in-memory database")
}

pub async fn seed_store(db: &Database, name: &str) -> Store {
    db.stores().insert(name).await.expect("seed store")
}
