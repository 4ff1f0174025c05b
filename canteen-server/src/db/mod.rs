//! Database Module
//!
//! Embedded SurrealDB storage: one RocksDB-backed datastore per server
//! instance, namespace/database fixed to `canteen`.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "canteen";
const DATABASE: &str = "canteen";

/// Database service owning the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk datastore at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        tracing::info!(path = %db_path, "Database connection established (SurrealDB embedded)");

        Ok(Self { db })
    }

    /// In-memory datastore for tests
    #[cfg(test)]
    pub async fn memory() -> Self {
        use surrealdb::engine::local::Mem;

        let db = Surreal::new::<Mem>(())
            .await
            .expect("Failed to open in-memory database");
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .expect("Failed to select namespace");
        Self { db }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_on_disk_datastore() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canteen.db");

        let service = DbService::new(&path.to_string_lossy()).await.unwrap();
        service.db.query("RETURN 1").await.unwrap();
    }
}
