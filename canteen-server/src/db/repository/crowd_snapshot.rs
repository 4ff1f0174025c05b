//! Crowd Snapshot Repository
//!
//! Append-only: snapshots are written by the crowd monitor and never
//! mutated or deleted.

use super::{BaseRepository, RepoResult};
use crate::db::models::CrowdSnapshot;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "crowd_snapshot";

#[derive(Clone)]
pub struct CrowdSnapshotRepository {
    base: BaseRepository,
}

impl CrowdSnapshotRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Append one snapshot
    pub async fn append(&self, snapshot: CrowdSnapshot) -> RepoResult<CrowdSnapshot> {
        let created: Option<CrowdSnapshot> =
            self.base.db().create(TABLE).content(snapshot).await?;
        created.ok_or_else(|| {
            super::RepoError::Database("Failed to append crowd snapshot".to_string())
        })
    }

    /// Most recent snapshot for a slot, if any
    pub async fn latest(&self, slot: &RecordId) -> RepoResult<Option<CrowdSnapshot>> {
        let snapshots: Vec<CrowdSnapshot> = self
            .base
            .db()
            .query(
                "SELECT * FROM crowd_snapshot \
                 WHERE slot = $slot ORDER BY timestamp DESC LIMIT 1",
            )
            .bind(("slot", slot.to_string()))
            .await?
            .take(0)?;
        Ok(snapshots.into_iter().next())
    }

    /// Snapshots for a slot taken at or after `since`, newest first
    pub async fn find_since(&self, slot: &RecordId, since: i64) -> RepoResult<Vec<CrowdSnapshot>> {
        let snapshots: Vec<CrowdSnapshot> = self
            .base
            .db()
            .query(
                "SELECT * FROM crowd_snapshot \
                 WHERE slot = $slot AND timestamp >= $since ORDER BY timestamp DESC",
            )
            .bind(("slot", slot.to_string()))
            .bind(("since", since))
            .await?
            .take(0)?;
        Ok(snapshots)
    }
}
