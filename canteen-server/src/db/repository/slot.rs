//! Slot Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Slot, SlotCreate, SlotUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "slot";

#[derive(Clone)]
pub struct SlotRepository {
    base: BaseRepository,
}

impl SlotRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid slot ID: {}", id)))
    }

    /// Find all active slots
    pub async fn find_all(&self) -> RepoResult<Vec<Slot>> {
        let slots: Vec<Slot> = self
            .base
            .db()
            .query("SELECT * FROM slot WHERE is_active = true ORDER BY start_time")
            .await?
            .take(0)?;
        Ok(slots)
    }

    /// Find slot by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Slot>> {
        let thing = Self::parse_id(id)?;
        let slot: Option<Slot> = self.base.db().select(thing).await?;
        Ok(slot)
    }

    /// Find slot by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Slot>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM slot WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let slots: Vec<Slot> = result.take(0)?;
        Ok(slots.into_iter().next())
    }

    /// Create a new slot
    pub async fn create(&self, data: SlotCreate) -> RepoResult<Slot> {
        // Check duplicate name
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Slot '{}' already exists",
                data.name
            )));
        }

        let slot = Slot {
            id: None,
            name: data.name,
            start_time: data.start_time,
            end_time: data.end_time,
            capacity: data.capacity,
            current_bookings: 0,
            is_active: true,
        };

        let created: Option<Slot> = self.base.db().create(TABLE).content(slot).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create slot".to_string()))
    }

    /// Update a slot
    pub async fn update(&self, id: &str, data: SlotUpdate) -> RepoResult<Slot> {
        let thing = Self::parse_id(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Slot {} not found", id)))?;

        // Check duplicate name when renaming
        if let Some(new_name) = &data.name
            && let Some(found) = self.find_by_name(new_name).await?
            && found.id != existing.id
        {
            return Err(RepoError::Duplicate(format!(
                "Slot '{}' already exists",
                new_name
            )));
        }

        let name = data.name.unwrap_or(existing.name);
        let start_time = data.start_time.unwrap_or(existing.start_time);
        let end_time = data.end_time.unwrap_or(existing.end_time);
        let capacity = data.capacity.unwrap_or(existing.capacity);
        let is_active = data.is_active.unwrap_or(existing.is_active);

        self.base
            .db()
            .query(
                "UPDATE $thing SET name = $name, start_time = $start_time, \
                 end_time = $end_time, capacity = $capacity, is_active = $is_active",
            )
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("start_time", start_time))
            .bind(("end_time", end_time))
            .bind(("capacity", capacity))
            .bind(("is_active", is_active))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Slot {} not found", id)))
    }

    /// Hard delete a slot
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = Self::parse_id(id)?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    /// Increment the admission counter
    pub async fn increment_bookings(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET current_bookings += 1")
            .bind(("thing", id.clone()))
            .await?;
        Ok(())
    }

    /// Decrement the admission counter, floored at 0
    pub async fn decrement_bookings(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET current_bookings = math::max([current_bookings - 1, 0])")
            .bind(("thing", id.clone()))
            .await?;
        Ok(())
    }
}
