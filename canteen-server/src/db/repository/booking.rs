//! Booking Repository
//!
//! Holds every query the queue core depends on: token-day counting,
//! max-position lookup, gap-closing decrement and pending reload.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Booking, BookingItem, BookingStatus, ModificationEntry};
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "booking";

/// Statuses that count toward the gap-free position invariant
fn active_statuses() -> Vec<String> {
    vec!["PENDING".to_string(), "SERVING".to_string()]
}

#[derive(Debug, Deserialize)]
struct CountRow {
    total: i64,
}

#[derive(Debug, Deserialize)]
struct MaxPositionRow {
    max_position: Option<i32>,
}

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn parse_id(id: &str) -> RepoResult<RecordId> {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid booking ID: {}", id)))
    }

    /// Persist a new booking
    pub async fn create(&self, booking: Booking) -> RepoResult<Booking> {
        let created: Option<Booking> = self.base.db().create(TABLE).content(booking).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// Find booking by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Booking>> {
        let thing = Self::parse_id(id)?;
        let booking: Option<Booking> = self.base.db().select(thing).await?;
        Ok(booking)
    }

    /// Active bookings of a student, most recent first
    pub async fn find_active_by_student(&self, student_id: &str) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(
                "SELECT * FROM booking \
                 WHERE student_id = $student AND status IN $active \
                 ORDER BY booked_at DESC",
            )
            .bind(("student", student_id.to_string()))
            .bind(("active", active_statuses()))
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Active bookings of a slot ordered by queue position
    pub async fn active_queue(&self, slot: &RecordId) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(
                "SELECT * FROM booking \
                 WHERE slot = $slot AND status IN $active \
                 ORDER BY queue_position ASC",
            )
            .bind(("slot", slot.to_string()))
            .bind(("active", active_statuses()))
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Pending bookings of a slot ordered by queue position
    pub async fn pending_ordered(&self, slot: &RecordId) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(
                "SELECT * FROM booking \
                 WHERE slot = $slot AND status = $status \
                 ORDER BY queue_position ASC",
            )
            .bind(("slot", slot.to_string()))
            .bind(("status", "PENDING".to_string()))
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Pending booking with the smallest queue position, if any
    pub async fn first_pending(&self, slot: &RecordId) -> RepoResult<Option<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(
                "SELECT * FROM booking \
                 WHERE slot = $slot AND status = $status \
                 ORDER BY queue_position ASC LIMIT 1",
            )
            .bind(("slot", slot.to_string()))
            .bind(("status", "PENDING".to_string()))
            .await?
            .take(0)?;
        Ok(bookings.into_iter().next())
    }

    /// Count bookings of a slot created at or after `since` (Unix millis)
    ///
    /// Counts every booking regardless of status: a cancelled booking keeps
    /// its token, so the day sequence never reuses a number.
    pub async fn count_booked_since(&self, slot: &RecordId, since: i64) -> RepoResult<i64> {
        let rows: Vec<CountRow> = self
            .base
            .db()
            .query(
                "SELECT count() AS total FROM booking \
                 WHERE slot = $slot AND booked_at >= $since \
                 GROUP ALL",
            )
            .bind(("slot", slot.to_string()))
            .bind(("since", since))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next().map(|r| r.total).unwrap_or(0))
    }

    /// Number of active bookings in a slot
    pub async fn active_count(&self, slot: &RecordId) -> RepoResult<i64> {
        let rows: Vec<CountRow> = self
            .base
            .db()
            .query(
                "SELECT count() AS total FROM booking \
                 WHERE slot = $slot AND status IN $active \
                 GROUP ALL",
            )
            .bind(("slot", slot.to_string()))
            .bind(("active", active_statuses()))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next().map(|r| r.total).unwrap_or(0))
    }

    /// Highest queue position among active bookings, if any
    pub async fn max_active_position(&self, slot: &RecordId) -> RepoResult<Option<i32>> {
        let rows: Vec<MaxPositionRow> = self
            .base
            .db()
            .query(
                "SELECT math::max(queue_position) AS max_position FROM booking \
                 WHERE slot = $slot AND status IN $active \
                 GROUP ALL",
            )
            .bind(("slot", slot.to_string()))
            .bind(("active", active_statuses()))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next().and_then(|r| r.max_position))
    }

    /// Decrement the position of every active booking above `position`
    pub async fn shift_positions_above(&self, slot: &RecordId, position: i32) -> RepoResult<()> {
        self.base
            .db()
            .query(
                "UPDATE booking SET queue_position -= 1 \
                 WHERE slot = $slot AND status IN $active AND queue_position > $position",
            )
            .bind(("slot", slot.to_string()))
            .bind(("active", active_statuses()))
            .bind(("position", position))
            .await?;
        Ok(())
    }

    /// Overwrite one booking's queue position
    pub async fn set_position(&self, id: &RecordId, position: i32) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET queue_position = $position")
            .bind(("thing", id.clone()))
            .bind(("position", position))
            .await?;
        Ok(())
    }

    /// Replace items wholesale and append a modification history entry
    pub async fn update_items(
        &self,
        id: &str,
        items: Vec<BookingItem>,
        entry: ModificationEntry,
    ) -> RepoResult<Booking> {
        let thing = Self::parse_id(id)?;
        self.base
            .db()
            .query("UPDATE $thing SET items = $items, modification_history += $entry")
            .bind(("thing", thing))
            .bind(("items", items))
            .bind(("entry", entry))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Booking {} not found", id)))
    }

    /// Transition to CANCELLED and stamp cancelled_at
    pub async fn mark_cancelled(&self, id: &RecordId, cancelled_at: i64) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET status = $status, cancelled_at = $at")
            .bind(("thing", id.clone()))
            .bind(("status", BookingStatus::Cancelled.as_str().to_string()))
            .bind(("at", cancelled_at))
            .await?;
        Ok(())
    }

    /// Transition to SERVING
    pub async fn mark_serving(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET status = $status")
            .bind(("thing", id.clone()))
            .bind(("status", BookingStatus::Serving.as_str().to_string()))
            .await?;
        Ok(())
    }

    /// Transition to SERVED and stamp served_at
    pub async fn mark_served(&self, id: &RecordId, served_at: i64) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET status = $status, served_at = $at")
            .bind(("thing", id.clone()))
            .bind(("status", BookingStatus::Served.as_str().to_string()))
            .bind(("at", served_at))
            .await?;
        Ok(())
    }

    /// Bookings of a slot served at or after `since` (Unix millis)
    pub async fn served_since(&self, slot: &RecordId, since: i64) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query(
                "SELECT * FROM booking \
                 WHERE slot = $slot AND status = $status AND served_at >= $since",
            )
            .bind(("slot", slot.to_string()))
            .bind(("status", BookingStatus::Served.as_str().to_string()))
            .bind(("since", since))
            .await?
            .take(0)?;
        Ok(bookings)
    }
}
