//! Booking Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

pub type BookingId = RecordId;

/// Booking status
///
/// Legal transitions: PENDING → SERVING → SERVED, PENDING → CANCELLED.
/// SERVED and CANCELLED are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Serving,
    Served,
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl BookingStatus {
    /// Active bookings count toward the gap-free queue position invariant
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Serving)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Serving => "SERVING",
            Self::Served => "SERVED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// One ordered line of a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingItem {
    /// Menu item reference
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    /// Name snapshot taken at booking time
    pub name: String,
    pub quantity: i32,
}

/// Append-only audit entry for item edits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModificationEntry {
    /// Unix timestamp millis
    pub timestamp: i64,
    pub description: String,
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "serde_helpers::option_record_id")]
    pub id: Option<BookingId>,

    /// Owning student (gateway identity, immutable after creation)
    pub student_id: String,

    /// Target slot (immutable after creation)
    #[serde(with = "serde_helpers::record_id")]
    pub slot: RecordId,

    /// Per-slot, per-day sequential token code (e.g. "L004"), immutable
    pub token_number: String,

    /// Ordered items; mutable only while PENDING
    pub items: Vec<BookingItem>,

    /// Rank among active bookings of the slot, managed by the queue core
    pub queue_position: i32,

    #[serde(default)]
    pub status: BookingStatus,

    /// Static wait quote in minutes, computed once at creation
    pub estimated_wait_time: i32,

    /// Creation time (Unix millis)
    pub booked_at: i64,

    /// Set once on SERVED
    pub served_at: Option<i64>,

    /// Set once on CANCELLED
    pub cancelled_at: Option<i64>,

    /// Audit trail of item edits
    #[serde(default)]
    pub modification_history: Vec<ModificationEntry>,
}

/// One requested item line in a create/modify payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingItemInput {
    #[validate(length(min = 1))]
    pub menu_item_id: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingCreate {
    #[validate(length(min = 1))]
    pub slot_id: String,
    #[validate(length(min = 1), nested)]
    pub items: Vec<BookingItemInput>,
}

/// Replace items payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingModifyItems {
    #[validate(length(min = 1), nested)]
    pub items: Vec<BookingItemInput>,
}
