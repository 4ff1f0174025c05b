//! Slot Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

pub type SlotId = RecordId;

/// Slot entity: a named serving window with admission capacity
///
/// Slot names are drawn from a fixed enumeration
/// (Breakfast / Lunch / Snacks / Dinner). Token numbers use the uppercased
/// first letter of the name as prefix, so the enumeration must keep first
/// letters distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "serde_helpers::option_record_id")]
    pub id: Option<SlotId>,

    pub name: String,

    /// Display window start, "HH:MM"
    pub start_time: String,

    /// Display window end, "HH:MM"
    pub end_time: String,

    /// Physical admission capacity
    pub capacity: i32,

    /// Admission counter, independent of queue positions.
    /// Incremented on booking creation, decremented on cancellation
    /// (floored at 0).
    #[serde(default)]
    pub current_bookings: i32,

    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Slot {
    /// Remaining admission headroom
    pub fn has_capacity(&self) -> bool {
        self.current_bookings < self.capacity
    }
}

/// Create slot payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SlotCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub start_time: String,
    #[validate(length(min = 1))]
    pub end_time: String,
    #[validate(range(min = 0))]
    pub capacity: i32,
}

/// Update slot payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_capacity() {
        let slot = Slot {
            id: None,
            name: "Lunch".into(),
            start_time: "12:00".into(),
            end_time: "14:00".into(),
            capacity: 2,
            current_bookings: 1,
            is_active: true,
        };
        assert!(slot.has_capacity());

        let full = Slot {
            current_bookings: 2,
            ..slot
        };
        assert!(!full.has_capacity());
    }
}
