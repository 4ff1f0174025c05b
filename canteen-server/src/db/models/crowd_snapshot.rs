//! Crowd Snapshot Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Crowd level classification of a slot's occupancy percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    /// Classify an occupancy rate (0–100)
    ///
    /// Thresholds: low < 40, medium 40–69, high >= 70.
    pub fn from_occupancy(rate: i32) -> Self {
        if rate >= 70 {
            Self::High
        } else if rate >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Point-in-time occupancy record for one slot
///
/// Created only by the crowd monitor; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,

    #[serde(with = "serde_helpers::record_id")]
    pub slot: RecordId,

    /// Slot name snapshot for dashboard display
    pub slot_name: String,

    /// Bookings with status PENDING or SERVING at sample time
    pub active_bookings: i32,

    pub total_capacity: i32,

    /// round(100 × active / capacity), 0 when capacity is 0
    pub occupancy_rate: i32,

    pub crowd_level: CrowdLevel,

    /// Historical wait estimate in minutes
    pub avg_wait_time: i32,

    /// Sample time (Unix millis)
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crowd_level_thresholds() {
        assert_eq!(CrowdLevel::from_occupancy(0), CrowdLevel::Low);
        assert_eq!(CrowdLevel::from_occupancy(39), CrowdLevel::Low);
        // Exactly 40 is medium, not low
        assert_eq!(CrowdLevel::from_occupancy(40), CrowdLevel::Medium);
        assert_eq!(CrowdLevel::from_occupancy(69), CrowdLevel::Medium);
        assert_eq!(CrowdLevel::from_occupancy(70), CrowdLevel::High);
        assert_eq!(CrowdLevel::from_occupancy(100), CrowdLevel::High);
    }

    #[test]
    fn test_crowd_level_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&CrowdLevel::Medium).unwrap(),
            "\"medium\""
        );
        let level: CrowdLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(level, CrowdLevel::High);
    }
}
