//! Database Models
//!
//! SurrealDB entities and their create/update payloads.

pub mod booking;
pub mod crowd_snapshot;
pub mod menu_item;
pub mod serde_helpers;
pub mod slot;

pub use booking::{
    Booking, BookingCreate, BookingId, BookingItem, BookingItemInput, BookingModifyItems,
    BookingStatus, ModificationEntry,
};
pub use crowd_snapshot::{CrowdLevel, CrowdSnapshot};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
pub use slot::{Slot, SlotCreate, SlotId, SlotUpdate};
