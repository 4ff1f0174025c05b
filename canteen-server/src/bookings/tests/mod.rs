//! BookingManager test suite
//!
//! Shared fixtures: an in-memory datastore seeded with one slot and one
//! menu item, plus a manager wired the same way the server wires it.

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::BookingManager;
use crate::db::DbService;
use crate::db::models::{
    Booking, BookingCreate, BookingItemInput, BookingStatus, MenuItemCreate, SlotCreate,
};
use crate::db::repository::{MenuItemRepository, SlotRepository};
use crate::queue::SlotLocks;
use crate::utils::ErrorCode;

mod test_boundary;
mod test_core;
mod test_flows;

pub(crate) struct TestContext {
    pub db: Surreal<Db>,
    pub manager: BookingManager,
    pub slots: SlotRepository,
    pub menu: MenuItemRepository,
    pub slot_id: String,
    pub item_id: String,
}

impl TestContext {
    /// Seed a second slot, returning its id
    pub async fn add_slot(&self, name: &str, capacity: i32) -> String {
        let slot = self
            .slots
            .create(SlotCreate {
                name: name.into(),
                start_time: "19:00".into(),
                end_time: "21:00".into(),
                capacity,
            })
            .await
            .unwrap();
        slot.id.unwrap().to_string()
    }

    /// Current admission counter of the default slot
    pub async fn current_bookings(&self) -> i32 {
        self.slots
            .find_by_id(&self.slot_id)
            .await
            .unwrap()
            .unwrap()
            .current_bookings
    }

    /// Payload with a single line of the seeded menu item
    pub fn single_item(&self) -> Vec<BookingItemInput> {
        vec![BookingItemInput {
            menu_item_id: self.item_id.clone(),
            quantity: 1,
        }]
    }

    /// Create a booking for `student` in the default slot
    pub async fn book(&self, student: &str) -> Booking {
        self.manager
            .create_booking(
                student,
                BookingCreate {
                    slot_id: self.slot_id.clone(),
                    items: self.single_item(),
                },
            )
            .await
            .unwrap()
    }

    /// Assert the active queue positions of the default slot are exactly 1..=n
    pub async fn assert_gap_free(&self, expected_len: usize) {
        let queue = self.manager.queue_for_slot(&self.slot_id).await.unwrap();
        let positions: Vec<i32> = queue.iter().map(|b| b.queue_position).collect();
        let expected: Vec<i32> = (1..=expected_len as i32).collect();
        assert_eq!(
            positions, expected,
            "active positions must form 1..={} with no gaps",
            expected_len
        );
    }
}

/// Fresh manager over an in-memory store, with one slot and one menu item
pub(crate) async fn setup(slot_name: &str, capacity: i32) -> TestContext {
    let db = DbService::memory().await.db;

    let slots = SlotRepository::new(db.clone());
    let slot = slots
        .create(SlotCreate {
            name: slot_name.into(),
            start_time: "12:00".into(),
            end_time: "14:00".into(),
            capacity,
        })
        .await
        .unwrap();

    let menu = MenuItemRepository::new(db.clone());
    let item = menu
        .create(MenuItemCreate {
            name: "Veg Thali".into(),
            description: None,
            price: 6.5,
            category: Some("Mains".into()),
        })
        .await
        .unwrap();

    let manager = BookingManager::new(
        db.clone(),
        Arc::new(SlotLocks::new()),
        chrono_tz::Europe::Madrid,
    );

    TestContext {
        db,
        manager,
        slots,
        menu,
        slot_id: slot.id.unwrap().to_string(),
        item_id: item.id.unwrap().to_string(),
    }
}
