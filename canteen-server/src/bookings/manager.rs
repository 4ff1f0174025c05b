//! BookingManager - booking lifecycle orchestration
//!
//! # Operation flow
//!
//! ```text
//! create_booking(student, payload)
//!     ├─ 1. Validate payload, resolve slot and menu items
//!     ├─ 2. Acquire the slot lock
//!     ├─ 3. Re-read slot, check capacity
//!     ├─ 4. Allocate token (daily sequence)
//!     ├─ 5. Assign queue position (max + 1)
//!     ├─ 6. Compute static wait quote
//!     ├─ 7. Persist booking, increment slot counter
//!     └─ 8. Return booking
//! ```
//!
//! Cancellation closes the position gap it leaves; serve-completion
//! renumbers the remaining pending queue. Both repairs run inside the same
//! per-slot critical section as the status write, so the gap-free invariant
//! holds between operations.

use std::sync::Arc;

use chrono_tz::Tz;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use validator::Validate;

use crate::db::models::{
    Booking, BookingCreate, BookingItem, BookingItemInput, BookingModifyItems, BookingStatus,
    ModificationEntry, Slot,
};
use crate::db::repository::{BookingRepository, MenuItemRepository, SlotRepository};
use crate::queue::{QueuePositionManager, SlotLocks, TokenAllocator, estimator};
use crate::utils::{AppError, AppResult, ErrorCode, time};

/// Booking lifecycle controller
///
/// All mutations of a slot's active-booking set go through here and run
/// under that slot's lock.
#[derive(Clone)]
pub struct BookingManager {
    bookings: BookingRepository,
    slots: SlotRepository,
    menu: MenuItemRepository,
    tokens: TokenAllocator,
    positions: QueuePositionManager,
    locks: Arc<SlotLocks>,
    tz: Tz,
}

impl BookingManager {
    pub fn new(db: Surreal<Db>, locks: Arc<SlotLocks>, tz: Tz) -> Self {
        let bookings = BookingRepository::new(db.clone());
        Self {
            tokens: TokenAllocator::new(bookings.clone(), tz),
            positions: QueuePositionManager::new(bookings.clone()),
            bookings,
            slots: SlotRepository::new(db.clone()),
            menu: MenuItemRepository::new(db),
            locks,
            tz,
        }
    }

    // ========================================================================
    // Student operations
    // ========================================================================

    /// Create a booking for a student
    pub async fn create_booking(
        &self,
        student_id: &str,
        payload: BookingCreate,
    ) -> AppResult<Booking> {
        payload
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let slot = self
            .slots
            .find_by_id(&payload.slot_id)
            .await?
            .ok_or_else(|| slot_not_found(&payload.slot_id))?;
        if !slot.is_active {
            return Err(AppError::new(ErrorCode::SlotInactive).with_detail("slot", payload.slot_id));
        }
        let slot_id = record_id_of_slot(&slot)?;

        let items = self.resolve_items(&payload.items).await?;

        // Everything that reads or writes the slot's active set stays inside
        // this critical section
        let mutex = self.locks.for_slot(&slot_id);
        let _guard = mutex.lock().await;

        let slot = self
            .slots
            .find_by_id(&slot_id.to_string())
            .await?
            .ok_or_else(|| slot_not_found(&slot_id.to_string()))?;
        if !slot.has_capacity() {
            return Err(AppError::capacity_exceeded(slot_id.to_string())
                .with_detail("capacity", slot.capacity)
                .with_detail("current_bookings", slot.current_bookings));
        }

        let token = self
            .tokens
            .allocate(&slot_id, &slot.name, time::today(self.tz))
            .await?;
        let position = self.positions.next_position(&slot_id).await?;
        let wait = estimator::estimate_at_booking(position);

        let booking = Booking {
            id: None,
            student_id: student_id.to_string(),
            slot: slot_id.clone(),
            token_number: token,
            items,
            queue_position: position,
            status: BookingStatus::Pending,
            estimated_wait_time: wait,
            booked_at: shared::util::now_millis(),
            served_at: None,
            cancelled_at: None,
            modification_history: Vec::new(),
        };

        let created = self.bookings.create(booking).await?;
        self.slots.increment_bookings(&slot_id).await?;

        tracing::info!(
            slot = %slot.name,
            token = %created.token_number,
            position = created.queue_position,
            "Booking created"
        );

        Ok(created)
    }

    /// Replace a pending booking's items (owner only)
    pub async fn modify_items(
        &self,
        student_id: &str,
        booking_id: &str,
        payload: BookingModifyItems,
    ) -> AppResult<Booking> {
        payload
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let booking = self.require_booking(booking_id).await?;
        require_owner(&booking, student_id)?;
        if booking.status != BookingStatus::Pending {
            return Err(AppError::booking_not_pending(booking.status.as_str()));
        }

        let new_items = self.resolve_items(&payload.items).await?;
        let entry = ModificationEntry {
            timestamp: shared::util::now_millis(),
            description: format!(
                "items changed from [{}] to [{}]",
                describe_items(&booking.items),
                describe_items(&new_items)
            ),
        };

        let updated = self
            .bookings
            .update_items(booking_id, new_items, entry)
            .await?;

        tracing::info!(booking = %booking_id, "Booking items modified");

        Ok(updated)
    }

    /// Cancel a pending booking (owner only)
    pub async fn cancel(&self, student_id: &str, booking_id: &str) -> AppResult<Booking> {
        let booking = self.require_booking(booking_id).await?;
        require_owner(&booking, student_id)?;

        let mutex = self.locks.for_slot(&booking.slot);
        let _guard = mutex.lock().await;

        // Re-read under the lock, a staff transition may have won the race
        let booking = self.require_booking(booking_id).await?;
        if booking.status != BookingStatus::Pending {
            return Err(AppError::booking_not_pending(booking.status.as_str()));
        }

        let id = require_id(&booking)?;
        let old_position = booking.queue_position;

        self.bookings
            .mark_cancelled(id, shared::util::now_millis())
            .await?;
        self.slots.decrement_bookings(&booking.slot).await?;
        self.positions.close_gap(&booking.slot, old_position).await?;

        tracing::info!(
            booking = %booking_id,
            position = old_position,
            "Booking cancelled, gap closed"
        );

        self.require_booking(booking_id).await
    }

    /// Active bookings of a student, most recent first
    pub async fn my_active_bookings(&self, student_id: &str) -> AppResult<Vec<Booking>> {
        Ok(self.bookings.find_active_by_student(student_id).await?)
    }

    // ========================================================================
    // Staff operations
    // ========================================================================

    /// Active queue of a slot ordered by position
    pub async fn queue_for_slot(&self, slot_id: &str) -> AppResult<Vec<Booking>> {
        let slot = self
            .slots
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| slot_not_found(slot_id))?;
        let slot_id = record_id_of_slot(&slot)?;
        Ok(self.bookings.active_queue(&slot_id).await?)
    }

    /// Select the pending booking with the smallest position and mark it serving
    pub async fn call_next(&self, slot_id: &str) -> AppResult<Booking> {
        let slot = self
            .slots
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| slot_not_found(slot_id))?;
        let slot_id = record_id_of_slot(&slot)?;

        let mutex = self.locks.for_slot(&slot_id);
        let _guard = mutex.lock().await;

        let next = self
            .bookings
            .first_pending(&slot_id)
            .await?
            .ok_or_else(|| AppError::queue_empty(slot_id.to_string()))?;
        let id = require_id(&next)?;

        self.bookings.mark_serving(id).await?;

        tracing::info!(
            slot = %slot.name,
            token = %next.token_number,
            "Called next booking"
        );

        self.require_booking(&id.to_string()).await
    }

    /// Mark a specific pending booking as serving
    pub async fn mark_serving(&self, booking_id: &str) -> AppResult<Booking> {
        let booking = self.require_booking(booking_id).await?;

        let mutex = self.locks.for_slot(&booking.slot);
        let _guard = mutex.lock().await;

        let booking = self.require_booking(booking_id).await?;
        if booking.status != BookingStatus::Pending {
            return Err(AppError::booking_not_pending(booking.status.as_str()));
        }

        let id = require_id(&booking)?;
        self.bookings.mark_serving(id).await?;

        self.require_booking(booking_id).await
    }

    /// Mark a serving booking as served and compact the pending queue
    pub async fn mark_served(&self, booking_id: &str) -> AppResult<Booking> {
        let booking = self.require_booking(booking_id).await?;

        let mutex = self.locks.for_slot(&booking.slot);
        let _guard = mutex.lock().await;

        let booking = self.require_booking(booking_id).await?;
        if booking.status != BookingStatus::Serving {
            return Err(AppError::booking_not_serving(booking.status.as_str()));
        }

        let id = require_id(&booking)?;
        self.bookings
            .mark_served(id, shared::util::now_millis())
            .await?;
        self.positions.renumber_after_serve(&booking.slot).await?;

        tracing::info!(
            booking = %booking_id,
            token = %booking.token_number,
            "Booking served, queue renumbered"
        );

        self.require_booking(booking_id).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn require_booking(&self, booking_id: &str) -> AppResult<Booking> {
        self.bookings.find_by_id(booking_id).await?.ok_or_else(|| {
            AppError::with_message(
                ErrorCode::BookingNotFound,
                format!("Booking {} not found", booking_id),
            )
        })
    }

    /// Resolve item inputs against the menu catalog, snapshotting names
    async fn resolve_items(&self, inputs: &[BookingItemInput]) -> AppResult<Vec<BookingItem>> {
        let mut items = Vec::with_capacity(inputs.len());
        for input in inputs {
            let menu_item = self
                .menu
                .find_by_id(&input.menu_item_id)
                .await?
                .ok_or_else(|| {
                    AppError::with_message(
                        ErrorCode::MenuItemNotFound,
                        format!("Menu item {} not found", input.menu_item_id),
                    )
                })?;
            if !menu_item.is_available {
                return Err(AppError::new(ErrorCode::MenuItemUnavailable)
                    .with_detail("menu_item", input.menu_item_id.clone()));
            }
            if input.quantity < 1 {
                return Err(AppError::new(ErrorCode::BookingItemQuantityInvalid)
                    .with_detail("menu_item", input.menu_item_id.clone()));
            }
            let menu_item_id = menu_item
                .id
                .ok_or_else(|| AppError::internal("Menu item record missing id"))?;
            items.push(BookingItem {
                menu_item: menu_item_id,
                name: menu_item.name,
                quantity: input.quantity,
            });
        }
        Ok(items)
    }
}

fn slot_not_found(slot_id: &str) -> AppError {
    AppError::with_message(ErrorCode::SlotNotFound, format!("Slot {} not found", slot_id))
}

fn record_id_of_slot(slot: &Slot) -> AppResult<RecordId> {
    slot.id
        .clone()
        .ok_or_else(|| AppError::internal("Slot record missing id"))
}

fn require_id(booking: &Booking) -> AppResult<&RecordId> {
    booking
        .id
        .as_ref()
        .ok_or_else(|| AppError::internal("Booking record missing id"))
}

fn require_owner(booking: &Booking, student_id: &str) -> AppResult<()> {
    if booking.student_id != student_id {
        return Err(AppError::not_booking_owner());
    }
    Ok(())
}

/// Diagnostic item list for modification history, e.g. "2x Pasta, 1x Juice"
fn describe_items(items: &[BookingItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.name))
        .collect::<Vec<_>>()
        .join(", ")
}
