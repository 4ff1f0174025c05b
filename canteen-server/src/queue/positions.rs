//! Queue Position Manager
//!
//! Assigns and repairs the gap-free queue positions of a slot's active
//! (PENDING/SERVING) bookings. Two distinct repair strategies:
//!
//! - [`close_gap`](QueuePositionManager::close_gap): O(affected) decrement
//!   used after a cancellation, whose position may sit anywhere in the set.
//! - [`renumber_after_serve`](QueuePositionManager::renumber_after_serve):
//!   full reload-and-reassign used when the booking being served leaves the
//!   set. A plain decrement above position 1 would usually do the same, but
//!   the full reload does not assume the serving booking held position 1.
//!
//! Every method must run under the slot's lock (see
//! [`SlotLocks`](super::SlotLocks)).

use surrealdb::RecordId;

use crate::db::repository::BookingRepository;
use crate::utils::AppResult;

#[derive(Clone)]
pub struct QueuePositionManager {
    bookings: BookingRepository,
}

impl QueuePositionManager {
    pub fn new(bookings: BookingRepository) -> Self {
        Self { bookings }
    }

    /// Next free position: 1 + max over the active set, or 1 when empty
    pub async fn next_position(&self, slot: &RecordId) -> AppResult<i32> {
        let max = self.bookings.max_active_position(slot).await?;
        Ok(max.unwrap_or(0) + 1)
    }

    /// Close the gap left by a cancelled booking
    ///
    /// Decrements the position of every active booking above
    /// `removed_position`; bookings at or below it are untouched.
    pub async fn close_gap(&self, slot: &RecordId, removed_position: i32) -> AppResult<()> {
        self.bookings
            .shift_positions_above(slot, removed_position)
            .await?;
        Ok(())
    }

    /// Compact the pending queue after a serve-completion
    ///
    /// Reloads all PENDING bookings ordered by their current position and
    /// reassigns 1..N in that order. Positions are rewritten even where
    /// unchanged; the reload is the source of truth, not the old numbers.
    pub async fn renumber_after_serve(&self, slot: &RecordId) -> AppResult<()> {
        let pending = self.bookings.pending_ordered(slot).await?;
        for (index, booking) in pending.iter().enumerate() {
            let position = index as i32 + 1;
            if let Some(id) = &booking.id {
                self.bookings.set_position(id, position).await?;
            }
        }
        Ok(())
    }
}
