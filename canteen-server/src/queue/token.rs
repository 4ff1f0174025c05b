//! Token Number Allocator
//!
//! Tokens are the human-facing code printed on the student's screen and
//! called out by staff: uppercase first letter of the slot name followed by
//! a zero-padded daily sequence number, e.g. the 4th Lunch booking of the
//! day gets "L004".
//!
//! The sequence restarts at local midnight of the business timezone. Slot
//! names come from a fixed enumeration (Breakfast/Lunch/Snacks/Dinner)
//! whose first letters must stay distinct; the scheme would collide
//! otherwise. Callers must hold the slot's lock while allocating, or two
//! racing bookings can count the same prefix.

use chrono::NaiveDate;
use chrono_tz::Tz;
use surrealdb::RecordId;

use crate::db::repository::BookingRepository;
use crate::utils::{AppError, AppResult, time};

/// Format a token code from a slot name and 1-based daily sequence number
pub fn token_code(slot_name: &str, sequence: i64) -> AppResult<String> {
    let prefix = slot_name
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .ok_or_else(|| AppError::validation("Slot name must not be empty"))?;
    Ok(format!("{}{:03}", prefix, sequence))
}

/// Allocates per-slot, per-day sequential token codes
#[derive(Clone)]
pub struct TokenAllocator {
    bookings: BookingRepository,
    tz: Tz,
}

impl TokenAllocator {
    pub fn new(bookings: BookingRepository, tz: Tz) -> Self {
        Self { bookings, tz }
    }

    /// Allocate the next token for `slot` on the calendar day of `as_of`
    ///
    /// Counts every booking created since local midnight regardless of
    /// status: cancelled bookings keep their token, so numbers are never
    /// reused within a day.
    pub async fn allocate(
        &self,
        slot: &RecordId,
        slot_name: &str,
        as_of: NaiveDate,
    ) -> AppResult<String> {
        let day_start = time::day_start_millis(as_of, self.tz);
        let count = self.bookings.count_booked_since(slot, day_start).await?;
        token_code(slot_name, count + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_code_format() {
        assert_eq!(token_code("Lunch", 4).unwrap(), "L004");
        assert_eq!(token_code("Breakfast", 1).unwrap(), "B001");
        assert_eq!(token_code("Dinner", 14).unwrap(), "D014");
        assert_eq!(token_code("Snacks", 999).unwrap(), "S999");
    }

    #[test]
    fn test_token_code_uppercases_prefix() {
        assert_eq!(token_code("lunch", 1).unwrap(), "L001");
    }

    #[test]
    fn test_token_code_grows_past_three_digits() {
        // Width 3 is a minimum, not a cap
        assert_eq!(token_code("Lunch", 1000).unwrap(), "L1000");
    }

    #[test]
    fn test_token_code_empty_name_rejected() {
        assert!(token_code("", 1).is_err());
    }
}
