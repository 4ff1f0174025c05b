//! Wait-Time Estimator
//!
//! Two distinct estimates:
//!
//! - [`estimate_at_booking`]: static quote stored on the booking at
//!   creation, `position × 5 min`. Never recomputed as the queue moves.
//! - [`WaitTimeEstimator::estimate_from_history`]: live dashboard figure,
//!   the average serve latency over a lookback window.

use surrealdb::RecordId;

use crate::db::repository::BookingRepository;
use crate::utils::AppResult;

/// Fixed per-token service time used for the static quote
pub const SERVICE_MINUTES_PER_TOKEN: i32 = 5;

/// Fallback when no booking was served within the lookback window
pub const DEFAULT_WAIT_MINUTES: i32 = 5;

/// Default lookback window for the historical estimate
pub const DEFAULT_LOOKBACK_MINUTES: i64 = 60;

/// Static wait quote for a freshly assigned queue position
pub fn estimate_at_booking(queue_position: i32) -> i32 {
    queue_position * SERVICE_MINUTES_PER_TOKEN
}

/// Historical serve-latency estimator
#[derive(Clone)]
pub struct WaitTimeEstimator {
    bookings: BookingRepository,
}

impl WaitTimeEstimator {
    pub fn new(bookings: BookingRepository) -> Self {
        Self { bookings }
    }

    /// Average of (served_at − booked_at) in minutes over bookings of
    /// `slot` served within the last `lookback_minutes`
    ///
    /// Falls back to [`DEFAULT_WAIT_MINUTES`] when nothing was served in
    /// the window.
    pub async fn estimate_from_history(
        &self,
        slot: &RecordId,
        lookback_minutes: i64,
    ) -> AppResult<i32> {
        let since = shared::util::now_millis() - lookback_minutes * 60_000;
        let served = self.bookings.served_since(slot, since).await?;

        let latencies: Vec<f64> = served
            .iter()
            .filter_map(|b| b.served_at.map(|at| (at - b.booked_at) as f64 / 60_000.0))
            .filter(|mins| *mins >= 0.0)
            .collect();

        if latencies.is_empty() {
            return Ok(DEFAULT_WAIT_MINUTES);
        }

        let avg = latencies.iter().sum::<f64>() / latencies.len() as f64;
        Ok(avg.round() as i32)
    }
}
