//! Crowd Monitor
//!
//! Timer-driven sampler: every tick it counts active bookings per slot,
//! derives occupancy rate and crowd level, computes the historical wait
//! estimate, and appends one immutable [`CrowdSnapshot`] per slot.
//!
//! The monitor only reads booking state and appends its own records, so it
//! never takes the per-slot locks. A failure on one slot is logged and the
//! tick continues with the remaining slots.
//!
//! Lifecycle is explicit and idempotent: `start()` on a running monitor and
//! `stop()` on a stopped one are no-ops.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use parking_lot::Mutex;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::db::models::{CrowdLevel, CrowdSnapshot, Slot};
use crate::db::repository::{BookingRepository, CrowdSnapshotRepository, SlotRepository};
use crate::queue::WaitTimeEstimator;
use crate::queue::estimator::DEFAULT_LOOKBACK_MINUTES;
use crate::utils::{AppError, AppResult, ErrorCode};

struct RunningState {
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

struct MonitorInner {
    slots: SlotRepository,
    bookings: BookingRepository,
    snapshots: CrowdSnapshotRepository,
    estimator: WaitTimeEstimator,
    interval: Duration,
    state: Mutex<Option<RunningState>>,
}

/// Occupancy snapshot service
#[derive(Clone)]
pub struct CrowdMonitor {
    inner: Arc<MonitorInner>,
}

impl CrowdMonitor {
    pub fn new(db: Surreal<Db>, interval: Duration) -> Self {
        let bookings = BookingRepository::new(db.clone());
        Self {
            inner: Arc::new(MonitorInner {
                slots: SlotRepository::new(db.clone()),
                snapshots: CrowdSnapshotRepository::new(db),
                estimator: WaitTimeEstimator::new(bookings.clone()),
                bookings,
                interval,
                state: Mutex::new(None),
            }),
        }
    }

    /// Start the sampling loop. No-op when already running.
    pub fn start(&self) {
        let mut state = self.inner.state.lock();
        if state.is_some() {
            tracing::debug!("Crowd monitor already running");
            return;
        }

        let shutdown = CancellationToken::new();
        let monitor = self.clone();
        let token = shutdown.clone();
        let interval = self.inner.interval;

        let sampling_loop = async move {
            tracing::info!(interval_secs = interval.as_secs(), "Crowd monitor started");
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        monitor.tick().await;
                    }
                    _ = token.cancelled() => {
                        tracing::info!("Crowd monitor received shutdown signal");
                        return;
                    }
                }
            }
        };

        // Capture panics so a sampling bug is logged instead of silently
        // killing the loop
        let handle = tokio::spawn(async move {
            if let Err(panic_info) = AssertUnwindSafe(sampling_loop).catch_unwind().await {
                let panic_msg: String = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                tracing::error!(panic = %panic_msg, "Crowd monitor panicked!");
            }
        });

        *state = Some(RunningState { shutdown, handle });
    }

    /// Stop the sampling loop and wait for it to exit. No-op when stopped.
    pub async fn stop(&self) {
        let running = self.inner.state.lock().take();
        let Some(running) = running else {
            tracing::debug!("Crowd monitor already stopped");
            return;
        };

        running.shutdown.cancel();
        if let Err(e) = running.handle.await
            && !e.is_cancelled()
        {
            tracing::error!(error = ?e, "Crowd monitor task panicked");
        }
        tracing::info!("Crowd monitor stopped");
    }

    pub fn is_running(&self) -> bool {
        self.inner.state.lock().is_some()
    }

    /// One sampling pass over all active slots
    ///
    /// A per-slot failure is logged and skipped; the remaining slots are
    /// still sampled.
    pub async fn tick(&self) {
        let slots = match self.inner.slots.find_all().await {
            Ok(slots) => slots,
            Err(e) => {
                tracing::error!(error = %e, "Crowd monitor could not list slots");
                return;
            }
        };

        for slot in slots {
            let name = slot.name.clone();
            match self.sample_and_persist(&slot).await {
                Ok(snapshot) => {
                    tracing::debug!(
                        slot = %name,
                        occupancy = snapshot.occupancy_rate,
                        level = snapshot.crowd_level.as_str(),
                        "Crowd snapshot taken"
                    );
                }
                Err(e) => {
                    tracing::warn!(slot = %name, error = %e, "Crowd snapshot failed, continuing");
                }
            }
        }
    }

    async fn sample_and_persist(&self, slot: &Slot) -> AppResult<CrowdSnapshot> {
        let snapshot = self.compute_snapshot(slot).await?;
        Ok(self.inner.snapshots.append(snapshot).await?)
    }

    /// Compute an occupancy snapshot for a slot without persisting it
    async fn compute_snapshot(&self, slot: &Slot) -> AppResult<CrowdSnapshot> {
        let slot_id = slot
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Slot record missing id"))?;

        let active = self.inner.bookings.active_count(&slot_id).await? as i32;
        let occupancy_rate = if slot.capacity > 0 {
            ((100.0 * active as f64) / slot.capacity as f64).round() as i32
        } else {
            0
        };
        let avg_wait = self
            .inner
            .estimator
            .estimate_from_history(&slot_id, DEFAULT_LOOKBACK_MINUTES)
            .await?;

        Ok(CrowdSnapshot {
            id: None,
            slot: slot_id,
            slot_name: slot.name.clone(),
            active_bookings: active,
            total_capacity: slot.capacity,
            occupancy_rate,
            crowd_level: CrowdLevel::from_occupancy(occupancy_rate),
            avg_wait_time: avg_wait,
            timestamp: shared::util::now_millis(),
        })
    }

    // ========================================================================
    // Read path
    // ========================================================================

    /// Latest snapshot for a slot
    ///
    /// Falls back to an on-the-fly (unpersisted) sample when the monitor has
    /// not written one yet.
    pub async fn latest(&self, slot_id: &str) -> AppResult<CrowdSnapshot> {
        let slot = self
            .inner
            .slots
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::SlotNotFound,
                    format!("Slot {} not found", slot_id),
                )
            })?;
        let slot_rec = slot
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Slot record missing id"))?;

        if let Some(snapshot) = self.inner.snapshots.latest(&slot_rec).await? {
            return Ok(snapshot);
        }
        self.compute_snapshot(&slot).await
    }

    /// Latest snapshot for every active slot
    pub async fn latest_all(&self) -> AppResult<Vec<CrowdSnapshot>> {
        let slots = self.inner.slots.find_all().await?;
        let mut result = Vec::with_capacity(slots.len());
        for slot in slots {
            let Some(slot_rec) = slot.id.clone() else {
                continue;
            };
            match self.inner.snapshots.latest(&slot_rec).await? {
                Some(snapshot) => result.push(snapshot),
                None => result.push(self.compute_snapshot(&slot).await?),
            }
        }
        Ok(result)
    }
}
