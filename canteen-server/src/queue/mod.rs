//! Queue core
//!
//! The sequencing heart of the platform:
//!
//! - [`TokenAllocator`]: per-slot, per-day sequential token codes
//! - [`QueuePositionManager`]: gap-free queue positions and their repair
//!   strategies after cancellation and serve-completion
//! - [`estimator`]: static and historical wait-time estimates
//! - [`SlotLocks`]: per-slot critical sections serializing every mutation
//!   of a slot's active-booking set
//!
//! Invariant owned by this module: for any slot, the queue positions of its
//! PENDING/SERVING bookings form exactly {1..N} between operations.

pub mod estimator;
pub mod positions;
pub mod slot_locks;
pub mod token;

pub use estimator::{DEFAULT_WAIT_MINUTES, SERVICE_MINUTES_PER_TOKEN, WaitTimeEstimator};
pub use positions::QueuePositionManager;
pub use slot_locks::SlotLocks;
pub use token::TokenAllocator;
