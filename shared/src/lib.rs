//! Shared types for the Canteen platform
//!
//! Common types used across crates: error codes and the unified
//! [`error::AppError`] / [`error::ApiResponse`] system, caller roles,
//! and small utility helpers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::Role;
pub use serde::{Deserialize, Serialize};
