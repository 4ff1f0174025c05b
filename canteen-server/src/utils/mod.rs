//! Utility module: common helpers and types
//!
//! # Contents
//!
//! - [`AppError`] / [`ApiResponse`]: unified error types (from `shared::error`)
//! - [`logger`]: tracing setup
//! - [`time`]: business-timezone date helpers

pub mod logger;
pub mod time;

// Re-export error types from shared so handlers import from one place
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
