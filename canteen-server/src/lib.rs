//! Canteen Server - campus cafeteria pre-order service
//!
//! # Architecture overview
//!
//! Students book meals into serving slots and receive a daily token number
//! plus a queue position; staff call and serve the queue; a background
//! monitor samples per-slot occupancy for the crowd dashboard.
//!
//! # Module structure
//!
//! ```text
//! canteen-server/src/
//! ├── core/        # config, state, server lifecycle
//! ├── auth/        # gateway identity, role gates
//! ├── db/          # SurrealDB models and repositories
//! ├── queue/       # tokens, positions, estimates, per-slot locks
//! ├── bookings/    # booking lifecycle controller
//! ├── services/    # crowd monitor
//! ├── api/         # HTTP routes and handlers
//! └── utils/       # logging, time helpers
//! ```

pub mod api;
pub mod auth;
pub mod bookings;
pub mod core;
pub mod db;
pub mod queue;
pub mod services;
pub mod utils;

// Re-export common types
pub use auth::CurrentUser;
pub use bookings::BookingManager;
pub use core::{Config, Server, ServerState};
pub use services::CrowdMonitor;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up the process environment: dotenv and logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), None);
}

pub fn print_banner() {
    println!(
        r#"
   ______            __
  / ____/___ _____  / /____  ___  ____
 / /   / __ `/ __ \/ __/ _ \/ _ \/ __ \
/ /___/ /_/ / / / / /_/  __/  __/ / / /
\____/\__,_/_/ /_/\__/\___/\___/_/ /_/
    "#
    );
}
