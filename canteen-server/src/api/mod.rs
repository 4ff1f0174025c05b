//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health probe
//! - [`bookings`] - student booking lifecycle + staff transitions
//! - [`queue`] - staff queue listing and call-next
//! - [`slots`] - slot management
//! - [`menu`] - menu item management
//! - [`crowd`] - crowd level dashboard

pub mod bookings;
pub mod crowd;
pub mod health;
pub mod menu;
pub mod queue;
pub mod slots;

use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_identity;
use crate::core::ServerState;

/// Assemble the full application router
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(bookings::router())
        .merge(queue::router())
        .merge(slots::router())
        .merge(menu::router())
        .merge(crowd::router())
        .layer(middleware::from_fn(require_identity))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
