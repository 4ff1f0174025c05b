//! Crowd API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/crowd", routes())
}

fn routes() -> Router<ServerState> {
    // Any authenticated caller can read crowd levels
    Router::new()
        .route("/", get(handler::list))
        .route("/{slot_id}", get(handler::get_by_slot))
}
