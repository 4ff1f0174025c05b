//! Queue API module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_staff;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/queue", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{slot_id}", get(handler::list))
        .route("/{slot_id}/call-next", post(handler::call_next))
        .layer(middleware::from_fn(require_staff))
}
