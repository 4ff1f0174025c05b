//! Booking API module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use crate::auth::require_staff;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    // Ownership is enforced by the manager, so no role gate here
    let student_routes = Router::new()
        .route("/", post(handler::create))
        .route("/mine", get(handler::mine))
        .route("/{id}/items", put(handler::modify_items))
        .route("/{id}/cancel", post(handler::cancel));

    let staff_routes = Router::new()
        .route("/{id}/serving", post(handler::mark_serving))
        .route("/{id}/served", post(handler::mark_served))
        .layer(middleware::from_fn(require_staff));

    student_routes.merge(staff_routes)
}
