//! Queue API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::Booking;
use crate::utils::AppResult;

/// Active queue of a slot ordered by position
pub async fn list(
    State(state): State<ServerState>,
    Path(slot_id): Path<String>,
) -> AppResult<Json<Vec<Booking>>> {
    let queue = state.booking_manager.queue_for_slot(&slot_id).await?;
    Ok(Json(queue))
}

/// Call the next pending booking and mark it serving
pub async fn call_next(
    State(state): State<ServerState>,
    Path(slot_id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.call_next(&slot_id).await?;
    Ok(Json(booking))
}
