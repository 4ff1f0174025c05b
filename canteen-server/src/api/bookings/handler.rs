//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Booking, BookingCreate, BookingModifyItems};
use crate::utils::AppResult;

/// Create a booking for the calling student
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .booking_manager
        .create_booking(&user.id, payload)
        .await?;
    Ok(Json(booking))
}

/// List the caller's active bookings, most recent first
pub async fn mine(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.booking_manager.my_active_bookings(&user.id).await?;
    Ok(Json(bookings))
}

/// Replace a pending booking's items (owner only)
pub async fn modify_items(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<BookingModifyItems>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .booking_manager
        .modify_items(&user.id, &id, payload)
        .await?;
    Ok(Json(booking))
}

/// Cancel a pending booking (owner only)
pub async fn cancel(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.cancel(&user.id, &id).await?;
    Ok(Json(booking))
}

/// Staff: mark a specific pending booking as serving
pub async fn mark_serving(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.mark_serving(&id).await?;
    Ok(Json(booking))
}

/// Staff: mark a serving booking as served
pub async fn mark_served(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.booking_manager.mark_served(&id).await?;
    Ok(Json(booking))
}
