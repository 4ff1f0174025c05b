//! Slot API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{Slot, SlotCreate, SlotUpdate};
use crate::db::repository::SlotRepository;
use crate::utils::{AppError, AppResult, ErrorCode};

/// List all active slots
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Slot>>> {
    let repo = SlotRepository::new(state.db.clone());
    let slots = repo.find_all().await?;
    Ok(Json(slots))
}

/// Get slot by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Slot>> {
    let repo = SlotRepository::new(state.db.clone());
    let slot = repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::SlotNotFound, format!("Slot {} not found", id))
    })?;
    Ok(Json(slot))
}

/// Create a slot
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SlotCreate>,
) -> AppResult<Json<Slot>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = SlotRepository::new(state.db.clone());
    let slot = repo.create(payload).await?;

    tracing::info!(slot = %slot.name, "Slot created");
    Ok(Json(slot))
}

/// Update a slot
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SlotUpdate>,
) -> AppResult<Json<Slot>> {
    let repo = SlotRepository::new(state.db.clone());
    let slot = repo.update(&id, payload).await?;
    Ok(Json(slot))
}

/// Delete a slot
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<shared::ApiResponse<()>>> {
    let repo = SlotRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(shared::ApiResponse::ok()))
}
