//! Crowd API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::CrowdSnapshot;
use crate::utils::AppResult;

/// Latest snapshot for every active slot
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CrowdSnapshot>>> {
    let snapshots = state.crowd_monitor.latest_all().await?;
    Ok(Json(snapshots))
}

/// Latest snapshot for one slot
pub async fn get_by_slot(
    State(state): State<ServerState>,
    Path(slot_id): Path<String>,
) -> AppResult<Json<CrowdSnapshot>> {
    let snapshot = state.crowd_monitor.latest(&slot_id).await?;
    Ok(Json(snapshot))
}
