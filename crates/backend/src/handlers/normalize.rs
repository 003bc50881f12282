use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::shared::gateway::{self, ApiError, AppState, NormalizeResponse};

/// POST /api/normalize/:kind/:direction
pub async fn normalize(
    State(state): State<Arc<AppState>>,
    Path((kind, direction)): Path<(String, String)>,
    Json(payload): Json<Value>,
) -> Result<Json<NormalizeResponse>, (StatusCode, Json<ApiError>)> {
    let kind = gateway::parse_kind(&kind)?;
    let direction = gateway::parse_direction(&direction)?;
    let response = gateway::normalize(kind, direction, &payload, state.policy)?;
    Ok(Json(response))
}
