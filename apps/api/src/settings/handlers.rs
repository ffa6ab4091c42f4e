//! Axum route handlers for the settings endpoints.

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::settings::store::{all_settings, upsert_settings};
use crate::state::AppState;

/// GET /api/settings
///
/// Returns every settings row as one flat `{key: value}` object.
/// Values are returned as stored, including API keys, which is what the
/// admin settings page edits.
pub async fn handle_get_settings(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, String>>, AppError> {
    let settings = all_settings(&state.db).await?;
    Ok(Json(settings))
}

/// POST /api/settings
///
/// Upserts every pair in the request body. Takes effect on the next analysis
/// call; snapshots already loaded keep their values.
pub async fn handle_save_settings(
    State(state): State<AppState>,
    Json(settings): Json<HashMap<String, String>>,
) -> Result<Json<Value>, AppError> {
    upsert_settings(&state.db, &settings).await?;
    tracing::info!("Saved {} setting(s)", settings.len());
    Ok(Json(json!({ "message": "Settings saved successfully" })))
}
