use std::sync::Arc;

use axum::{Json, extract::State};
use core_types::NamedRecord;
use serde::Serialize;

use crate::{AppState, error::AppError};

/// How many recent listings the home page shows per kind.
const RECENT_LISTINGS: i64 = 10;

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub recent_venues: Vec<NamedRecord>,
    pub recent_artists: Vec<NamedRecord>,
}

/// # GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Json<HomePage>, AppError> {
    let recent_venues = state.db_repo.get_recent_venues(RECENT_LISTINGS).await?;
    let recent_artists = state.db_repo.get_recent_artists(RECENT_LISTINGS).await?;
    Ok(Json(HomePage {
        recent_venues,
        recent_artists,
    }))
}

/// # GET /api/health
pub async fn health() -> &'static str {
    "OK"
}

/// Fallback for every unmatched route.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
