use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use core_types::{Show, ShowListing};
use forms::{ShowForm, ShowFormDefaults};

use super::Flash;
use crate::{AppState, error::AppError, extract::FormBody};

/// # GET /shows
/// Every show with its artist and venue, oldest listing first.
pub async fn list_shows(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ShowListing>>, AppError> {
    let shows = state.db_repo.get_shows().await?;
    Ok(Json(shows))
}

/// # GET /shows/create
pub async fn create_show_form() -> Json<ShowFormDefaults> {
    Json(ShowFormDefaults::at(Utc::now()))
}

/// # POST /shows/create
/// Unknown artist or venue ids come back as 400 and nothing is stored.
pub async fn create_show(
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody<ShowForm>,
) -> Result<(StatusCode, Json<Flash<Show>>), AppError> {
    let new_show = form.into_new_show()?;
    let show = state
        .db_repo
        .create_show(&new_show)
        .await
        .map_err(AppError::persistence("An error occurred. Show could not be listed."))?;

    Ok((StatusCode::CREATED, Json(Flash::new("Show was successfully listed!", show))))
}
