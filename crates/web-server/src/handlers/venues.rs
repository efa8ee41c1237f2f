use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use core_types::{NamedRecord, Venue, VenueArea, VenueDetail, group_by_area};
use forms::{FormOptions, VenueForm};

use super::{EditForm, Flash, SearchForm, SearchResults};
use crate::{
    AppState,
    error::AppError,
    extract::{FormBody, RecordId},
};

/// # GET /venues
/// All venues grouped by area, each with its number of upcoming shows.
pub async fn list_venues(State(state): State<Arc<AppState>>) -> Result<Json<Vec<VenueArea>>, AppError> {
    let venues = state.db_repo.get_venue_locations().await?;
    let show_times = state.db_repo.get_venue_show_times().await?;
    Ok(Json(group_by_area(venues, &show_times, Utc::now())))
}

/// # POST /venues/search
pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody<SearchForm>,
) -> Result<Json<SearchResults<NamedRecord>>, AppError> {
    let venues = state.db_repo.search_venues(&form.search_term).await?;
    Ok(Json(SearchResults::new(form.search_term, venues)))
}

/// # GET /venues/:id
pub async fn show_venue(
    RecordId(venue_id): RecordId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<VenueDetail>, AppError> {
    let venue = state.db_repo.get_venue(venue_id).await?;
    let shows = state.db_repo.get_venue_shows(venue_id).await?;
    Ok(Json(VenueDetail::new(venue, shows, Utc::now())))
}

/// # GET /venues/create
pub async fn create_venue_form() -> Json<FormOptions> {
    Json(FormOptions::default())
}

/// # POST /venues/create
pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody<VenueForm>,
) -> Result<(StatusCode, Json<Flash<Venue>>), AppError> {
    let new_venue = form.into_new_venue()?;
    let venue = state.db_repo.create_venue(&new_venue).await.map_err(AppError::persistence(format!(
        "An error occurred. Venue {} could not be listed.",
        new_venue.name
    )))?;

    let message = format!("Venue {} was successfully listed!", venue.name);
    Ok((StatusCode::CREATED, Json(Flash::new(message, venue))))
}

/// # GET /venues/Delete_by_ID/:id
pub async fn delete_venue(
    RecordId(venue_id): RecordId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Flash<Venue>>, AppError> {
    let venue = state
        .db_repo
        .delete_venue(venue_id)
        .await
        .map_err(AppError::persistence("An error occurred. Venue could not be deleted."))?;

    let message = format!("Venue: {} was successfully deleted.", venue.name);
    Ok(Json(Flash::new(message, venue)))
}

/// # GET /venues/Edite_by_ID/:id
pub async fn edit_venue_form(
    RecordId(venue_id): RecordId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EditForm<Venue>>, AppError> {
    let venue = state.db_repo.get_venue(venue_id).await?;
    Ok(Json(EditForm {
        record: venue,
        options: FormOptions::default(),
    }))
}

/// # POST /venues/Edite_by_ID/:id
pub async fn edit_venue(
    RecordId(venue_id): RecordId,
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody<VenueForm>,
) -> Result<Json<Flash<Venue>>, AppError> {
    let changes = form.into_new_venue()?;
    let venue = state
        .db_repo
        .update_venue(venue_id, &changes)
        .await
        .map_err(AppError::persistence("Something went wrong. Please try again."))?;

    Ok(Json(Flash::new("The venue has been edited successfully", venue)))
}
