use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use core_types::{Artist, ArtistDetail, NamedRecord};
use forms::{ArtistForm, FormOptions};

use super::{EditForm, Flash, SearchForm, SearchResults};
use crate::{
    AppState,
    error::AppError,
    extract::{FormBody, RecordId},
};

/// # GET /artists
pub async fn list_artists(State(state): State<Arc<AppState>>) -> Result<Json<Vec<NamedRecord>>, AppError> {
    let artists = state.db_repo.get_artists().await?;
    Ok(Json(artists))
}

/// # POST /artists/search
pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody<SearchForm>,
) -> Result<Json<SearchResults<NamedRecord>>, AppError> {
    let artists = state.db_repo.search_artists(&form.search_term).await?;
    Ok(Json(SearchResults::new(form.search_term, artists)))
}

/// # GET /artists/:id
pub async fn show_artist(
    RecordId(artist_id): RecordId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ArtistDetail>, AppError> {
    let artist = state.db_repo.get_artist(artist_id).await?;
    let shows = state.db_repo.get_artist_shows(artist_id).await?;
    Ok(Json(ArtistDetail::new(artist, shows, Utc::now())))
}

/// # GET /artists/create
pub async fn create_artist_form() -> Json<FormOptions> {
    Json(FormOptions::default())
}

/// # POST /artists/create
pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody<ArtistForm>,
) -> Result<(StatusCode, Json<Flash<Artist>>), AppError> {
    let new_artist = form.into_new_artist()?;
    let artist = state.db_repo.create_artist(&new_artist).await.map_err(AppError::persistence(format!(
        "An error occurred. Artist {} could not be listed.",
        new_artist.name
    )))?;

    let message = format!("Artist {} was successfully listed!", artist.name);
    Ok((StatusCode::CREATED, Json(Flash::new(message, artist))))
}

/// # GET /artists/Delete_by_ID/:id
/// Refused with 409 while shows still reference the artist.
pub async fn delete_artist(
    RecordId(artist_id): RecordId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Flash<Artist>>, AppError> {
    let artist = state
        .db_repo
        .delete_artist(artist_id)
        .await
        .map_err(AppError::persistence("An error occurred. Artist could not be deleted."))?;

    let message = format!("Artist: {} was successfully deleted.", artist.name);
    Ok(Json(Flash::new(message, artist)))
}

/// # GET /artists/Edite_by_ID/:id
pub async fn edit_artist_form(
    RecordId(artist_id): RecordId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EditForm<Artist>>, AppError> {
    let artist = state.db_repo.get_artist(artist_id).await?;
    Ok(Json(EditForm {
        record: artist,
        options: FormOptions::default(),
    }))
}

/// # POST /artists/Edite_by_ID/:id
pub async fn edit_artist(
    RecordId(artist_id): RecordId,
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody<ArtistForm>,
) -> Result<Json<Flash<Artist>>, AppError> {
    let changes = form.into_new_artist()?;
    let artist = state
        .db_repo
        .update_artist(artist_id, &changes)
        .await
        .map_err(AppError::persistence("Something went wrong. Please try again."))?;

    Ok(Json(Flash::new("The artist has been edited successfully", artist)))
}
