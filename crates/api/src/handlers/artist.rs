//! Handlers for the `/artists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;
use encore_core::choices::FormChoices;
use encore_core::error::CoreError;
use encore_core::forms::ArtistForm;
use encore_core::schedule::partition_by_time;
use encore_core::types::DbId;
use encore_db::models::artist::{Artist, ArtistDetail, CreateArtist, UpdateArtist};
use encore_db::models::listing::ListingSummary;
use encore_db::repositories::{ArtistRepo, ShowRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::RecordId;
use crate::mutation::{self, EditResponse, MutationResponse};
use crate::query::SearchForm;
use crate::response::{DataResponse, EditPage, FormPage, SearchPage};
use crate::state::AppState;

const ENTITY: &str = "Artist";

async fn find_artist(pool: &PgPool, id: DbId) -> AppResult<Artist> {
    ArtistRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}

/// GET /artists
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ListingSummary>>>> {
    let artists = ArtistRepo::list(&state.pool, Utc::now()).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> AppResult<Json<DataResponse<SearchPage<ListingSummary>>>> {
    let Form(form) = form.map_err(|rejection| CoreError::Validation(rejection.to_string()))?;
    let matches = ArtistRepo::search_by_name(&state.pool, &form.search_term, Utc::now()).await?;
    tracing::debug!(term = %form.search_term, count = matches.len(), "Artist search");
    Ok(Json(DataResponse {
        data: SearchPage::new(form.search_term, matches),
    }))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<DataResponse<ArtistDetail>>> {
    let artist = find_artist(&state.pool, id).await?;
    let shows = ShowRepo::list_for_artist(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: ArtistDetail {
            artist,
            schedule: partition_by_time(shows, Utc::now()),
        },
    }))
}

/// GET /artists/create
pub async fn create_form() -> Json<DataResponse<FormPage<ArtistForm>>> {
    Json(DataResponse {
        data: FormPage::new(ArtistForm::default()),
    })
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<ArtistForm>, FormRejection>,
) -> MutationResponse<Artist> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return mutation::invalid(ENTITY, None, &rejection),
    };

    if let Err(errors) = form.validate() {
        return mutation::invalid(ENTITY, None, &errors);
    }

    match ArtistRepo::create(&state.pool, &CreateArtist::from(&form)).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
            let message = mutation::listed_message(ENTITY, Some(&artist.name));
            mutation::saved(StatusCode::CREATED, message, artist)
        }
        Err(err) => mutation::failed(ENTITY, Some(&form.name), &err),
    }
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<DataResponse<EditPage<ArtistForm, Artist>>>> {
    let artist = find_artist(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: EditPage {
            form: ArtistForm::from(&artist),
            record: artist,
            choices: FormChoices::default(),
        },
    }))
}

/// POST /artists/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    form: Result<Form<ArtistForm>, FormRejection>,
) -> AppResult<EditResponse<Artist>> {
    find_artist(&state.pool, id).await?;

    let outcome = match form {
        Ok(Form(form)) => save_edit(&state.pool, id, &form).await?,
        Err(rejection) => mutation::invalid(ENTITY, None, &rejection),
    };

    Ok(mutation::at_location(outcome, format!("/artists/{id}")))
}

/// Validate and write an edit that bound cleanly.
async fn save_edit(
    pool: &PgPool,
    id: DbId,
    form: &ArtistForm,
) -> AppResult<MutationResponse<Artist>> {
    if let Err(errors) = form.validate() {
        return Ok(mutation::invalid(ENTITY, Some(&form.name), &errors));
    }

    match ArtistRepo::update(pool, id, &UpdateArtist::from(form)).await {
        Ok(Some(record)) => {
            tracing::info!(artist_id = id, "Artist updated");
            let message = mutation::updated_message(ENTITY, Some(&record.name));
            Ok(mutation::saved(StatusCode::OK, message, record))
        }
        // Deleted between the lookup and the write.
        Ok(None) => Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id })),
        Err(err) => Ok(mutation::failed(ENTITY, Some(&form.name), &err)),
    }
}
