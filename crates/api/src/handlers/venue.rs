//! Handlers for the `/venues` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;
use encore_core::choices::FormChoices;
use encore_core::error::CoreError;
use encore_core::forms::VenueForm;
use encore_core::location::{group_by_location, Area};
use encore_core::schedule::partition_by_time;
use encore_core::types::DbId;
use encore_db::models::listing::ListingSummary;
use encore_db::models::venue::{CreateVenue, UpdateVenue, Venue, VenueDetail, VenueSummary};
use encore_db::repositories::{ShowRepo, VenueRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::RecordId;
use crate::mutation::{self, EditResponse, MutationResponse};
use crate::query::SearchForm;
use crate::response::{DataResponse, EditPage, FormPage, SearchPage};
use crate::state::AppState;

const ENTITY: &str = "Venue";

async fn find_venue(pool: &PgPool, id: DbId) -> AppResult<Venue> {
    VenueRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}

/// GET /venues
///
/// All venues grouped by city and state.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Area<VenueSummary>>>>> {
    let venues = VenueRepo::list_summaries(&state.pool, Utc::now()).await?;
    Ok(Json(DataResponse {
        data: group_by_location(venues),
    }))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> AppResult<Json<DataResponse<SearchPage<ListingSummary>>>> {
    let Form(form) = form.map_err(|rejection| CoreError::Validation(rejection.to_string()))?;
    let matches = VenueRepo::search_by_name(&state.pool, &form.search_term, Utc::now()).await?;
    tracing::debug!(term = %form.search_term, count = matches.len(), "Venue search");
    Ok(Json(DataResponse {
        data: SearchPage::new(form.search_term, matches),
    }))
}

/// GET /venues/{id}
///
/// The venue with its shows split into upcoming and past.
pub async fn get_by_id(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<DataResponse<VenueDetail>>> {
    let venue = find_venue(&state.pool, id).await?;
    let shows = ShowRepo::list_for_venue(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: VenueDetail {
            venue,
            schedule: partition_by_time(shows, Utc::now()),
        },
    }))
}

/// GET /venues/create
pub async fn create_form() -> Json<DataResponse<FormPage<VenueForm>>> {
    Json(DataResponse {
        data: FormPage::new(VenueForm::default()),
    })
}

/// POST /venues/create
pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<VenueForm>, FormRejection>,
) -> MutationResponse<Venue> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return mutation::invalid(ENTITY, None, &rejection),
    };

    if let Err(errors) = form.validate() {
        return mutation::invalid(ENTITY, None, &errors);
    }

    match VenueRepo::create(&state.pool, &CreateVenue::from(&form)).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");
            let message = mutation::listed_message(ENTITY, Some(&venue.name));
            mutation::saved(StatusCode::CREATED, message, venue)
        }
        Err(err) => mutation::failed(ENTITY, Some(&form.name), &err),
    }
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<DataResponse<EditPage<VenueForm, Venue>>>> {
    let venue = find_venue(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: EditPage {
            form: VenueForm::from(&venue),
            record: venue,
            choices: FormChoices::default(),
        },
    }))
}

/// POST /venues/{id}/edit
///
/// Overwrites every field. Every outcome points back at `/venues/{id}`.
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    form: Result<Form<VenueForm>, FormRejection>,
) -> AppResult<EditResponse<Venue>> {
    find_venue(&state.pool, id).await?;

    let outcome = match form {
        Ok(Form(form)) => save_edit(&state.pool, id, &form).await?,
        Err(rejection) => mutation::invalid(ENTITY, None, &rejection),
    };

    Ok(mutation::at_location(outcome, format!("/venues/{id}")))
}

/// Validate and write an edit that bound cleanly.
async fn save_edit(
    pool: &PgPool,
    id: DbId,
    form: &VenueForm,
) -> AppResult<MutationResponse<Venue>> {
    if let Err(errors) = form.validate() {
        return Ok(mutation::invalid(ENTITY, Some(&form.name), &errors));
    }

    match VenueRepo::update(pool, id, &UpdateVenue::from(form)).await {
        Ok(Some(record)) => {
            tracing::info!(venue_id = id, "Venue updated");
            let message = mutation::updated_message(ENTITY, Some(&record.name));
            Ok(mutation::saved(StatusCode::OK, message, record))
        }
        // Deleted between the lookup and the write.
        Ok(None) => Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id })),
        Err(err) => Ok(mutation::failed(ENTITY, Some(&form.name), &err)),
    }
}

/// DELETE /venues/{id}
///
/// Always 204: a missing venue and a rolled-back delete look the same.
pub async fn delete(State(state): State<AppState>, RecordId(id): RecordId) -> StatusCode {
    match VenueRepo::delete(&state.pool, id).await {
        Ok(true) => tracing::info!(venue_id = id, "Venue deleted"),
        Ok(false) => tracing::debug!(venue_id = id, "Delete requested for absent venue"),
        Err(err) => tracing::error!(venue_id = id, error = %err, "Venue delete rolled back"),
    }
    StatusCode::NO_CONTENT
}
