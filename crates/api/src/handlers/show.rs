//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;
use encore_core::error::CoreError;
use encore_core::forms::ShowForm;
use encore_db::models::show::{CreateShow, Show, ShowListing};
use encore_db::repositories::ShowRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::mutation::{self, MutationResponse};
use crate::query::SearchForm;
use crate::response::{DataResponse, FormPage, SearchPage};
use crate::state::AppState;

const ENTITY: &str = "Show";

/// GET /shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ShowListing>>>> {
    let shows = ShowRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: shows }))
}

/// POST /shows/search
///
/// Matches on either the venue name or the artist name.
pub async fn search(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> AppResult<Json<DataResponse<SearchPage<ShowListing>>>> {
    let Form(form) = form.map_err(|rejection| CoreError::Validation(rejection.to_string()))?;
    let matches = ShowRepo::search(&state.pool, &form.search_term).await?;
    tracing::debug!(term = %form.search_term, count = matches.len(), "Show search");
    Ok(Json(DataResponse {
        data: SearchPage::new(form.search_term, matches),
    }))
}

/// GET /shows/create
///
/// The start time is pre-filled with the current time.
pub async fn create_form() -> Json<DataResponse<FormPage<ShowForm>>> {
    Json(DataResponse {
        data: FormPage::new(ShowForm::starting_at(Utc::now())),
    })
}

/// POST /shows/create
///
/// An unknown venue or artist id surfaces as a foreign key violation (409).
pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<ShowForm>, FormRejection>,
) -> MutationResponse<Show> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return mutation::invalid(ENTITY, None, &rejection),
    };

    if let Err(errors) = form.validate() {
        return mutation::invalid(ENTITY, None, &errors);
    }

    let input = match CreateShow::try_from(&form) {
        Ok(input) => input,
        Err(err) => return mutation::invalid(ENTITY, None, &err),
    };

    match ShowRepo::create(&state.pool, &input).await {
        Ok(show) => {
            tracing::info!(
                show_id = show.id,
                venue_id = show.venue_id,
                artist_id = show.artist_id,
                "Show created"
            );
            mutation::saved(StatusCode::CREATED, mutation::listed_message(ENTITY, None), show)
        }
        Err(err) => mutation::failed(ENTITY, None, &err),
    }
}
