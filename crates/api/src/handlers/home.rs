//! Handler for the landing page.

use axum::extract::State;
use axum::Json;
use encore_db::models::listing::DirectoryTotals;
use encore_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Json<DataResponse<DirectoryTotals>>> {
    let totals = DirectoryTotals {
        venues: VenueRepo::count(&state.pool).await?,
        artists: ArtistRepo::count(&state.pool).await?,
        shows: ShowRepo::count(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: totals }))
}
