pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   directory totals
/// /health                             service health
///
/// /venues                             grouped list
/// /venues/search                      search (POST)
/// /venues/create                      form, create
/// /venues/{id}                        detail, delete
/// /venues/{id}/edit                   form, update
///
/// /artists                            list
/// /artists/search                     search (POST)
/// /artists/create                     form, create
/// /artists/{id}                       detail
/// /artists/{id}/edit                  form, update
///
/// /shows                              list
/// /shows/search                       search (POST)
/// /shows/create                       form, create
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .merge(health::router())
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
