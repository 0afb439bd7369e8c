//! Route definitions for the `/shows` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET    /              -> list
/// POST   /search        -> search
/// GET    /create        -> create_form
/// POST   /create        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show::list))
        .route("/search", post(show::search))
        .route("/create", get(show::create_form).post(show::create))
}
