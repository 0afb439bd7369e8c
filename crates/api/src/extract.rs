//! Custom extractors for Axum handlers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::Response;
use encore_core::types::DbId;

use crate::error::page_not_found;

/// The `{id}` segment of a record route.
///
/// A segment that is not an integer id means the route does not exist, so it
/// is answered with the 404 page instead of a path rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub DbId);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(RecordId(id)),
            Err(rejection) => {
                tracing::debug!(uri = %parts.uri, error = %rejection, "Unroutable record id");
                Err(page_not_found())
            }
        }
    }
}
