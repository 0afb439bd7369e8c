//! Outcome reporting for form submissions.
//!
//! Every create/edit handler follows the same policy: validate the bound
//! form, write inside one transaction, and answer with a flash. Validation
//! failures write nothing and only log the field errors. Persistence
//! failures have already been rolled back by the repository (the
//! transaction is dropped before commit) and show the database's own error
//! text to the user.

use std::fmt::Display;

use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use serde::Serialize;

use crate::response::{Flash, FlashResponse};

/// Response of a create handler.
pub type MutationResponse<T> = (StatusCode, Json<FlashResponse<T>>);

/// Response of an edit handler: the outcome plus a pointer to the detail view.
pub type EditResponse<T> = (StatusCode, [(HeaderName, String); 1], Json<FlashResponse<T>>);

/// `"Venue The Musical Hop"`, or just `"Show"` when there is no name.
fn subject(entity: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{entity} {name}"),
        None => entity.to_string(),
    }
}

/// The record was committed.
pub fn saved<T: Serialize>(status: StatusCode, message: String, record: T) -> MutationResponse<T> {
    (
        status,
        Json(FlashResponse {
            flash: Flash::success(message),
            data: Some(record),
        }),
    )
}

/// `"<subject> was successfully listed!"`
pub fn listed_message(entity: &str, name: Option<&str>) -> String {
    format!("{} was successfully listed!", subject(entity, name))
}

/// `"<subject> was successfully updated!"`
pub fn updated_message(entity: &str, name: Option<&str>) -> String {
    format!("{} was successfully updated!", subject(entity, name))
}

/// The form failed validation; nothing was written.
pub fn invalid<T: Serialize>(
    entity: &str,
    name: Option<&str>,
    errors: &dyn Display,
) -> MutationResponse<T> {
    tracing::warn!(entity, errors = %errors, "Form submission failed validation");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(FlashResponse {
            flash: Flash::error(format!(
                "{} input format is not correct!",
                subject(entity, name)
            )),
            data: None,
        }),
    )
}

/// The write failed and was rolled back.
pub fn failed<T: Serialize>(
    entity: &str,
    name: Option<&str>,
    err: &sqlx::Error,
) -> MutationResponse<T> {
    tracing::error!(entity, error = %err, "Write failed, transaction rolled back");
    let (status, detail) = describe_db_error(err);
    (
        status,
        Json(FlashResponse {
            flash: Flash::error(format!(
                "{detail}\nAn error occurred. {} could not be listed.",
                subject(entity, name)
            )),
            data: None,
        }),
    )
}

/// Attach the `Location` of the record's detail view.
pub fn at_location<T: Serialize>(
    (status, body): MutationResponse<T>,
    location: String,
) -> EditResponse<T> {
    (status, [(LOCATION, location)], body)
}

/// Integrity violations (SQLSTATE class 23) are the client's conflict;
/// anything else is a server failure.
fn describe_db_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::Database(db_err) => {
            let status = if db_err.code().is_some_and(|code| code.starts_with("23")) {
                StatusCode::CONFLICT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, db_err.message().to_string())
        }
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}
