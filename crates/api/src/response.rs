//! Shared response envelope types for API handlers.
//!
//! Read endpoints answer with a `{ "data": ... }` envelope; form submissions
//! answer with a [`FlashResponse`] carrying the one-shot status message.

use encore_core::choices::FormChoices;
use encore_core::search::SearchResults;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashCategory {
    Success,
    Error,
}

/// A user-facing status message produced by a single request.
#[derive(Debug, Clone, Serialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: message.into(),
        }
    }
}

/// Envelope for form submissions: the flash plus the saved record, if any.
#[derive(Debug, Serialize)]
pub struct FlashResponse<T: Serialize> {
    pub flash: Flash,
    pub data: Option<T>,
}

/// An empty form and the choices it offers.
#[derive(Debug, Serialize)]
pub struct FormPage<F: Serialize> {
    pub form: F,
    pub choices: FormChoices,
}

impl<F: Serialize> FormPage<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            choices: FormChoices::default(),
        }
    }
}

/// A form pre-filled from `record`, as shown on an edit page.
#[derive(Debug, Serialize)]
pub struct EditPage<F: Serialize, R: Serialize> {
    pub form: F,
    pub record: R,
    pub choices: FormChoices,
}

/// Search results echoed together with the term that produced them.
#[derive(Debug, Serialize)]
pub struct SearchPage<T: Serialize> {
    pub search_term: String,
    pub results: SearchResults<T>,
}

impl<T: Serialize> SearchPage<T> {
    pub fn new(search_term: String, matches: Vec<T>) -> Self {
        Self {
            search_term,
            results: SearchResults::from(matches),
        }
    }
}
