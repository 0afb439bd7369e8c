//! Shared request body types for API handlers.

use serde::Deserialize;

/// Body of the `POST .../search` forms.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
