//! Lightweight projections shared by list and search pages.

use encore_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// `{id, name}` plus the number of shows still to come.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListingSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Directory totals shown on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryTotals {
    pub venues: i64,
    pub artists: i64,
    pub shows: i64,
}
