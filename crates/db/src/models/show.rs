//! Show entity model and DTOs.

use encore_core::error::CoreError;
use encore_core::forms::ShowForm;
use encore_core::schedule::Scheduled;
use encore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A show row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for inserting a show.
#[derive(Debug, Clone)]
pub struct CreateShow {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

impl TryFrom<&ShowForm> for CreateShow {
    type Error = CoreError;

    fn try_from(form: &ShowForm) -> Result<Self, Self::Error> {
        let venue_id = form
            .venue_id()
            .ok_or_else(|| CoreError::Validation("venue_id is not a valid id".into()))?;
        let artist_id = form
            .artist_id()
            .ok_or_else(|| CoreError::Validation("artist_id is not a valid id".into()))?;
        let start_time = form
            .start_time()
            .ok_or_else(|| CoreError::Validation("start_time is not a valid datetime".into()))?;
        Ok(Self {
            venue_id,
            artist_id,
            start_time,
        })
    }
}

/// A show joined with the names and images of its venue and artist.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}
