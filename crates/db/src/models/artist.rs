//! Artist entity model and DTOs.

use encore_core::forms::ArtistForm;
use encore_core::schedule::Schedule;
use encore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::show::ShowListing;

/// An artist row from the `artists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an artist.
#[derive(Debug, Clone)]
pub struct CreateArtist {
    pub name: String,
    pub city: String,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Full-record overwrite; same shape as [`CreateArtist`].
pub type UpdateArtist = CreateArtist;

impl From<&ArtistForm> for CreateArtist {
    fn from(form: &ArtistForm) -> Self {
        Self {
            name: form.name.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            phone: form.phone.clone(),
            genres: form.genres.clone(),
            image_link: form.image_link.clone(),
            facebook_link: form.facebook_link.clone(),
            website_link: form.website_link.clone(),
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description.clone(),
        }
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub schedule: Schedule<ShowListing>,
}
