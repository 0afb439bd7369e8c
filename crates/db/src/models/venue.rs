//! Venue entity model and DTOs.

use encore_core::forms::VenueForm;
use encore_core::location::Located;
use encore_core::schedule::Schedule;
use encore_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::show::ShowListing;

/// A venue row from the `venues` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a venue.
#[derive(Debug, Clone)]
pub struct CreateVenue {
    pub name: String,
    pub city: String,
    pub state: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Updates overwrite every mutable column, so they carry the same fields.
pub type UpdateVenue = CreateVenue;

impl From<&VenueForm> for CreateVenue {
    fn from(form: &VenueForm) -> Self {
        Self {
            name: form.name.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            address: form.address.clone(),
            phone: form.phone.clone(),
            genres: form.genres.clone(),
            image_link: form.image_link.clone(),
            facebook_link: form.facebook_link.clone(),
            website_link: form.website_link.clone(),
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description.clone(),
        }
    }
}

/// Pre-fill an edit form from the stored row.
impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

/// Venue entry on the grouped venues page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    #[serde(skip)]
    pub city: String,
    #[serde(skip)]
    pub state: Option<String>,
    pub num_upcoming_shows: i64,
}

impl Located for VenueSummary {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}

/// A venue together with its shows split into upcoming and past.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub schedule: Schedule<ShowListing>,
}
