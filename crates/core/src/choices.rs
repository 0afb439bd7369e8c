//! Fixed choice lists offered by the venue and artist forms.

use serde::Serialize;

/// US state (and DC) postal codes accepted in the `state` field.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Genres a venue or artist can be tagged with.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub fn is_valid_state(state: &str) -> bool {
    STATES.contains(&state)
}

pub fn is_valid_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

/// Choice lists shipped alongside a rendered form.
#[derive(Debug, Clone, Serialize)]
pub struct FormChoices {
    pub states: &'static [&'static str],
    pub genres: &'static [&'static str],
}

impl Default for FormChoices {
    fn default() -> Self {
        Self {
            states: STATES,
            genres: GENRES,
        }
    }
}
