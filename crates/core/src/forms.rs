//! Typed submission forms for venues, artists and shows.
//!
//! Each form is bound from a urlencoded body, validated with
//! [`validator::Validate`], and only then copied onto a create/update DTO.
//! Blank optional inputs deserialize to `None` so they are stored as NULL.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::choices;
use crate::types::{DbId, Timestamp};

/// Accepted `start_time` layouts besides RFC 3339, all read as UTC.
const START_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Layout used when pre-filling `start_time`.
pub const START_TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// US phone number, `NNN-NNN-NNNN`.
pub const PHONE_PATTERN: &str = r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// Venue create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct VenueForm {
    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "required"), length(max = 120))]
    pub city: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "known_state"))]
    pub state: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "required"), length(max = 120))]
    pub address: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "phone_number"), length(max = 120))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Select at least one genre."), custom(function = "known_genres"))]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url, length(max = 120))]
    pub website_link: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_talent: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 120))]
    pub seeking_description: Option<String>,
}

/// Artist create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct ArtistForm {
    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "required"), length(max = 120))]
    pub city: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "known_state"))]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "phone_number"), length(max = 120))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Select at least one genre."), custom(function = "known_genres"))]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url, length(max = 120))]
    pub website_link: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 120))]
    pub seeking_description: Option<String>,
}

/// Show create form.
///
/// Ids and the start time stay textual until validation passes so that a
/// malformed value is reported as a field error rather than a rejected body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct ShowForm {
    #[serde(default)]
    #[validate(custom(function = "record_id"))]
    pub artist_id: String,
    #[serde(default)]
    #[validate(custom(function = "record_id"))]
    pub venue_id: String,
    #[serde(default)]
    #[validate(custom(function = "start_time"))]
    pub start_time: String,
}

impl ShowForm {
    /// An empty form whose start time is pre-filled with `now`.
    pub fn starting_at(now: Timestamp) -> Self {
        Self {
            start_time: now.format(START_TIME_DISPLAY_FORMAT).to_string(),
            ..Self::default()
        }
    }

    pub fn artist_id(&self) -> Option<DbId> {
        parse_id(&self.artist_id)
    }

    pub fn venue_id(&self) -> Option<DbId> {
        parse_id(&self.venue_id)
    }

    pub fn start_time(&self) -> Option<Timestamp> {
        parse_start_time(&self.start_time)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok().filter(|id| *id > 0)
}

/// Parse a submitted start time. Naive layouts are interpreted as UTC.
pub fn parse_start_time(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Whether `phone` matches [`PHONE_PATTERN`].
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "This field is required."));
    }
    Ok(())
}

fn known_state(value: &str) -> Result<(), ValidationError> {
    if !choices::is_valid_state(value) {
        return Err(field_error("choice", "Not a valid choice."));
    }
    Ok(())
}

fn known_genres(genres: &[String]) -> Result<(), ValidationError> {
    if let Some(bad) = genres.iter().find(|g| !choices::is_valid_genre(g)) {
        let mut err = field_error("choice", "Not a valid choice.");
        err.add_param(Cow::Borrowed("value"), bad);
        return Err(err);
    }
    Ok(())
}

fn phone_number(value: &str) -> Result<(), ValidationError> {
    if !is_valid_phone(value) {
        return Err(field_error("phone", "Phone must look like 555-555-5555."));
    }
    Ok(())
}

fn record_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "This field is required."));
    }
    if parse_id(value).is_none() {
        return Err(field_error("id", "Must be a positive integer id."));
    }
    Ok(())
}

fn start_time(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", "This field is required."));
    }
    if parse_start_time(value).is_none() {
        return Err(field_error("datetime", "Not a valid datetime value."));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Treat a missing or whitespace-only input as `None`.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// HTML checkbox semantics: present with a truthy value means checked.
///
/// A repeated key (a hidden `off` input followed by the checkbox, say) is
/// checked if any of its values is.
pub fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CheckboxVisitor)
}

struct CheckboxVisitor;

impl<'de> Visitor<'de> for CheckboxVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean or a checkbox value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        Ok(matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "y" | "yes" | "on" | "true" | "1"
        ))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<bool, A::Error> {
        let mut checked = false;
        while let Some(Checkbox(value)) = seq.next_element()? {
            checked |= value;
        }
        Ok(checked)
    }
}

/// One value of a possibly repeated checkbox.
struct Checkbox(bool);

impl<'de> Deserialize<'de> for Checkbox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CheckboxVisitor).map(Checkbox)
    }
}
