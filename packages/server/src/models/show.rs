use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::{FromQueryResult, Set};
use serde::{Deserialize, Serialize};

use crate::entity::show;
use crate::error::AppError;

/// Format used by the show form: `2035-04-01 20:00:00`.
pub const FORM_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, utoipa::ToSchema)]
pub struct ShowForm {
    #[serde(default)]
    pub venue_id: i32,
    #[serde(default)]
    pub artist_id: i32,
    /// RFC 3339, `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DDTHH:MM[:SS]`; naive times are UTC.
    #[serde(default)]
    #[schema(example = "2035-04-01 20:00:00")]
    pub start_time: String,
}

impl ShowForm {
    /// An empty form whose start time defaults to the current time.
    pub fn blank(now: DateTime<Utc>) -> Self {
        Self {
            venue_id: 0,
            artist_id: 0,
            start_time: now.format(FORM_TIME_FORMAT).to_string(),
        }
    }
}

/// A show ready to insert: both references and a parsed start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: DateTime<Utc>,
}

impl NewShow {
    pub fn into_active_model(self) -> show::ActiveModel {
        show::ActiveModel {
            venue_id: Set(self.venue_id),
            artist_id: Set(self.artist_id),
            start_time: Set(self.start_time),
            ..Default::default()
        }
    }
}

/// Parse a start time as typed into the show form.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    .map(|naive| naive.and_utc())
}

pub fn validate_show_form(form: &ShowForm) -> Result<NewShow, AppError> {
    if form.venue_id <= 0 {
        return Err(AppError::Validation("venue_id must be a positive id".into()));
    }
    if form.artist_id <= 0 {
        return Err(AppError::Validation(
            "artist_id must be a positive id".into(),
        ));
    }
    let start_time = parse_start_time(&form.start_time).ok_or_else(|| {
        AppError::Validation("start_time must look like YYYY-MM-DD HH:MM:SS".into())
    })?;
    Ok(NewShow {
        venue_id: form.venue_id,
        artist_id: form.artist_id,
        start_time,
    })
}

/// A show as seen from its venue: who plays and when.
#[derive(Serialize, FromQueryResult, Debug, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct ArtistShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show as seen from its artist: where it plays and when.
#[derive(Serialize, FromQueryResult, Debug, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct VenueShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// One row of the `/shows` listing.
#[derive(Serialize, FromQueryResult, Debug, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct ShowListItem {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ShowListPage {
    pub shows: Vec<ShowListItem>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ShowFormPage {
    pub form: ShowForm,
}
