use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::entity::{genres_from_json, genres_to_json, venue};
use crate::error::AppError;

use super::shared::{
    checkbox, clean_genres, non_blank, validate_genres, validate_optional, validate_required,
};
use super::show::ArtistShow;

/// Venue create/edit form. Also the pre-populated form sent to the edit page.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, utoipa::ToSchema)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Build a fresh row from a validated form.
    pub fn into_active_model(self) -> venue::ActiveModel {
        let mut active = venue::ActiveModel::default();
        self.apply_to(&mut active);
        active
    }

    /// Overwrite every editable column of `active` with the form's values.
    pub fn apply_to(self, active: &mut venue::ActiveModel) {
        active.name = Set(self.name.trim().to_string());
        active.city = Set(self.city.trim().to_string());
        active.state = Set(self.state.trim().to_string());
        active.address = Set(self.address.trim().to_string());
        active.phone = Set(self.phone.trim().to_string());
        active.genres = Set(genres_to_json(&clean_genres(self.genres)));
        active.image_link = Set(non_blank(self.image_link));
        active.facebook_link = Set(non_blank(self.facebook_link));
        active.website = Set(non_blank(self.website));
        active.seeking_talent = Set(self.seeking_talent);
        active.seeking_description = Set(non_blank(self.seeking_description));
    }
}

impl From<venue::Model> for VenueForm {
    fn from(m: venue::Model) -> Self {
        Self {
            genres: genres_from_json(&m.genres),
            name: m.name,
            city: m.city,
            state: m.state,
            address: m.address,
            phone: m.phone,
            image_link: m.image_link,
            facebook_link: m.facebook_link,
            website: m.website,
            seeking_talent: m.seeking_talent,
            seeking_description: m.seeking_description,
        }
    }
}

pub fn validate_venue_form(form: &VenueForm) -> Result<(), AppError> {
    validate_required(&form.name, "Name", 200)?;
    validate_required(&form.city, "City", 120)?;
    validate_required(&form.state, "State", 20)?;
    validate_required(&form.address, "Address", 300)?;
    validate_required(&form.phone, "Phone", 120)?;
    validate_genres(&form.genres)?;
    validate_optional(form.image_link.as_deref(), "Image link", 500)?;
    validate_optional(form.facebook_link.as_deref(), "Facebook link", 120)?;
    validate_optional(form.website.as_deref(), "Website", 500)?;
    validate_optional(
        form.seeking_description.as_deref(),
        "Seeking description",
        500,
    )?;
    Ok(())
}

#[derive(Serialize, Debug, PartialEq, Eq, utoipa::ToSchema)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

/// Venues sharing one city and state.
#[derive(Serialize, Debug, PartialEq, Eq, utoipa::ToSchema)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct VenueListPage {
    pub areas: Vec<VenueArea>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(m: venue::Model, past_shows: Vec<ArtistShow>, upcoming_shows: Vec<ArtistShow>) -> Self {
        Self {
            genres: genres_from_json(&m.genres),
            id: m.id,
            name: m.name,
            address: m.address,
            city: m.city,
            state: m.state,
            phone: m.phone,
            website: m.website,
            facebook_link: m.facebook_link,
            seeking_talent: m.seeking_talent,
            seeking_description: m.seeking_description,
            image_link: m.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// Create form (no `venue_id`) or edit form pre-populated from a stored venue.
#[derive(Serialize, utoipa::ToSchema)]
pub struct VenueFormPage {
    pub venue_id: Option<i32>,
    pub form: VenueForm,
}
