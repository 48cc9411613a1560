use sea_orm::{FromQueryResult, Set};
use serde::{Deserialize, Serialize};

use crate::entity::{artist, genres_from_json, genres_to_json};
use crate::error::AppError;

use super::shared::{
    checkbox, clean_genres, non_blank, validate_genres, validate_optional, validate_required,
};
use super::show::VenueShow;

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, utoipa::ToSchema)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn into_active_model(self) -> artist::ActiveModel {
        let mut active = artist::ActiveModel::default();
        self.apply_to(&mut active);
        active
    }

    /// Overwrite every editable column of `active` with the form's values.
    pub fn apply_to(self, active: &mut artist::ActiveModel) {
        active.name = Set(self.name.trim().to_string());
        active.city = Set(self.city.trim().to_string());
        active.state = Set(self.state.trim().to_string());
        active.phone = Set(self.phone.trim().to_string());
        active.genres = Set(genres_to_json(&clean_genres(self.genres)));
        active.image_link = Set(non_blank(self.image_link));
        active.facebook_link = Set(non_blank(self.facebook_link));
        active.website = Set(non_blank(self.website));
        active.seeking_venue = Set(self.seeking_venue);
        active.seeking_description = Set(non_blank(self.seeking_description));
    }
}

impl From<artist::Model> for ArtistForm {
    fn from(m: artist::Model) -> Self {
        Self {
            genres: genres_from_json(&m.genres),
            name: m.name,
            city: m.city,
            state: m.state,
            phone: m.phone,
            image_link: m.image_link,
            facebook_link: m.facebook_link,
            website: m.website,
            seeking_venue: m.seeking_venue,
            seeking_description: m.seeking_description,
        }
    }
}

pub fn validate_artist_form(form: &ArtistForm) -> Result<(), AppError> {
    validate_required(&form.name, "Name", 200)?;
    validate_required(&form.city, "City", 120)?;
    validate_required(&form.state, "State", 120)?;
    validate_required(&form.phone, "Phone", 120)?;
    validate_genres(&form.genres)?;
    validate_optional(form.image_link.as_deref(), "Image link", 500)?;
    validate_optional(form.facebook_link.as_deref(), "Facebook link", 400)?;
    validate_optional(form.website.as_deref(), "Website", 500)?;
    validate_optional(
        form.seeking_description.as_deref(),
        "Seeking description",
        500,
    )?;
    Ok(())
}

#[derive(Serialize, Debug, PartialEq, Eq, FromQueryResult, utoipa::ToSchema)]
pub struct ArtistSummary {
    pub id: i32,
    #[schema(example = "Guns N Petals")]
    pub name: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ArtistListPage {
    pub artists: Vec<ArtistSummary>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(m: artist::Model, past_shows: Vec<VenueShow>, upcoming_shows: Vec<VenueShow>) -> Self {
        Self {
            genres: genres_from_json(&m.genres),
            id: m.id,
            name: m.name,
            city: m.city,
            state: m.state,
            phone: m.phone,
            website: m.website,
            facebook_link: m.facebook_link,
            seeking_venue: m.seeking_venue,
            seeking_description: m.seeking_description,
            image_link: m.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ArtistFormPage {
    pub artist_id: Option<i32>,
    pub form: ArtistForm,
}
