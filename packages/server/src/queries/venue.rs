use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use sea_orm::*;

use crate::entity::{artist, show, venue};
use crate::error::AppError;
use crate::models::shared::{SearchItem, name_matches};
use crate::models::show::ArtistShow;
use crate::models::venue::{VenueArea, VenueDetail, VenueForm, VenueSummary};

use super::schedule::{count_upcoming, partition_shows};

/// The columns the listing and search pages need.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct VenueRow {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<venue::Model>, DbErr> {
    venue::Entity::find_by_id(id).one(db).await
}

/// Look up a venue by ID, returning 404 if not found.
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<venue::Model, AppError> {
    find(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".into()))
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<VenueRow>, DbErr> {
    venue::Entity::find()
        .select_only()
        .columns([
            venue::Column::Id,
            venue::Column::Name,
            venue::Column::City,
            venue::Column::State,
        ])
        .order_by_asc(venue::Column::Id)
        .into_model::<VenueRow>()
        .all(db)
        .await
}

/// Case-insensitive "name contains `term`" match. A blank term matches every venue.
///
/// Case is folded in Rust: SQLite's `lower()` and `LIKE` only fold ASCII.
pub async fn search<C: ConnectionTrait>(db: &C, term: &str) -> Result<Vec<VenueRow>, DbErr> {
    let rows = venue::Entity::find()
        .select_only()
        .columns([
            venue::Column::Id,
            venue::Column::Name,
            venue::Column::City,
            venue::Column::State,
        ])
        .order_by_asc(venue::Column::Name)
        .into_model::<VenueRow>()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter(|row| name_matches(&row.name, term))
        .collect())
}

/// Number of upcoming shows per venue id. Venues without any are absent.
pub async fn upcoming_show_counts<C: ConnectionTrait>(
    db: &C,
    now: DateTime<Utc>,
) -> Result<HashMap<i32, u64>, DbErr> {
    let rows: Vec<(i32, DateTime<Utc>)> = show::Entity::find()
        .select_only()
        .column(show::Column::VenueId)
        .column(show::Column::StartTime)
        .into_tuple()
        .all(db)
        .await?;
    Ok(count_upcoming(rows, now))
}

/// Every show at a venue joined with its artist, ordered by start time.
pub async fn shows<C: ConnectionTrait>(db: &C, venue_id: i32) -> Result<Vec<ArtistShow>, DbErr> {
    show::Entity::find()
        .select_only()
        .column_as(artist::Column::Id, "artist_id")
        .column_as(artist::Column::Name, "artist_name")
        .column_as(artist::Column::ImageLink, "artist_image_link")
        .column(show::Column::StartTime)
        .inner_join(artist::Entity)
        .filter(show::Column::VenueId.eq(venue_id))
        .order_by_asc(show::Column::StartTime)
        .into_model::<ArtistShow>()
        .all(db)
        .await
}

/// All venues grouped by area, each with its upcoming show count.
pub async fn areas<C: ConnectionTrait>(
    db: &C,
    now: DateTime<Utc>,
) -> Result<Vec<VenueArea>, DbErr> {
    let venues = list_all(db).await?;
    let counts = upcoming_show_counts(db, now).await?;
    Ok(group_by_area(venues, &counts))
}

pub async fn search_items<C: ConnectionTrait>(
    db: &C,
    term: &str,
    now: DateTime<Utc>,
) -> Result<Vec<SearchItem>, DbErr> {
    let venues = search(db, term).await?;
    if venues.is_empty() {
        return Ok(vec![]);
    }
    let counts = upcoming_show_counts(db, now).await?;
    Ok(venues
        .into_iter()
        .map(|v| SearchItem {
            num_upcoming_shows: counts.get(&v.id).copied().unwrap_or(0),
            id: v.id,
            name: v.name,
        })
        .collect())
}

/// A venue with its shows split into past and upcoming relative to `now`.
pub async fn detail<C: ConnectionTrait>(
    db: &C,
    id: i32,
    now: DateTime<Utc>,
) -> Result<VenueDetail, AppError> {
    let model = get(db, id).await?;
    let split = partition_shows(shows(db, id).await?, now);
    Ok(VenueDetail::new(model, split.past, split.upcoming))
}

/// Group venues by area. Areas are ordered by state then city, venues inside an area by name.
pub fn group_by_area(venues: Vec<VenueRow>, counts: &HashMap<i32, u64>) -> Vec<VenueArea> {
    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for v in venues {
        areas
            .entry((v.state, v.city))
            .or_default()
            .push(VenueSummary {
                num_upcoming_shows: counts.get(&v.id).copied().unwrap_or(0),
                id: v.id,
                name: v.name,
            });
    }

    areas
        .into_iter()
        .map(|((state, city), mut venues)| {
            venues.sort_by(|a, b| a.name.cmp(&b.name));
            VenueArea {
                city,
                state,
                venues,
            }
        })
        .collect()
}

pub async fn create(db: &DatabaseConnection, form: VenueForm) -> Result<venue::Model, DbErr> {
    let txn = db.begin().await?;
    let model = form.into_active_model().insert(&txn).await?;
    txn.commit().await?;
    Ok(model)
}

/// Overwrite the editable fields of a venue. `None` when the id does not exist.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    form: VenueForm,
) -> Result<Option<venue::Model>, DbErr> {
    let txn = db.begin().await?;

    let Some(existing) = find(&txn, id).await? else {
        return Ok(None);
    };
    let mut active: venue::ActiveModel = existing.into();
    form.apply_to(&mut active);

    let model = active.update(&txn).await?;
    txn.commit().await?;
    Ok(Some(model))
}

/// Delete a venue together with its shows. `None` when the id does not exist.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<venue::Model>, DbErr> {
    let txn = db.begin().await?;

    let Some(existing) = find(&txn, id).await? else {
        return Ok(None);
    };

    show::Entity::delete_many()
        .filter(show::Column::VenueId.eq(id))
        .exec(&txn)
        .await?;
    venue::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    Ok(Some(existing))
}
