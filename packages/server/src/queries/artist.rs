use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::*;

use crate::entity::{artist, show, venue};
use crate::error::AppError;
use crate::models::artist::{ArtistDetail, ArtistForm, ArtistSummary};
use crate::models::shared::{SearchItem, name_matches};
use crate::models::show::VenueShow;

use super::schedule::{count_upcoming, partition_shows};

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<artist::Model>, DbErr> {
    artist::Entity::find_by_id(id).one(db).await
}

/// Look up an artist by ID, returning 404 if not found.
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<artist::Model, AppError> {
    find(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".into()))
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<ArtistSummary>, DbErr> {
    artist::Entity::find()
        .select_only()
        .columns([artist::Column::Id, artist::Column::Name])
        .order_by_asc(artist::Column::Name)
        .into_model::<ArtistSummary>()
        .all(db)
        .await
}

/// Case-insensitive "name contains `term`" match. A blank term matches every artist.
///
/// Case is folded in Rust: SQLite's `lower()` and `LIKE` only fold ASCII.
pub async fn search<C: ConnectionTrait>(db: &C, term: &str) -> Result<Vec<ArtistSummary>, DbErr> {
    let rows = artist::Entity::find()
        .select_only()
        .columns([artist::Column::Id, artist::Column::Name])
        .order_by_asc(artist::Column::Name)
        .into_model::<ArtistSummary>()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter(|row| name_matches(&row.name, term))
        .collect())
}

/// Number of upcoming shows per artist id. Artists without any are absent.
pub async fn upcoming_show_counts<C: ConnectionTrait>(
    db: &C,
    now: DateTime<Utc>,
) -> Result<HashMap<i32, u64>, DbErr> {
    let rows: Vec<(i32, DateTime<Utc>)> = show::Entity::find()
        .select_only()
        .column(show::Column::ArtistId)
        .column(show::Column::StartTime)
        .into_tuple()
        .all(db)
        .await?;
    Ok(count_upcoming(rows, now))
}

/// Every show of an artist joined with its venue, ordered by start time.
pub async fn shows<C: ConnectionTrait>(db: &C, artist_id: i32) -> Result<Vec<VenueShow>, DbErr> {
    show::Entity::find()
        .select_only()
        .column_as(venue::Column::Id, "venue_id")
        .column_as(venue::Column::Name, "venue_name")
        .column_as(venue::Column::ImageLink, "venue_image_link")
        .column(show::Column::StartTime)
        .inner_join(venue::Entity)
        .filter(show::Column::ArtistId.eq(artist_id))
        .order_by_asc(show::Column::StartTime)
        .into_model::<VenueShow>()
        .all(db)
        .await
}

pub async fn search_items<C: ConnectionTrait>(
    db: &C,
    term: &str,
    now: DateTime<Utc>,
) -> Result<Vec<SearchItem>, DbErr> {
    let artists = search(db, term).await?;
    if artists.is_empty() {
        return Ok(vec![]);
    }
    let counts = upcoming_show_counts(db, now).await?;
    Ok(artists
        .into_iter()
        .map(|a| SearchItem {
            num_upcoming_shows: counts.get(&a.id).copied().unwrap_or(0),
            id: a.id,
            name: a.name,
        })
        .collect())
}

/// An artist with their shows split into past and upcoming relative to `now`.
pub async fn detail<C: ConnectionTrait>(
    db: &C,
    id: i32,
    now: DateTime<Utc>,
) -> Result<ArtistDetail, AppError> {
    let model = get(db, id).await?;
    let split = partition_shows(shows(db, id).await?, now);
    Ok(ArtistDetail::new(model, split.past, split.upcoming))
}

pub async fn create(db: &DatabaseConnection, form: ArtistForm) -> Result<artist::Model, DbErr> {
    let txn = db.begin().await?;
    let model = form.into_active_model().insert(&txn).await?;
    txn.commit().await?;
    Ok(model)
}

/// Overwrite the editable fields of an artist. `None` when the id does not exist.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    form: ArtistForm,
) -> Result<Option<artist::Model>, DbErr> {
    let txn = db.begin().await?;

    let Some(existing) = find(&txn, id).await? else {
        return Ok(None);
    };
    let mut active: artist::ActiveModel = existing.into();
    form.apply_to(&mut active);

    let model = active.update(&txn).await?;
    txn.commit().await?;
    Ok(Some(model))
}

/// Delete an artist together with their shows. `None` when the id does not exist.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<artist::Model>, DbErr> {
    let txn = db.begin().await?;

    let Some(existing) = find(&txn, id).await? else {
        return Ok(None);
    };

    show::Entity::delete_many()
        .filter(show::Column::ArtistId.eq(id))
        .exec(&txn)
        .await?;
    artist::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    Ok(Some(existing))
}
