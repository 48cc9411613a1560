use sea_orm::*;

use crate::entity::{artist, show, venue};
use crate::error::AppError;
use crate::models::show::{NewShow, ShowListItem};

/// Every show with its venue and artist, ordered by start time.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<ShowListItem>, DbErr> {
    show::Entity::find()
        .select_only()
        .column(show::Column::Id)
        .column(show::Column::VenueId)
        .column_as(venue::Column::Name, "venue_name")
        .column(show::Column::ArtistId)
        .column_as(artist::Column::Name, "artist_name")
        .column_as(artist::Column::ImageLink, "artist_image_link")
        .column(show::Column::StartTime)
        .inner_join(venue::Entity)
        .inner_join(artist::Entity)
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .into_model::<ShowListItem>()
        .all(db)
        .await
}

/// Insert a show after checking that both the venue and the artist exist.
pub async fn create(db: &DatabaseConnection, new_show: NewShow) -> Result<show::Model, AppError> {
    let txn = db.begin().await?;

    if venue::Entity::find_by_id(new_show.venue_id)
        .one(&txn)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!(
            "Venue {} does not exist",
            new_show.venue_id
        )));
    }
    if artist::Entity::find_by_id(new_show.artist_id)
        .one(&txn)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!(
            "Artist {} does not exist",
            new_show.artist_id
        )));
    }

    let model = new_show.into_active_model().insert(&txn).await?;
    txn.commit().await?;
    Ok(model)
}
