use chrono::{DateTime, TimeZone, Utc};
use sea_orm::*;
use tracing::info;

use crate::entity::venue;
use crate::models::artist::ArtistForm;
use crate::models::show::NewShow;
use crate::models::venue::VenueForm;

fn genres(names: &[&str]) -> Vec<String> {
    names.iter().copied().map(String::from).collect()
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn sample_venues() -> Vec<VenueForm> {
    vec![
        VenueForm {
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            phone: "123-123-1234".into(),
            genres: genres(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
            image_link: Some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400".into()),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".into()),
            website: Some("https://www.themusicalhop.com".into()),
            seeking_talent: true,
            seeking_description: Some(
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .into(),
            ),
        },
        VenueForm {
            name: "The Dueling Pianos Bar".into(),
            city: "New York".into(),
            state: "NY".into(),
            address: "335 Delancey Street".into(),
            phone: "914-003-1132".into(),
            genres: genres(&["Classical", "R&B", "Hip-Hop"]),
            image_link: Some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=400".into()),
            facebook_link: Some("https://www.facebook.com/theduelingpianos".into()),
            website: Some("https://www.theduelingpianos.com".into()),
            seeking_talent: false,
            seeking_description: None,
        },
        VenueForm {
            name: "Park Square Live Music & Coffee".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "34 Whiskey Moore Ave".into(),
            phone: "415-000-1234".into(),
            genres: genres(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            image_link: Some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=400".into()),
            facebook_link: Some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee".into()),
            website: Some("https://www.parksquarelivemusicandcoffee.com".into()),
            seeking_talent: false,
            seeking_description: None,
        },
    ]
}

fn sample_artists() -> Vec<ArtistForm> {
    vec![
        ArtistForm {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "326-123-5000".into(),
            genres: genres(&["Rock n Roll"]),
            image_link: Some("https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300".into()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".into()),
            website: Some("https://www.gunsnpetalsband.com".into()),
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".into(),
            ),
        },
        ArtistForm {
            name: "Matt Quevedo".into(),
            city: "New York".into(),
            state: "NY".into(),
            phone: "300-400-5000".into(),
            genres: genres(&["Jazz"]),
            image_link: Some("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334".into()),
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".into()),
            website: None,
            seeking_venue: false,
            seeking_description: None,
        },
        ArtistForm {
            name: "The Wild Sax Band".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "432-325-5432".into(),
            genres: genres(&["Jazz", "Classical"]),
            image_link: Some("https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794".into()),
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        },
    ]
}

/// Insert the demo venues, artists and shows when no venue exists yet.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if venue::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let txn = db.begin().await?;

    let mut venue_ids = Vec::new();
    for form in sample_venues() {
        venue_ids.push(form.into_active_model().insert(&txn).await?.id);
    }
    let mut artist_ids = Vec::new();
    for form in sample_artists() {
        artist_ids.push(form.into_active_model().insert(&txn).await?.id);
    }

    // (venue, artist, start): indexes into the lists above
    let bookings = [
        (0, 0, at(2019, 5, 21, 21, 30)),
        (2, 1, at(2019, 6, 15, 23, 0)),
        (2, 2, at(2035, 4, 1, 20, 0)),
        (2, 2, at(2035, 4, 8, 20, 0)),
        (2, 2, at(2035, 4, 15, 20, 0)),
    ];
    for &(v, a, start_time) in &bookings {
        NewShow {
            venue_id: venue_ids[v],
            artist_id: artist_ids[a],
            start_time,
        }
        .into_active_model()
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    info!(
        venues = venue_ids.len(),
        artists = artist_ids.len(),
        shows = bookings.len(),
        "Seeded sample data"
    );
    Ok(())
}
