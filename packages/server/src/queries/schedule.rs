//! Past/upcoming classification of shows relative to a single instant.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::show::{ArtistShow, VenueShow};

/// Anything with a start time that can be classified.
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// A show is past when it started strictly before `now`; a show starting
/// exactly at `now` is still upcoming.
pub fn is_past(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time < now
}

#[derive(Debug, PartialEq, Eq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

/// Split shows into past and upcoming, each ordered by start time.
pub fn partition_shows<T: Scheduled>(mut shows: Vec<T>, now: DateTime<Utc>) -> Partitioned<T> {
    shows.sort_by_key(|s| s.start_time());
    let (past, upcoming): (Vec<T>, Vec<T>) = shows
        .into_iter()
        .partition(|s| is_past(s.start_time(), now));
    Partitioned { past, upcoming }
}

/// Count upcoming shows per owner from `(owner_id, start_time)` pairs.
pub fn count_upcoming(
    rows: impl IntoIterator<Item = (i32, DateTime<Utc>)>,
    now: DateTime<Utc>,
) -> HashMap<i32, u64> {
    let mut counts = HashMap::new();
    for (owner, start_time) in rows {
        if !is_past(start_time, now) {
            *counts.entry(owner).or_insert(0) += 1;
        }
    }
    counts
}
