use crate::structs::{ArtistShow, VenueShow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a show has already started relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    /// Classifies a show by its start time.
    ///
    /// A show is past only when it started strictly before `now`; a show starting
    /// exactly at `now` is upcoming. Venue and artist pages share this rule.
    pub fn classify(start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start_time < now {
            ShowTiming::Past
        } else {
            ShowTiming::Upcoming
        }
    }
}

/// Anything with a start time that can be split into past and upcoming.
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// A list of shows partitioned around a reference instant.
///
/// Input order is preserved inside each bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSplit<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<T: Scheduled> ShowSplit<T> {
    pub fn new(shows: Vec<T>, now: DateTime<Utc>) -> Self {
        let (past_shows, upcoming_shows): (Vec<T>, Vec<T>) = shows
            .into_iter()
            .partition(|show| ShowTiming::classify(show.start_time(), now) == ShowTiming::Past);

        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

impl<T> Default for ShowSplit<T> {
    fn default() -> Self {
        Self {
            past_shows: Vec::new(),
            upcoming_shows: Vec::new(),
            past_shows_count: 0,
            upcoming_shows_count: 0,
        }
    }
}
