use crate::enums::Genre;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ==============================================================================
// Persisted records
// ==============================================================================

/// A place hosting musical performances. One row of the `venues` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    #[sqlx(json)]
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// A performer who can be booked at venues. One row of the `artists` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    #[sqlx(json)]
    pub genres: Vec<Genre>,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// A scheduled performance linking one artist to one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

// ==============================================================================
// Validated input
// ==============================================================================

/// The editable fields of a venue, already validated by the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// The editable fields of an artist, already validated by the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<Genre>,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// A show to schedule. The referenced ids are checked by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

// ==============================================================================
// Query projections
// ==============================================================================

/// Just enough of a venue to place it in the area listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VenueLocation {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
}

/// The start time of a show at a given venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VenueShowTime {
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

/// id + name, used for artist listings and search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NamedRecord {
    pub id: i64,
    pub name: String,
}

/// A show at a venue, joined with the performing artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: DateTime<Utc>,
}

/// A show by an artist, joined with the hosting venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// One row of the flat show listing, joined with both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ShowListing {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub venue_id: i64,
    pub venue_name: String,
}
