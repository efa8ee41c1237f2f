pub mod enums;
pub mod error;
pub mod schedule;
pub mod structs;
pub mod views;

// Re-export the core types to provide a clean public API.
pub use enums::{Genre, US_STATES, is_us_state};
pub use error::CoreError;
pub use schedule::{Scheduled, ShowSplit, ShowTiming};
pub use structs::{
    Artist, ArtistShow, NamedRecord, NewArtist, NewShow, NewVenue, Show, ShowListing, Venue,
    VenueLocation, VenueShow, VenueShowTime,
};
pub use views::{ArtistDetail, VenueArea, VenueDetail, VenueSummary, group_by_area};
