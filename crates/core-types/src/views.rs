//! Aggregated read models built from the persisted records.

use crate::schedule::{ShowSplit, ShowTiming};
use crate::structs::{Artist, ArtistShow, Venue, VenueLocation, VenueShow, VenueShowTime};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A venue with its shows split into past and upcoming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowSplit<VenueShow>,
}

impl VenueDetail {
    pub fn new(venue: Venue, shows: Vec<VenueShow>, now: DateTime<Utc>) -> Self {
        Self {
            venue,
            shows: ShowSplit::new(shows, now),
        }
    }
}

/// An artist with its shows split into past and upcoming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowSplit<ArtistShow>,
}

impl ArtistDetail {
    pub fn new(artist: Artist, shows: Vec<ArtistShow>, now: DateTime<Utc>) -> Self {
        Self {
            artist,
            shows: ShowSplit::new(shows, now),
        }
    }
}

/// A venue entry inside an area of the venue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Groups venues by (city, state) and counts each venue's upcoming shows.
///
/// Areas are ordered by state then city; venues inside an area by id.
pub fn group_by_area(
    venues: Vec<VenueLocation>,
    show_times: &[VenueShowTime],
    now: DateTime<Utc>,
) -> Vec<VenueArea> {
    let mut upcoming: HashMap<i64, usize> = HashMap::new();
    for show in show_times {
        if ShowTiming::classify(show.start_time, now) == ShowTiming::Upcoming {
            *upcoming.entry(show.venue_id).or_default() += 1;
        }
    }

    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.state, venue.city))
            .or_default()
            .push(VenueSummary {
                id: venue.id,
                num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
                name: venue.name,
            });
    }

    areas
        .into_iter()
        .map(|((state, city), mut venues)| {
            venues.sort_by_key(|v| v.id);
            VenueArea { city, state, venues }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Genre;
    use chrono::TimeZone;

    fn location(id: i64, name: &str, city: &str, state: &str) -> VenueLocation {
        VenueLocation {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        }
    }

    #[test]
    fn groups_venues_by_city_and_state() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let venues = vec![
            location(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            location(2, "The Dueling Pianos Bar", "New York", "NY"),
            location(1, "The Musical Hop", "San Francisco", "CA"),
        ];
        let show_times = vec![
            VenueShowTime { venue_id: 3, start_time: now + chrono::Duration::days(3) },
            VenueShowTime { venue_id: 3, start_time: now - chrono::Duration::days(3) },
            VenueShowTime { venue_id: 1, start_time: now },
        ];

        let areas = group_by_area(venues, &show_times, now);

        assert_eq!(areas.len(), 2);
        assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("San Francisco", "CA"));
        assert_eq!((areas[1].city.as_str(), areas[1].state.as_str()), ("New York", "NY"));

        let sf: Vec<_> = areas[0].venues.iter().map(|v| (v.id, v.num_upcoming_shows)).collect();
        assert_eq!(sf, vec![(1, 1), (3, 1)]);
        assert_eq!(areas[1].venues[0].num_upcoming_shows, 0);
    }

    #[test]
    fn same_city_in_different_states_is_two_areas() {
        let now = Utc::now();
        let venues = vec![
            location(1, "A", "Portland", "OR"),
            location(2, "B", "Portland", "ME"),
        ];
        let areas = group_by_area(venues, &[], now);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "ME");
        assert_eq!(areas[1].state, "OR");
    }

    #[test]
    fn venue_detail_serializes_flat() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let venue = Venue {
            id: 7,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            genres: vec![Genre::Jazz],
            image_link: None,
            facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
            website: "https://www.themusicalhop.com".to_string(),
            seeking_talent: true,
            seeking_description: None,
        };
        let shows = vec![VenueShow {
            artist_id: 4,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: "https://example.com/g.png".to_string(),
            start_time: now - chrono::Duration::days(1),
        }];

        let json = serde_json::to_value(VenueDetail::new(venue, shows, now)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["genres"][0], "Jazz");
        assert_eq!(json["past_shows_count"], 1);
        assert_eq!(json["upcoming_shows_count"], 0);
        assert_eq!(json["past_shows"][0]["artist_name"], "Guns N Petals");
    }
}
