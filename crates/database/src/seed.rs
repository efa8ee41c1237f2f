//! The classic Fyyur demo listings, for local development.

use crate::{DbError, DbRepository};
use chrono::{DateTime, TimeZone, Utc};
use core_types::{Genre, NewArtist, NewShow, NewVenue};

/// Counts of what `seed_demo_data` inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub venues: usize,
    pub artists: usize,
    pub shows: usize,
}

fn demo_venues() -> Vec<NewVenue> {
    vec![
        NewVenue {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            genres: vec![Genre::Jazz, Genre::Reggae, Genre::Classical, Genre::Folk],
            image_link: Some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400".to_string()),
            facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
            website: "https://www.themusicalhop.com".to_string(),
            seeking_talent: true,
            seeking_description: Some(
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .to_string(),
            ),
        },
        NewVenue {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: "914-003-1132".to_string(),
            genres: vec![Genre::Classical, Genre::RAndB, Genre::HipHop],
            image_link: Some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=750".to_string()),
            facebook_link: "https://www.facebook.com/theduelingpianos".to_string(),
            website: "https://www.theduelingpianos.com".to_string(),
            seeking_talent: false,
            seeking_description: None,
        },
        NewVenue {
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: "415-000-1234".to_string(),
            genres: vec![Genre::RockNRoll, Genre::Jazz, Genre::Classical, Genre::Folk],
            image_link: Some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=747".to_string()),
            facebook_link: "https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string(),
            website: "https://www.parksquarelivemusicandcoffee.com".to_string(),
            seeking_talent: false,
            seeking_description: None,
        },
    ]
}

fn demo_artists() -> Vec<NewArtist> {
    vec![
        NewArtist {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: vec![Genre::RockNRoll],
            image_link: "https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300".to_string(),
            facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
            website: "https://www.gunsnpetalsband.com".to_string(),
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
            ),
        },
        NewArtist {
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: "300-400-5000".to_string(),
            genres: vec![Genre::Jazz],
            image_link: "https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334".to_string(),
            facebook_link: "https://www.facebook.com/mattquevedo923251523".to_string(),
            website: "https://www.mattquevedo.com".to_string(),
            seeking_venue: false,
            seeking_description: None,
        },
        NewArtist {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "432-325-5432".to_string(),
            genres: vec![Genre::Jazz, Genre::Classical],
            image_link: "https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794".to_string(),
            facebook_link: "https://www.facebook.com/thewildsaxband".to_string(),
            website: "https://www.thewildsaxband.com".to_string(),
            seeking_venue: false,
            seeking_description: None,
        },
    ]
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single()
}

/// Inserts three venues, three artists and five shows (two past, three upcoming
/// relative to any date before 2035).
pub async fn seed_demo_data(repo: &DbRepository) -> Result<SeedSummary, DbError> {
    let mut venue_ids = Vec::new();
    for venue in demo_venues() {
        venue_ids.push(repo.create_venue(&venue).await?.id);
    }
    let mut artist_ids = Vec::new();
    for artist in demo_artists() {
        artist_ids.push(repo.create_artist(&artist).await?.id);
    }

    // (artist index, venue index, start time)
    let schedule = [
        (0, 0, utc(2019, 5, 21, 21, 30)),
        (1, 2, utc(2019, 6, 15, 23, 0)),
        (2, 2, utc(2035, 4, 1, 20, 0)),
        (2, 2, utc(2035, 4, 8, 20, 0)),
        (2, 2, utc(2035, 4, 15, 20, 0)),
    ];

    let mut shows = 0;
    for (artist, venue, start_time) in schedule {
        let Some(start_time) = start_time else {
            tracing::warn!(artist, venue, "Skipping demo show with an invalid start time.");
            continue;
        };
        repo.create_show(&NewShow {
            artist_id: artist_ids[artist],
            venue_id: venue_ids[venue],
            start_time,
        })
        .await?;
        shows += 1;
    }

    tracing::info!(venues = venue_ids.len(), artists = artist_ids.len(), shows, "Demo data seeded.");
    Ok(SeedSummary {
        venues: venue_ids.len(),
        artists: artist_ids.len(),
        shows,
    })
}
