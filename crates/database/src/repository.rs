use crate::DbError;
use core_types::{
    Artist, ArtistShow, NamedRecord, NewArtist, NewShow, NewVenue, Show, ShowListing, Venue,
    VenueLocation, VenueShow, VenueShowTime,
};
use sqlx::sqlite::SqlitePool;
use sqlx::types::Json;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
///
/// Every mutation runs in its own transaction: it is committed on success and
/// rolled back (explicitly, or by dropping the transaction on `?`) on failure.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: SqlitePool,
}

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
     facebook_link, website, seeking_talent, seeking_description";

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website, seeking_venue, seeking_description";

/// Case-insensitive substring match. SQLite's `LIKE` and `lower()` fold ASCII
/// only, so both sides are folded here with full Unicode case mapping.
fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==========================================================================
    // Venues
    // ==========================================================================

    /// Fetches id, name and location of every venue.
    pub async fn get_venue_locations(&self) -> Result<Vec<VenueLocation>, DbError> {
        let venues = sqlx::query_as::<_, VenueLocation>(
            "SELECT id, name, city, state FROM venues ORDER BY state, city, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(venues)
    }

    /// Fetches the start time of every show, keyed by venue.
    pub async fn get_venue_show_times(&self) -> Result<Vec<VenueShowTime>, DbError> {
        let times = sqlx::query_as::<_, VenueShowTime>(
            "SELECT venue_id, start_time FROM shows ORDER BY venue_id, start_time",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(times)
    }

    /// Case-insensitive substring search on venue names.
    pub async fn search_venues(&self, term: &str) -> Result<Vec<NamedRecord>, DbError> {
        let venues = sqlx::query_as::<_, NamedRecord>("SELECT id, name FROM venues ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(venues.into_iter().filter(|v| name_matches(&v.name, term)).collect())
    }

    pub async fn get_venue(&self, venue_id: i64) -> Result<Venue, DbError> {
        sqlx::query_as::<_, Venue>(&format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = ?"))
            .bind(venue_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound { entity: "Venue", id: venue_id })
    }

    /// Fetches all shows at a venue joined with the performing artist, ordered by start time.
    pub async fn get_venue_shows(&self, venue_id: i64) -> Result<Vec<VenueShow>, DbError> {
        let shows = sqlx::query_as::<_, VenueShow>(
            r#"
            SELECT
                a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time AS start_time
            FROM
                shows AS s
            JOIN
                artists AS a ON a.id = s.artist_id
            WHERE
                s.venue_id = ?
            ORDER BY
                s.start_time, s.id
            "#,
        )
        .bind(venue_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }

    /// The most recently listed venues, newest first.
    pub async fn get_recent_venues(&self, limit: i64) -> Result<Vec<NamedRecord>, DbError> {
        let venues = sqlx::query_as::<_, NamedRecord>(
            "SELECT id, name FROM venues ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(venues)
    }

    /// Inserts a new venue and returns the stored record.
    pub async fn create_venue(&self, venue: &NewVenue) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Venue>(&format!(
            r#"
            INSERT INTO venues (
                name, city, state, address, phone, genres, image_link,
                facebook_link, website, seeking_talent, seeking_description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {VENUE_COLUMNS}
            "#
        ))
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(Json(&venue.genres))
        .bind(venue.image_link.as_deref())
        .bind(&venue.facebook_link)
        .bind(&venue.website)
        .bind(venue.seeking_talent)
        .bind(venue.seeking_description.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(venue_id = created.id, name = %created.name, "Venue listed.");
        Ok(created)
    }

    /// Replaces every editable field of an existing venue.
    pub async fn update_venue(&self, venue_id: i64, venue: &NewVenue) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Venue>(&format!(
            r#"
            UPDATE venues SET
                name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
                image_link = ?, facebook_link = ?, website = ?, seeking_talent = ?,
                seeking_description = ?
            WHERE id = ?
            RETURNING {VENUE_COLUMNS}
            "#
        ))
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(Json(&venue.genres))
        .bind(venue.image_link.as_deref())
        .bind(&venue.facebook_link)
        .bind(&venue.website)
        .bind(venue.seeking_talent)
        .bind(venue.seeking_description.as_deref())
        .bind(venue_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(updated) = updated else {
            tx.rollback().await?;
            return Err(DbError::NotFound { entity: "Venue", id: venue_id });
        };

        tx.commit().await?;
        tracing::info!(venue_id, "Venue edited.");
        Ok(updated)
    }

    /// Deletes a venue together with its shows and returns the removed record.
    pub async fn delete_venue(&self, venue_id: i64) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let venue = sqlx::query_as::<_, Venue>(&format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = ?"))
            .bind(venue_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(venue) = venue else {
            tx.rollback().await?;
            return Err(DbError::NotFound { entity: "Venue", id: venue_id });
        };

        // Shows go with it through ON DELETE CASCADE.
        sqlx::query("DELETE FROM venues WHERE id = ?")
            .bind(venue_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(venue_id, name = %venue.name, "Venue deleted.");
        Ok(venue)
    }

    // ==========================================================================
    // Artists
    // ==========================================================================

    /// Fetches id and name of every artist.
    pub async fn get_artists(&self) -> Result<Vec<NamedRecord>, DbError> {
        let artists = sqlx::query_as::<_, NamedRecord>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(artists)
    }

    /// Case-insensitive substring search on artist names.
    pub async fn search_artists(&self, term: &str) -> Result<Vec<NamedRecord>, DbError> {
        let artists = sqlx::query_as::<_, NamedRecord>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(artists.into_iter().filter(|a| name_matches(&a.name, term)).collect())
    }

    pub async fn get_artist(&self, artist_id: i64) -> Result<Artist, DbError> {
        sqlx::query_as::<_, Artist>(&format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = ?"))
            .bind(artist_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound { entity: "Artist", id: artist_id })
    }

    /// Fetches all shows of an artist joined with the hosting venue, ordered by start time.
    pub async fn get_artist_shows(&self, artist_id: i64) -> Result<Vec<ArtistShow>, DbError> {
        let shows = sqlx::query_as::<_, ArtistShow>(
            r#"
            SELECT
                v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                s.start_time AS start_time
            FROM
                shows AS s
            JOIN
                venues AS v ON v.id = s.venue_id
            WHERE
                s.artist_id = ?
            ORDER BY
                s.start_time, s.id
            "#,
        )
        .bind(artist_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }

    /// The most recently listed artists, newest first.
    pub async fn get_recent_artists(&self, limit: i64) -> Result<Vec<NamedRecord>, DbError> {
        let artists = sqlx::query_as::<_, NamedRecord>(
            "SELECT id, name FROM artists ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(artists)
    }

    /// Inserts a new artist and returns the stored record.
    pub async fn create_artist(&self, artist: &NewArtist) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Artist>(&format!(
            r#"
            INSERT INTO artists (
                name, city, state, phone, genres, image_link,
                facebook_link, website, seeking_venue, seeking_description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {ARTIST_COLUMNS}
            "#
        ))
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(Json(&artist.genres))
        .bind(&artist.image_link)
        .bind(&artist.facebook_link)
        .bind(&artist.website)
        .bind(artist.seeking_venue)
        .bind(artist.seeking_description.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(artist_id = created.id, name = %created.name, "Artist listed.");
        Ok(created)
    }

    /// Replaces every editable field of an existing artist.
    pub async fn update_artist(&self, artist_id: i64, artist: &NewArtist) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Artist>(&format!(
            r#"
            UPDATE artists SET
                name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?,
                facebook_link = ?, website = ?, seeking_venue = ?, seeking_description = ?
            WHERE id = ?
            RETURNING {ARTIST_COLUMNS}
            "#
        ))
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(Json(&artist.genres))
        .bind(&artist.image_link)
        .bind(&artist.facebook_link)
        .bind(&artist.website)
        .bind(artist.seeking_venue)
        .bind(artist.seeking_description.as_deref())
        .bind(artist_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(updated) = updated else {
            tx.rollback().await?;
            return Err(DbError::NotFound { entity: "Artist", id: artist_id });
        };

        tx.commit().await?;
        tracing::info!(artist_id, "Artist edited.");
        Ok(updated)
    }

    /// Deletes an artist that has no shows and returns the removed record.
    ///
    /// Artists are not cascaded: while any show references the artist the
    /// delete is refused with `DbError::ReferencedBy`.
    pub async fn delete_artist(&self, artist_id: i64) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let artist = sqlx::query_as::<_, Artist>(&format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = ?"))
            .bind(artist_id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(artist) = artist else {
            tx.rollback().await?;
            return Err(DbError::NotFound { entity: "Artist", id: artist_id });
        };

        let shows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows WHERE artist_id = ?")
            .bind(artist_id)
            .fetch_one(&mut *tx)
            .await?;
        if shows > 0 {
            tx.rollback().await?;
            return Err(DbError::ReferencedBy {
                entity: "Artist",
                name: artist.name,
                shows,
            });
        }

        sqlx::query("DELETE FROM artists WHERE id = ?")
            .bind(artist_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(artist_id, name = %artist.name, "Artist deleted.");
        Ok(artist)
    }

    // ==========================================================================
    // Shows
    // ==========================================================================

    /// Fetches every show joined with its artist and venue, ordered by show id.
    pub async fn get_shows(&self) -> Result<Vec<ShowListing>, DbError> {
        let shows = sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT
                s.id AS id, s.start_time AS start_time,
                a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                v.id AS venue_id, v.name AS venue_name
            FROM
                shows AS s
            JOIN
                artists AS a ON a.id = s.artist_id
            JOIN
                venues AS v ON v.id = s.venue_id
            ORDER BY
                s.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }

    /// Schedules a show after checking that both the artist and the venue exist.
    ///
    /// The checks and the insert share one transaction; on an unknown id
    /// nothing is written and `DbError::InvalidReference` names the field.
    pub async fn create_show(&self, show: &NewShow) -> Result<Show, DbError> {
        let mut tx = self.pool.begin().await?;

        let artists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists WHERE id = ?")
            .bind(show.artist_id)
            .fetch_one(&mut *tx)
            .await?;
        if artists == 0 {
            tx.rollback().await?;
            return Err(DbError::InvalidReference {
                field: "artist_id",
                message: "Artist ID not valid".to_string(),
            });
        }

        let venues: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues WHERE id = ?")
            .bind(show.venue_id)
            .fetch_one(&mut *tx)
            .await?;
        if venues == 0 {
            tx.rollback().await?;
            return Err(DbError::InvalidReference {
                field: "venue_id",
                message: "Venue ID not valid".to_string(),
            });
        }

        let created = sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (artist_id, venue_id, start_time)
            VALUES (?, ?, ?)
            RETURNING id, artist_id, venue_id, start_time
            "#,
        )
        .bind(show.artist_id)
        .bind(show.venue_id)
        .bind(show.start_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(
            show_id = created.id,
            artist_id = created.artist_id,
            venue_id = created.venue_id,
            "Show listed."
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::name_matches;

    #[test]
    fn matching_folds_case() {
        assert!(name_matches("The Musical Hop", "hop"));
        assert!(name_matches("ÉCOLE DE MUSIQUE", "école"));
        assert!(name_matches("100% Jazz", "100%"));
        assert!(!name_matches("1000 Jazz", "100%"));
        assert!(name_matches("anything", ""));
    }
}
