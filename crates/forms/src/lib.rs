//! Submission forms for venues, artists and shows.
//!
//! A form is deserialized from the request body exactly as submitted (every
//! value a string, missing fields empty), validated with `garde`, and only then
//! converted into the domain input consumed by the repository.

use chrono::{DateTime, Utc};
use core_types::{Genre, NewArtist, NewShow, NewVenue, US_STATES};
use garde::Validate;
use serde::{Deserialize, Deserializer, Serialize};

pub mod error;
pub mod rules;

pub use error::{FieldError, FormErrors};

/// Treats empty and whitespace-only values of optional fields as absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()))
}

/// Strips surrounding whitespace in place, so length rules see the stored value.
fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

// ==============================================================================
// Venue
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct VenueForm {
    #[garde(custom(rules::required))]
    pub name: String,
    #[garde(custom(rules::required), length(chars, min = 5, max = 120))]
    pub city: String,
    #[garde(custom(rules::required), custom(rules::state_choice))]
    pub state: String,
    #[garde(custom(rules::required), length(chars, max = 120))]
    pub address: String,
    #[garde(custom(rules::required), length(chars, min = 10, max = 16))]
    pub phone: String,
    #[serde(deserialize_with = "empty_as_none")]
    #[garde(url, length(chars, min = 5, max = 500))]
    pub image_link: Option<String>,
    #[garde(custom(rules::genre_choices))]
    pub genres: Vec<String>,
    #[garde(url, length(chars, min = 5, max = 120))]
    pub facebook_link: String,
    #[garde(url, length(chars, min = 5, max = 120))]
    pub website: String,
    #[garde(custom(rules::boolean_flag))]
    pub seeking_talent: String,
    #[serde(deserialize_with = "empty_as_none")]
    #[garde(length(chars, max = 200))]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    fn trim(&mut self) {
        for field in [
            &mut self.name,
            &mut self.city,
            &mut self.state,
            &mut self.address,
            &mut self.phone,
            &mut self.facebook_link,
            &mut self.website,
        ] {
            trim_in_place(field);
        }
    }

    /// Trims, validates and converts the submission into a `NewVenue`.
    pub fn into_new_venue(mut self) -> Result<NewVenue, FormErrors> {
        self.trim();
        self.validate()?;

        Ok(NewVenue {
            genres: rules::parse_genres(&self.genres),
            seeking_talent: rules::parse_flag(&self.seeking_talent).unwrap_or(false),
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_description: self.seeking_description,
        })
    }
}

// ==============================================================================
// Artist
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ArtistForm {
    #[garde(custom(rules::required))]
    pub name: String,
    #[garde(custom(rules::required), length(chars, min = 5, max = 120))]
    pub city: String,
    #[garde(custom(rules::required), custom(rules::state_choice))]
    pub state: String,
    #[garde(custom(rules::required), length(chars, min = 10, max = 16))]
    pub phone: String,
    #[garde(url, length(chars, min = 5, max = 500))]
    pub image_link: String,
    #[garde(custom(rules::genre_choices))]
    pub genres: Vec<String>,
    #[garde(url, length(chars, min = 5, max = 120))]
    pub facebook_link: String,
    #[garde(url, length(chars, min = 5, max = 120))]
    pub website: String,
    #[garde(custom(rules::boolean_flag))]
    pub seeking_venue: String,
    #[serde(deserialize_with = "empty_as_none")]
    #[garde(length(chars, max = 200))]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    fn trim(&mut self) {
        for field in [
            &mut self.name,
            &mut self.city,
            &mut self.state,
            &mut self.phone,
            &mut self.image_link,
            &mut self.facebook_link,
            &mut self.website,
        ] {
            trim_in_place(field);
        }
    }

    /// Trims, validates and converts the submission into a `NewArtist`.
    pub fn into_new_artist(mut self) -> Result<NewArtist, FormErrors> {
        self.trim();
        self.validate()?;

        Ok(NewArtist {
            genres: rules::parse_genres(&self.genres),
            seeking_venue: rules::parse_flag(&self.seeking_venue).unwrap_or(false),
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_description: self.seeking_description,
        })
    }
}

// ==============================================================================
// Show
// ==============================================================================

/// Only the shape of the references is checked here; whether the artist and
/// venue exist is decided by the repository.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ShowForm {
    #[garde(custom(rules::required), custom(rules::record_id))]
    pub artist_id: String,
    #[garde(custom(rules::required), custom(rules::record_id))]
    pub venue_id: String,
    #[garde(custom(rules::required), custom(rules::start_time))]
    pub start_time: String,
}

impl ShowForm {
    /// Validates the submission and converts it into a `NewShow`.
    pub fn into_new_show(self) -> Result<NewShow, FormErrors> {
        self.validate()?;

        let artist_id = rules::parse_id(&self.artist_id)
            .ok_or_else(|| FormErrors::single("artist_id", "Must be a positive whole number."))?;
        let venue_id = rules::parse_id(&self.venue_id)
            .ok_or_else(|| FormErrors::single("venue_id", "Must be a positive whole number."))?;
        let start_time = rules::parse_start_time(&self.start_time)
            .ok_or_else(|| FormErrors::single("start_time", "Not a valid datetime value."))?;

        Ok(NewShow { artist_id, venue_id, start_time })
    }
}

// ==============================================================================
// Choices offered to clients
// ==============================================================================

/// The selectable values of the venue and artist forms.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub genres: Vec<&'static str>,
    pub states: &'static [&'static str],
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            genres: Genre::ALL.iter().map(Genre::label).collect(),
            states: US_STATES,
        }
    }
}

/// Defaults for a blank show form: the start time is prefilled with `now`.
#[derive(Debug, Clone, Serialize)]
pub struct ShowFormDefaults {
    pub start_time: String,
}

impl ShowFormDefaults {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_venue() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            image_link: Some("https://example.com/hop.png".to_string()),
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
            website: "https://www.themusicalhop.com".to_string(),
            seeking_talent: "y".to_string(),
            seeking_description: None,
        }
    }

    fn valid_artist() -> ArtistForm {
        ArtistForm {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            image_link: "https://example.com/gnp.png".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
            website: "https://www.gunsnpetalsband.com".to_string(),
            seeking_venue: String::new(),
            seeking_description: Some("Looking for shows".to_string()),
        }
    }

    #[test]
    fn valid_venue_converts() {
        let venue = valid_venue().into_new_venue().unwrap();
        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.genres, vec![Genre::Jazz, Genre::Folk]);
        assert!(venue.seeking_talent);
    }

    #[test]
    fn three_character_city_is_rejected() {
        let form = VenueForm { city: "SFO".to_string(), ..valid_venue() };
        let errors = form.into_new_venue().unwrap_err();
        assert_eq!(errors.fields(), vec!["city"]);
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let errors = VenueForm::default().into_new_venue().unwrap_err();
        for field in ["name", "city", "state", "address", "phone", "genres", "facebook_link", "website"] {
            assert!(errors.has_field(field), "expected an error for {field}");
        }
        // Optional fields stay quiet when absent.
        assert!(!errors.has_field("image_link"));
        assert!(!errors.has_field("seeking_description"));
        assert!(!errors.has_field("seeking_talent"));
    }

    #[test]
    fn padding_does_not_count_towards_length() {
        let form = VenueForm {
            city: "   SF   ".to_string(),
            phone: "   123456789".to_string(),
            ..valid_venue()
        };
        let errors = form.into_new_venue().unwrap_err();
        assert!(errors.has_field("city"));
        assert!(errors.has_field("phone"));

        let form = ArtistForm { city: "  SFO  ".to_string(), ..valid_artist() };
        assert_eq!(form.into_new_artist().unwrap_err().fields(), vec!["city"]);
    }

    #[test]
    fn stored_values_are_trimmed() {
        let form = VenueForm {
            name: "  The Musical Hop ".to_string(),
            city: " San Francisco ".to_string(),
            phone: " 123-123-1234 ".to_string(),
            ..valid_venue()
        };
        let venue = form.into_new_venue().unwrap();
        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.city, "San Francisco");
        assert_eq!(venue.phone, "123-123-1234");
    }

    #[test]
    fn phone_length_bounds() {
        let short = VenueForm { phone: "123".to_string(), ..valid_venue() };
        assert!(short.into_new_venue().unwrap_err().has_field("phone"));
        let long = VenueForm { phone: "1".repeat(17), ..valid_venue() };
        assert!(long.into_new_venue().unwrap_err().has_field("phone"));
        let ok = VenueForm { phone: "1".repeat(16), ..valid_venue() };
        assert!(ok.into_new_venue().is_ok());
    }

    #[test]
    fn links_must_be_urls() {
        let form = VenueForm { website: "not a url".to_string(), ..valid_venue() };
        assert_eq!(form.into_new_venue().unwrap_err().fields(), vec!["website"]);

        let form = VenueForm { image_link: Some("nope".to_string()), ..valid_venue() };
        assert!(form.into_new_venue().unwrap_err().has_field("image_link"));
    }

    #[test]
    fn unknown_state_and_genre_are_rejected() {
        let form = VenueForm {
            state: "XX".to_string(),
            genres: vec!["Swing".to_string()],
            ..valid_venue()
        };
        let errors = form.into_new_venue().unwrap_err();
        assert!(errors.has_field("state"));
        assert!(errors.has_field("genres"));
    }

    #[test]
    fn odd_boolean_is_rejected() {
        let form = VenueForm { seeking_talent: "sometimes".to_string(), ..valid_venue() };
        assert_eq!(form.into_new_venue().unwrap_err().fields(), vec!["seeking_talent"]);
    }

    #[test]
    fn artist_does_not_need_an_address() {
        let artist = valid_artist().into_new_artist().unwrap();
        assert_eq!(artist.genres, vec![Genre::RockNRoll]);
        assert!(!artist.seeking_venue);
        assert_eq!(artist.seeking_description.as_deref(), Some("Looking for shows"));
    }

    #[test]
    fn artist_requires_an_image() {
        let form = ArtistForm { image_link: String::new(), ..valid_artist() };
        assert!(form.into_new_artist().unwrap_err().has_field("image_link"));
    }

    #[test]
    fn show_form_parses_references_and_time() {
        let form = ShowForm {
            artist_id: "4".to_string(),
            venue_id: "1".to_string(),
            start_time: "2035-04-01 20:00:00".to_string(),
        };
        let show = form.into_new_show().unwrap();
        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(show.start_time.to_rfc3339(), "2035-04-01T20:00:00+00:00");
    }

    #[test]
    fn show_form_rejects_bad_values() {
        let form = ShowForm {
            artist_id: "abc".to_string(),
            venue_id: String::new(),
            start_time: "tomorrow".to_string(),
        };
        let errors = form.into_new_show().unwrap_err();
        assert!(errors.has_field("artist_id"));
        assert!(errors.has_field("venue_id"));
        assert!(errors.has_field("start_time"));
    }

    #[test]
    fn options_list_every_choice() {
        let options = FormOptions::default();
        assert_eq!(options.genres.len(), Genre::ALL.len());
        assert!(options.genres.contains(&"Hip-Hop"));
        assert_eq!(options.states.len(), 51);
    }
}
