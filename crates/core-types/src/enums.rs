use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of music genres a venue or artist can be tagged with.
///
/// Serialized by its human-readable label (e.g. `"Hip-Hop"`, `"R&B"`), which is
/// also what is stored in the `genres` JSON column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    #[serde(rename = "Hip-Hop")]
    HipHop,
    #[serde(rename = "Heavy Metal")]
    HeavyMetal,
    Instrumental,
    Jazz,
    #[serde(rename = "Musical Theatre")]
    MusicalTheatre,
    Pop,
    Punk,
    #[serde(rename = "R&B")]
    RAndB,
    Reggae,
    #[serde(rename = "Rock n Roll")]
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    /// Every genre, in the order they are offered as form choices.
    pub const ALL: &'static [Genre] = &[
        Genre::Alternative,
        Genre::Blues,
        Genre::Classical,
        Genre::Country,
        Genre::Electronic,
        Genre::Folk,
        Genre::Funk,
        Genre::HipHop,
        Genre::HeavyMetal,
        Genre::Instrumental,
        Genre::Jazz,
        Genre::MusicalTheatre,
        Genre::Pop,
        Genre::Punk,
        Genre::RAndB,
        Genre::Reggae,
        Genre::RockNRoll,
        Genre::Soul,
        Genre::Other,
    ];

    /// Returns the label used on the wire and in the database.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Alternative => "Alternative",
            Genre::Blues => "Blues",
            Genre::Classical => "Classical",
            Genre::Country => "Country",
            Genre::Electronic => "Electronic",
            Genre::Folk => "Folk",
            Genre::Funk => "Funk",
            Genre::HipHop => "Hip-Hop",
            Genre::HeavyMetal => "Heavy Metal",
            Genre::Instrumental => "Instrumental",
            Genre::Jazz => "Jazz",
            Genre::MusicalTheatre => "Musical Theatre",
            Genre::Pop => "Pop",
            Genre::Punk => "Punk",
            Genre::RAndB => "R&B",
            Genre::Reggae => "Reggae",
            Genre::RockNRoll => "Rock n Roll",
            Genre::Soul => "Soul",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|genre| genre.label() == s)
            .ok_or_else(|| CoreError::UnknownGenre(s.to_string()))
    }
}

/// Two-letter state codes accepted for a venue or artist location.
pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Returns true if `code` is one of the accepted state codes.
pub fn is_us_state(code: &str) -> bool {
    US_STATES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for genre in Genre::ALL {
            assert_eq!(genre.label().parse::<Genre>(), Ok(*genre));
        }
    }

    #[test]
    fn unknown_genre_is_rejected() {
        assert_eq!(
            "Swing".parse::<Genre>(),
            Err(CoreError::UnknownGenre("Swing".to_string()))
        );
        // Labels are matched exactly.
        assert!("hip-hop".parse::<Genre>().is_err());
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&vec![Genre::RAndB, Genre::RockNRoll]).unwrap();
        assert_eq!(json, r#"["R&B","Rock n Roll"]"#);
        let back: Vec<Genre> = serde_json::from_str(r#"["Hip-Hop","Jazz"]"#).unwrap();
        assert_eq!(back, vec![Genre::HipHop, Genre::Jazz]);
    }

    #[test]
    fn state_codes() {
        assert_eq!(US_STATES.len(), 51);
        assert!(is_us_state("DC"));
        assert!(is_us_state("CA"));
        assert!(!is_us_state("ca"));
        assert!(!is_us_state("ZZ"));
    }
}
