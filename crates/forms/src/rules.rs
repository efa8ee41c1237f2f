//! Field rules that garde does not ship, plus the parsers the forms share.
//!
//! Custom rules take the field by reference together with the (unit) context.
#![allow(clippy::ptr_arg)]

use chrono::{DateTime, NaiveDateTime, Utc};
use core_types::{Genre, is_us_state};

/// Input formats accepted for a show's start time, besides RFC 3339.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// The field must contain something other than whitespace.
pub fn required(value: &String, _ctx: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    Ok(())
}

/// The field must be one of the state choices. Empty values are left to `required`.
pub fn state_choice(value: &String, _ctx: &()) -> garde::Result {
    if !value.is_empty() && !is_us_state(value) {
        return Err(garde::Error::new(format!("'{value}' is not a valid state.")));
    }
    Ok(())
}

/// At least one genre, each one of the known labels.
pub fn genre_choices(values: &Vec<String>, _ctx: &()) -> garde::Result {
    if values.is_empty() {
        return Err(garde::Error::new("Select at least one genre."));
    }
    let unknown: Vec<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|v| v.parse::<Genre>().is_err())
        .collect();
    if !unknown.is_empty() {
        let allowed: Vec<&str> = Genre::ALL.iter().map(Genre::label).collect();
        return Err(garde::Error::new(format!(
            "Invalid value {}, must be one of: {}.",
            unknown.join(", "),
            allowed.join(",")
        )));
    }
    Ok(())
}

/// A checkbox value that reads as either true or false.
pub fn boolean_flag(value: &String, _ctx: &()) -> garde::Result {
    if parse_flag(value).is_none() {
        return Err(garde::Error::new("Must be true or false."));
    }
    Ok(())
}

/// A positive integer record id.
pub fn record_id(value: &String, _ctx: &()) -> garde::Result {
    if !value.trim().is_empty() && parse_id(value).is_none() {
        return Err(garde::Error::new("Must be a positive whole number."));
    }
    Ok(())
}

/// A parseable start time.
pub fn start_time(value: &String, _ctx: &()) -> garde::Result {
    if !value.trim().is_empty() && parse_start_time(value).is_none() {
        return Err(garde::Error::new("Not a valid datetime value (expected YYYY-MM-DD HH:MM:SS)."));
    }
    Ok(())
}

/// Reads a checkbox value. Absent and empty mean false.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "on" | "1" => Some(true),
        "" | "n" | "no" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Parses a start time. Values without an offset are taken as UTC.
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Converts already validated genre labels.
pub fn parse_genres(values: &[String]) -> Vec<Genre> {
    values.iter().filter_map(|v| v.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn flags() {
        for yes in ["y", "Yes", "TRUE", "on", "1"] {
            assert_eq!(parse_flag(yes), Some(true), "{yes}");
        }
        for no in ["", "n", "no", "False", "off", "0"] {
            assert_eq!(parse_flag(no), Some(false), "{no}");
        }
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn ids() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(" 3 "), Some(3));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-4"), None);
        assert_eq!(parse_id("abc"), None);
    }

    #[test]
    fn start_times() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        assert_eq!(parse_start_time("2035-04-01 20:00:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T20:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T22:00:00+02:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T20:00:00Z"), Some(expected));
        assert_eq!(parse_start_time("next tuesday"), None);
    }

    #[test]
    fn genre_rule() {
        assert!(genre_choices(&vec!["Jazz".to_string(), "R&B".to_string()], &()).is_ok());
        assert!(genre_choices(&vec![], &()).is_err());
        assert!(genre_choices(&vec!["Jazz".to_string(), "Swing".to_string()], &()).is_err());
    }

    #[test]
    fn state_rule() {
        assert!(state_choice(&"NY".to_string(), &()).is_ok());
        assert!(state_choice(&"XX".to_string(), &()).is_err());
        // Empty is reported by `required`, not here.
        assert!(state_choice(&String::new(), &()).is_ok());
    }
}
