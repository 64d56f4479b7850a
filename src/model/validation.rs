use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// Validation errors for trip-form fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("trip name cannot be empty")]
    EmptyTripName,
    #[error("invalid travel date: {0}")]
    InvalidTravelDate(String),
}

static TRAVEL_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid hardcoded regex"));

/// Validates a trip name: must contain at least one non-whitespace character.
pub fn validate_trip_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyTripName)
    } else {
        Ok(())
    }
}

/// Validates a travel date in `YYYY-MM-DD` form.
///
/// The string must match the date-input shape and name a real calendar day
/// (`2026-02-30` is rejected even though it matches the pattern).
pub fn validate_travel_date(date: &str) -> Result<(), ValidationError> {
    parse_travel_date(date).map(|_| ())
}

/// Parses a travel date in `YYYY-MM-DD` form.
pub fn parse_travel_date(date: &str) -> Result<NaiveDate, ValidationError> {
    if !TRAVEL_DATE_RE.is_match(date) {
        return Err(ValidationError::InvalidTravelDate(date.to_string()));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidTravelDate(date.to_string()))
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- validate_trip_name ---

    #[test]
    fn name_simple() {
        assert_eq!(validate_trip_name("Spring Break"), Ok(()));
    }

    #[test]
    fn name_empty() {
        assert_eq!(validate_trip_name(""), Err(ValidationError::EmptyTripName));
    }

    #[test]
    fn name_whitespace_only() {
        assert_eq!(
            validate_trip_name("   \t"),
            Err(ValidationError::EmptyTripName)
        );
    }

    #[test]
    fn name_single_char() {
        assert_eq!(validate_trip_name("x"), Ok(()));
    }

    #[quickcheck]
    fn name_with_any_nonspace_char_is_valid(s: String) -> bool {
        if s.trim().is_empty() {
            return true; // skip
        }
        validate_trip_name(&s).is_ok()
    }

    // --- validate_travel_date ---

    #[test]
    fn date_valid() {
        assert_eq!(validate_travel_date("2026-08-14"), Ok(()));
    }

    #[test]
    fn date_empty() {
        assert_eq!(
            validate_travel_date(""),
            Err(ValidationError::InvalidTravelDate(String::new()))
        );
    }

    #[test]
    fn date_wrong_shape() {
        assert_eq!(
            validate_travel_date("08/14/2026"),
            Err(ValidationError::InvalidTravelDate("08/14/2026".to_string()))
        );
    }

    #[test]
    fn date_missing_day() {
        assert_eq!(
            validate_travel_date("2026-08"),
            Err(ValidationError::InvalidTravelDate("2026-08".to_string()))
        );
    }

    #[test]
    fn date_nonexistent_day() {
        assert_eq!(
            validate_travel_date("2026-02-30"),
            Err(ValidationError::InvalidTravelDate("2026-02-30".to_string()))
        );
    }

    #[test]
    fn date_month_out_of_range() {
        assert_eq!(
            validate_travel_date("2026-13-01"),
            Err(ValidationError::InvalidTravelDate("2026-13-01".to_string()))
        );
    }

    #[test]
    fn date_leap_day_valid() {
        assert_eq!(validate_travel_date("2028-02-29"), Ok(()));
    }

    #[test]
    fn date_leap_day_invalid_in_common_year() {
        assert_eq!(
            validate_travel_date("2026-02-29"),
            Err(ValidationError::InvalidTravelDate("2026-02-29".to_string()))
        );
    }

    #[test]
    fn date_with_trailing_space_rejected() {
        assert_eq!(
            validate_travel_date("2026-08-14 "),
            Err(ValidationError::InvalidTravelDate("2026-08-14 ".to_string()))
        );
    }

    // --- parse_travel_date ---

    #[test]
    fn parse_returns_calendar_date() {
        let date = parse_travel_date("2026-08-14").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 14).unwrap());
    }

    #[quickcheck]
    fn parse_round_trips_any_real_date(year: u16, month: u8, day: u8) -> bool {
        let year = i32::from(year % 4000) + 1;
        let month = u32::from(month % 12) + 1;
        let day = u32::from(day % 31) + 1;
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return true; // skip days that don't exist in this month
        };
        let formatted = date.format("%Y-%m-%d").to_string();
        parse_travel_date(&formatted) == Ok(date)
    }
}
