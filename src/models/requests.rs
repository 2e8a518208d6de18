use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::search::{decode_pairs, parse_field};

/// Request for a stay price breakdown
///
/// `GET /api/v1/listings/{id}/quote?checkIn=2024-03-01&checkOut=2024-03-04&guests=2`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    #[serde(alias = "check_in", rename = "checkIn")]
    pub check_in: NaiveDate,
    #[serde(alias = "check_out", rename = "checkOut")]
    pub check_out: NaiveDate,
    #[serde(default = "default_guests")]
    #[validate(range(min = 1))]
    pub guests: u32,
}

fn default_guests() -> u32 {
    1
}

/// Query parameters of the property detail page
///
/// Dates are optional here: the booking sidebar renders without a quote
/// until both are chosen. Parsed the same lenient way as the search page,
/// so blank, malformed or repeated values never fail the request. The last
/// occurrence of a repeated key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyPageQuery {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub reserve: Option<String>,
}

impl PropertyPageQuery {
    /// Parse a raw query string (without the leading `?`)
    pub fn from_query(query: &str) -> Self {
        let mut parsed = PropertyPageQuery::default();

        for (key, value) in decode_pairs(query) {
            match key.as_str() {
                "checkIn" | "check_in" => parsed.check_in = parse_field(&key, &value),
                "checkOut" | "check_out" => parsed.check_out = parse_field(&key, &value),
                "guests" => parsed.guests = parse_field(&key, &value),
                "reserve" => parsed.reserve = Some(value),
                _ => {}
            }
        }

        parsed
    }

    pub fn wants_reservation(&self) -> bool {
        matches!(self.reserve.as_deref(), Some("1") | Some("true"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_request_defaults_to_one_guest() {
        let req: QuoteRequest =
            serde_json::from_str(r#"{"checkIn":"2024-03-01","checkOut":"2024-03-04"}"#).unwrap();

        assert_eq!(req.guests, 1);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_quote_request_rejects_zero_guests() {
        let req: QuoteRequest = serde_json::from_str(
            r#"{"checkIn":"2024-03-01","checkOut":"2024-03-04","guests":0}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_property_query_tolerates_blank_dates() {
        let query = PropertyPageQuery::from_query("checkIn=&checkOut=2024-03-04&guests=x");

        assert_eq!(query.check_in, None);
        assert_eq!(query.check_out, NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(query.guests, None);
        assert!(!query.wants_reservation());
    }

    #[test]
    fn test_property_query_repeated_key_last_wins() {
        let query = PropertyPageQuery::from_query("guests=1&guests=2&reserve=1");

        assert_eq!(query.guests, Some(2));
        assert!(query.wants_reservation());
    }
}
