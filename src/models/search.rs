use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::filters::Predicate;

/// Upper bound of the price slider when nothing else is configured
pub const DEFAULT_PRICE_CEILING: u32 = 500;

/// Search parameters as read from a navigation query string
///
/// Field names on the wire: `location`, `checkIn`, `checkOut`, `guests`,
/// `minPrice`, `maxPrice`, `bedrooms` and repeated `amenities`. Values that
/// do not parse are dropped; they never make the request fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub location: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub bedrooms: Option<u32>,
    pub amenities: Vec<String>,
}

impl SearchParams {
    /// Parse a raw query string (without the leading `?`)
    pub fn from_query(query: &str) -> Self {
        let mut params = SearchParams::default();

        for (key, value) in decode_pairs(query) {
            match key.as_str() {
                "location" => params.location = non_empty(value),
                "checkIn" => params.check_in = parse_field(&key, &value),
                "checkOut" => params.check_out = parse_field(&key, &value),
                "guests" => params.guests = parse_field(&key, &value),
                "minPrice" => params.min_price = parse_field(&key, &value),
                "maxPrice" => params.max_price = parse_field(&key, &value),
                "bedrooms" => params.bedrooms = parse_field(&key, &value),
                "amenities" => {
                    if !value.is_empty() && !params.amenities.contains(&value) {
                        params.amenities.push(value);
                    }
                }
                _ => {}
            }
        }

        params
    }
}

/// Split `a=1&b=2` into decoded pairs; `+` decodes to a space
pub fn decode_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = decode_component(parts.next()?)?;
            let value = decode_component(parts.next().unwrap_or(""))?;
            Some((key, value))
        })
        .collect()
}

fn decode_component(raw: &str) -> Option<String> {
    match urlencoding::decode(&raw.replace('+', " ")) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            tracing::debug!("Dropping undecodable query component {:?}: {}", raw, e);
            None
        }
    }
}

pub(crate) fn parse_field<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::debug!("Ignoring unparseable {}={:?}", key, value);
            None
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Current search constraints for one browsing session
///
/// Snapshots are immutable in practice: every transition returns a new
/// `FilterState`, so the evaluator only ever sees a complete value. A field
/// set to `None` (or an empty amenity set) contributes no predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub location: Option<String>,
    #[serde(rename = "checkIn")]
    pub check_in: Option<NaiveDate>,
    #[serde(rename = "checkOut")]
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<u32>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<u32>,
    pub bedrooms: Option<u32>,
    pub amenities: BTreeSet<String>,
    #[serde(skip)]
    price_ceiling: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_CEILING)
    }
}

impl FilterState {
    pub fn new(price_ceiling: u32) -> Self {
        Self {
            location: None,
            check_in: None,
            check_out: None,
            guests: None,
            min_price: None,
            max_price: None,
            bedrooms: None,
            amenities: BTreeSet::new(),
            price_ceiling,
        }
    }

    /// Build the initial state of a session from navigation parameters
    pub fn from_params(params: SearchParams, price_ceiling: u32) -> Self {
        let min = params.min_price.unwrap_or(0);
        let max = params.max_price.unwrap_or(price_ceiling);
        let bedrooms = params.bedrooms;
        let amenities = params.amenities.iter().cloned().collect();

        let state = Self::new(price_ceiling)
            .merge_search(params)
            .with_price_range(min, max)
            .with_bedrooms(bedrooms);

        Self { amenities, ..state }
    }

    pub fn price_ceiling(&self) -> u32 {
        self.price_ceiling
    }

    /// Price bounds as shown on the slider, defaults filled in
    pub fn price_range(&self) -> (u32, u32) {
        (
            self.min_price.unwrap_or(0),
            self.max_price.unwrap_or(self.price_ceiling),
        )
    }

    /// Back to defaults, keeping the configured price ceiling
    pub fn cleared(&self) -> Self {
        Self::new(self.price_ceiling)
    }

    pub fn with_location(&self, location: &str) -> Self {
        Self {
            location: non_empty(location.to_string()),
            ..self.clone()
        }
    }

    pub fn without_location(&self) -> Self {
        Self { location: None, ..self.clone() }
    }

    pub fn with_guests(&self, guests: Option<u32>) -> Self {
        Self { guests, ..self.clone() }
    }

    pub fn without_guests(&self) -> Self {
        self.with_guests(None)
    }

    pub fn with_bedrooms(&self, bedrooms: Option<u32>) -> Self {
        Self { bedrooms, ..self.clone() }
    }

    pub fn without_bedrooms(&self) -> Self {
        self.with_bedrooms(None)
    }

    /// Select an "N+" bedroom button; selecting the current one unsets it
    pub fn toggle_bedrooms(&self, bedrooms: u32) -> Self {
        if self.bedrooms == Some(bedrooms) {
            self.without_bedrooms()
        } else {
            self.with_bedrooms(Some(bedrooms))
        }
    }

    /// Set both price bounds; bounds equal to the defaults become inactive
    pub fn with_price_range(&self, min: u32, max: u32) -> Self {
        Self {
            min_price: (min != 0).then_some(min),
            max_price: (max != self.price_ceiling).then_some(max),
            ..self.clone()
        }
    }

    pub fn toggle_amenity(&self, amenity: &str) -> Self {
        let mut amenities = self.amenities.clone();
        if !amenities.remove(amenity) {
            amenities.insert(amenity.to_string());
        }
        Self { amenities, ..self.clone() }
    }

    /// Overlay the search-bar fields, leaving sidebar filters untouched
    pub fn merge_search(&self, params: SearchParams) -> Self {
        Self {
            location: params.location.and_then(non_empty),
            check_in: params.check_in,
            check_out: params.check_out,
            guests: params.guests,
            ..self.clone()
        }
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.contains(amenity)
    }

    /// Predicates for every field that is set, in a fixed order
    pub fn active_predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(location) = &self.location {
            predicates.push(Predicate::Location(location.clone()));
        }
        if let Some(guests) = self.guests {
            predicates.push(Predicate::MinGuests(guests));
        }
        if let Some(min) = self.min_price {
            predicates.push(Predicate::MinPrice(min));
        }
        if let Some(max) = self.max_price {
            predicates.push(Predicate::MaxPrice(max));
        }
        if let Some(bedrooms) = self.bedrooms {
            predicates.push(Predicate::MinBedrooms(bedrooms));
        }
        if !self.amenities.is_empty() {
            predicates.push(Predicate::Amenities(self.amenities.clone()));
        }

        predicates
    }

    pub fn is_cleared(&self) -> bool {
        self.active_predicates().is_empty()
    }

    /// Encode the state back into navigation parameters
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(check_in) = self.check_in {
            pairs.push(("checkIn", check_in.to_string()));
        }
        if let Some(check_out) = self.check_out {
            pairs.push(("checkOut", check_out.to_string()));
        }
        if let Some(guests) = self.guests {
            pairs.push(("guests", guests.to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        if let Some(bedrooms) = self.bedrooms {
            pairs.push(("bedrooms", bedrooms.to_string()));
        }
        for amenity in &self.amenities {
            pairs.push(("amenities", amenity.clone()));
        }

        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Link to the search page for this state
    pub fn search_href(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/search".to_string()
        } else {
            format!("/search?{}", query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_params() {
        let params = SearchParams::from_query(
            "location=New+York&checkIn=2024-03-01&checkOut=2024-03-04&guests=3",
        );

        assert_eq!(params.location.as_deref(), Some("New York"));
        assert_eq!(params.check_in, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(params.check_out, NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(params.guests, Some(3));
    }

    #[test]
    fn test_parse_repeated_amenities() {
        let params = SearchParams::from_query("amenities=WiFi&amenities=Hot%20Tub&amenities=WiFi");
        assert_eq!(params.amenities, vec!["WiFi".to_string(), "Hot Tub".to_string()]);
    }

    #[test]
    fn test_unparseable_values_are_absent() {
        let params = SearchParams::from_query("guests=lots&checkIn=tomorrow&bedrooms=-1&location=");

        assert_eq!(params.guests, None);
        assert_eq!(params.check_in, None);
        assert_eq!(params.bedrooms, None);
        assert_eq!(params.location, None);
    }

    #[test]
    fn test_explicit_zero_guests_is_active() {
        let state = FilterState::from_params(SearchParams::from_query("guests=0"), 500);
        assert_eq!(state.active_predicates(), vec![Predicate::MinGuests(0)]);

        let unset = FilterState::from_params(SearchParams::from_query(""), 500);
        assert!(unset.active_predicates().is_empty());
    }

    #[test]
    fn test_default_price_bounds_are_inactive() {
        let state = FilterState::default().with_price_range(0, DEFAULT_PRICE_CEILING);
        assert!(state.is_cleared());
        assert_eq!(state.price_range(), (0, DEFAULT_PRICE_CEILING));
    }

    #[test]
    fn test_toggle_bedrooms_unsets_current() {
        let state = FilterState::default().toggle_bedrooms(2);
        assert_eq!(state.bedrooms, Some(2));

        let switched = state.toggle_bedrooms(3);
        assert_eq!(switched.bedrooms, Some(3));

        assert_eq!(switched.toggle_bedrooms(3).bedrooms, None);
    }

    #[test]
    fn test_toggle_amenity_leaves_original_untouched() {
        let original = FilterState::default();
        let with_pool = original.toggle_amenity("Pool");

        assert!(with_pool.has_amenity("Pool"));
        assert!(!original.has_amenity("Pool"));
        assert!(!with_pool.toggle_amenity("Pool").has_amenity("Pool"));
    }

    #[test]
    fn test_merge_search_keeps_sidebar_filters() {
        let state = FilterState::default().toggle_bedrooms(2).toggle_amenity("WiFi");
        let merged = state.merge_search(SearchParams::from_query("location=Aspen&guests=4"));

        assert_eq!(merged.location.as_deref(), Some("Aspen"));
        assert_eq!(merged.guests, Some(4));
        assert_eq!(merged.bedrooms, Some(2));
        assert!(merged.has_amenity("WiFi"));
    }

    #[test]
    fn test_cleared_keeps_ceiling() {
        let state = FilterState::new(800).with_location("Miami").with_price_range(100, 300);
        let cleared = state.cleared();

        assert!(cleared.is_cleared());
        assert_eq!(cleared.price_ceiling(), 800);
    }

    #[test]
    fn test_query_string_round_trip() {
        let state = FilterState::default()
            .with_location("Lake Tahoe")
            .with_guests(Some(4))
            .with_price_range(50, 250)
            .toggle_amenity("Hot Tub");

        let query = state.to_query_string();
        assert_eq!(
            query,
            "location=Lake%20Tahoe&guests=4&minPrice=50&maxPrice=250&amenities=Hot%20Tub"
        );

        let parsed = FilterState::from_params(SearchParams::from_query(&query), DEFAULT_PRICE_CEILING);
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_search_href_without_filters() {
        assert_eq!(FilterState::default().search_href(), "/search");
    }
}
