use serde::Serialize;

use crate::core::filters::{matches_all, Predicate};
use crate::models::{FilterState, Listing};

/// Listings that satisfy a filter state, in source order
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    pub listings: Vec<&'a Listing>,
    #[serde(rename = "totalListings")]
    pub total_listings: usize,
}

impl<'a> SearchResult<'a> {
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// "1 property" / "N properties", as shown in the result header
    pub fn summary(&self) -> String {
        match self.len() {
            1 => "1 property".to_string(),
            n => format!("{} properties", n),
        }
    }
}

/// Evaluate a filter state against the full listing store
///
/// Pure function of its inputs: the active predicates are derived from
/// `state`, combined with AND, and applied as a stable filter. Calling it
/// twice with the same arguments yields the same listings.
pub fn evaluate<'a>(listings: &'a [Listing], state: &FilterState) -> SearchResult<'a> {
    let predicates = state.active_predicates();

    tracing::debug!(
        "Evaluating {} listings against {} active predicates: {:?}",
        listings.len(),
        predicates.len(),
        predicates.iter().map(Predicate::name).collect::<Vec<_>>()
    );

    evaluate_with(listings, &predicates)
}

/// Evaluate an explicit predicate list, applied in the given order
pub fn evaluate_with<'a>(listings: &'a [Listing], predicates: &[Predicate]) -> SearchResult<'a> {
    let matched: Vec<&Listing> = listings
        .iter()
        .filter(|listing| matches_all(listing, predicates))
        .collect();

    SearchResult {
        listings: matched,
        total_listings: listings.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Host;

    fn create_listing(id: &str, price: u32, max_guests: u32, bedrooms: u32, amenities: &[&str]) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {}", id),
            description: String::new(),
            price,
            location: "Denver, Colorado".to_string(),
            address: String::new(),
            images: vec![],
            max_guests,
            bedrooms,
            bathrooms: 1,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            host: Host { id: "h1".to_string(), name: "Host".to_string(), avatar: None },
            availability: true,
            rating: 4.5,
            reviews: vec![],
            created_at: None,
            latitude: None,
            longitude: None,
        }
    }

    fn two_listings() -> Vec<Listing> {
        vec![
            create_listing("1", 100, 2, 1, &["WiFi"]),
            create_listing("2", 300, 4, 2, &["WiFi", "Pool"]),
        ]
    }

    #[test]
    fn test_min_price_and_amenity() {
        let listings = two_listings();
        let state = FilterState::default()
            .with_price_range(150, FilterState::default().price_ceiling())
            .toggle_amenity("Pool");

        let result = evaluate(&listings, &state);

        assert_eq!(result.len(), 1);
        assert_eq!(result.listings[0].id, "2");
        assert_eq!(result.total_listings, 2);
    }

    #[test]
    fn test_default_state_returns_everything() {
        let listings = two_listings();
        let result = evaluate(&listings, &FilterState::default());

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let listings = vec![
            create_listing("c", 100, 2, 1, &[]),
            create_listing("a", 200, 2, 1, &[]),
            create_listing("b", 150, 2, 1, &[]),
        ];

        let result = evaluate(&listings, &FilterState::default().with_guests(Some(2)));
        let ids: Vec<&str> = result.listings.iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_inverted_price_range_is_empty() {
        let listings = two_listings();
        let state = FilterState::default().with_price_range(400, 200);

        let result = evaluate(&listings, &state);

        assert!(result.is_empty());
        assert_eq!(result.summary(), "0 properties");
    }

    #[test]
    fn test_summary_singular() {
        let listings = two_listings();
        let state = FilterState::default().with_bedrooms(Some(2));

        assert_eq!(evaluate(&listings, &state).summary(), "1 property");
    }
}
