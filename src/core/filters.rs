use std::collections::BTreeSet;

use crate::models::Listing;

/// Amenity labels offered as checkboxes on the search page
pub const AMENITY_CHOICES: [&str; 8] = [
    "WiFi",
    "Kitchen",
    "Pool",
    "Parking",
    "Air Conditioning",
    "Fireplace",
    "Hot Tub",
    "Beach Access",
];

/// Bedroom minimums offered as "N+" toggles on the search page
pub const BEDROOM_CHOICES: [u32; 4] = [1, 2, 3, 4];

/// One active search constraint
///
/// Each variant maps to exactly one `FilterState` field. Predicates are
/// independent of each other, so any order of application yields the same
/// result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring of location or title
    Location(String),
    MinGuests(u32),
    MinPrice(u32),
    MaxPrice(u32),
    MinBedrooms(u32),
    /// Listing must offer every label (exact match)
    Amenities(BTreeSet<String>),
}

impl Predicate {
    #[inline]
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Predicate::Location(needle) => matches_location(listing, needle),
            Predicate::MinGuests(guests) => listing.max_guests >= *guests,
            Predicate::MinPrice(min) => listing.price >= *min,
            Predicate::MaxPrice(max) => listing.price <= *max,
            Predicate::MinBedrooms(bedrooms) => listing.bedrooms >= *bedrooms,
            Predicate::Amenities(required) => listing.has_amenities(required),
        }
    }

    /// Stable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::Location(_) => "location",
            Predicate::MinGuests(_) => "guests",
            Predicate::MinPrice(_) => "min_price",
            Predicate::MaxPrice(_) => "max_price",
            Predicate::MinBedrooms(_) => "bedrooms",
            Predicate::Amenities(_) => "amenities",
        }
    }
}

/// Check whether the listing's location or title contains `needle`, ignoring case
#[inline]
pub fn matches_location(listing: &Listing, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    listing.location.to_lowercase().contains(&needle)
        || listing.title.to_lowercase().contains(&needle)
}

/// Check a listing against every predicate (logical AND)
///
/// An empty predicate list accepts everything.
#[inline]
pub fn matches_all(listing: &Listing, predicates: &[Predicate]) -> bool {
    predicates.iter().all(|predicate| predicate.matches(listing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Host;

    fn create_test_listing(price: u32, max_guests: u32, bedrooms: u32, amenities: &[&str]) -> Listing {
        Listing {
            id: "test_listing".to_string(),
            title: "Seaside Cottage".to_string(),
            description: String::new(),
            price,
            location: "Malibu, California".to_string(),
            address: String::new(),
            images: vec![],
            max_guests,
            bedrooms,
            bathrooms: 1,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            host: Host { id: "h1".to_string(), name: "Host".to_string(), avatar: None },
            availability: true,
            rating: 4.8,
            reviews: vec![],
            created_at: None,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_location_matches_location_ignoring_case() {
        let listing = create_test_listing(100, 2, 1, &[]);
        assert!(Predicate::Location("malibu".to_string()).matches(&listing));
        assert!(Predicate::Location("CALIFORNIA".to_string()).matches(&listing));
    }

    #[test]
    fn test_location_matches_title() {
        let listing = create_test_listing(100, 2, 1, &[]);
        assert!(Predicate::Location("cottage".to_string()).matches(&listing));
        assert!(!Predicate::Location("chalet".to_string()).matches(&listing));
    }

    #[test]
    fn test_guest_minimum_is_inclusive() {
        let listing = create_test_listing(100, 4, 1, &[]);
        assert!(Predicate::MinGuests(4).matches(&listing));
        assert!(!Predicate::MinGuests(5).matches(&listing));
        assert!(Predicate::MinGuests(0).matches(&listing));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let listing = create_test_listing(150, 2, 1, &[]);
        assert!(Predicate::MinPrice(150).matches(&listing));
        assert!(Predicate::MaxPrice(150).matches(&listing));
        assert!(!Predicate::MinPrice(151).matches(&listing));
        assert!(!Predicate::MaxPrice(149).matches(&listing));
    }

    #[test]
    fn test_bedroom_minimum() {
        let listing = create_test_listing(100, 2, 2, &[]);
        assert!(Predicate::MinBedrooms(2).matches(&listing));
        assert!(!Predicate::MinBedrooms(3).matches(&listing));
    }

    #[test]
    fn test_amenities_superset() {
        let listing = create_test_listing(100, 2, 1, &["WiFi", "Pool", "Kitchen"]);
        let wanted: BTreeSet<String> = ["WiFi", "Pool"].iter().map(|s| s.to_string()).collect();
        assert!(Predicate::Amenities(wanted).matches(&listing));

        let missing: BTreeSet<String> = ["WiFi", "Hot Tub"].iter().map(|s| s.to_string()).collect();
        assert!(!Predicate::Amenities(missing).matches(&listing));
    }

    #[test]
    fn test_matches_all_with_no_predicates() {
        let listing = create_test_listing(100, 2, 1, &[]);
        assert!(matches_all(&listing, &[]));
    }

    #[test]
    fn test_matches_all_requires_every_predicate() {
        let listing = create_test_listing(100, 2, 1, &["WiFi"]);
        let predicates = vec![Predicate::MinPrice(50), Predicate::MinGuests(3)];
        assert!(!matches_all(&listing, &predicates));
    }
}
