use serde::{Deserialize, Serialize};
use validator::Validate;

/// A rentable property record as supplied by the listing data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Listing {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Nightly price in whole currency units
    pub price: u32,
    pub location: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "maxGuests")]
    #[validate(range(min = 1))]
    pub max_guests: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[validate(nested)]
    pub host: Host,
    #[serde(default = "default_true")]
    pub availability: bool,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    #[validate(nested)]
    pub reviews: Vec<Review>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Listing {
    /// Whether every label in `required` appears in this listing's amenities
    pub fn has_amenities<'a, I>(&self, required: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        required
            .into_iter()
            .all(|amenity| self.amenities.iter().any(|a| a == amenity))
    }

    /// First image, used for cards and the detail hero
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

fn default_true() -> bool { true }

/// Person hosting a listing or writing a review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Host {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Host {
    /// Single-letter fallback shown when no avatar is set
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Guest review attached to a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Review {
    pub id: String,
    #[validate(nested)]
    pub author: Host,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    pub comment: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserializes_camel_case() {
        let json = r#"{
            "id": "1",
            "title": "Loft",
            "price": 120,
            "location": "Austin, TX",
            "maxGuests": 3,
            "bedrooms": 1,
            "bathrooms": 1,
            "amenities": ["WiFi"],
            "host": { "name": "Dana" },
            "rating": 4.5
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.max_guests, 3);
        assert!(listing.availability);
        assert!(listing.reviews.is_empty());
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_fails_validation() {
        let json = r#"{
            "id": "1", "title": "Loft", "price": 120, "location": "Austin",
            "maxGuests": 0, "bedrooms": 1, "bathrooms": 1,
            "host": { "name": "Dana" }, "rating": 4.5
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert!(listing.validate().is_err());
    }

    #[test]
    fn test_has_amenities_is_exact_match() {
        let json = r#"{
            "id": "1", "title": "Loft", "price": 120, "location": "Austin",
            "maxGuests": 2, "bedrooms": 1, "bathrooms": 1,
            "amenities": ["WiFi", "Pool"],
            "host": { "name": "Dana" }, "rating": 4.5
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();

        let wanted = vec!["Pool".to_string()];
        assert!(listing.has_amenities(&wanted));

        let lowercase = vec!["pool".to_string()];
        assert!(!listing.has_amenities(&lowercase));
    }

    #[test]
    fn test_host_initial() {
        let host = Host { id: "h".into(), name: "Maya".into(), avatar: None };
        assert_eq!(host.initial(), "M");
    }
}
