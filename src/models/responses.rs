use serde::{Deserialize, Serialize};

use crate::core::evaluator::SearchResult;
use crate::models::domain::Listing;
use crate::models::search::FilterState;

/// Response for the listing search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<'a> {
    pub listings: Vec<&'a Listing>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "totalListings")]
    pub total_listings: usize,
    pub filters: &'a FilterState,
}

impl<'a> SearchResponse<'a> {
    pub fn new(result: SearchResult<'a>, filters: &'a FilterState) -> Self {
        Self {
            total_results: result.listings.len(),
            total_listings: result.total_listings,
            listings: result.listings,
            filters,
        }
    }
}

/// Response for the quote endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(rename = "listingId")]
    pub listing_id: String,
    #[serde(rename = "checkIn")]
    pub check_in: chrono::NaiveDate,
    #[serde(rename = "checkOut")]
    pub check_out: chrono::NaiveDate,
    pub nights: u32,
    #[serde(rename = "nightlyPrice")]
    pub nightly_price: u32,
    pub total: u64,
    pub guests: u32,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub listings: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
