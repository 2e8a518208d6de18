// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod search;

pub use domain::{Host, Listing, Review};
pub use requests::{PropertyPageQuery, QuoteRequest};
pub use responses::{ErrorResponse, HealthResponse, QuoteResponse, SearchResponse};
pub use search::{FilterState, SearchParams, DEFAULT_PRICE_CEILING};
