//! StayVibe - listing browse and search service
//!
//! Serves the marketing pages, the search page and the property pages of
//! the StayVibe rental site, plus a small JSON API over the same data. The
//! listing set is read once at startup and never modified; searches are a
//! stable filter over it, re-run on every request.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;

// Re-export commonly used types
pub use self::core::{evaluate, BookingQuote, Predicate, SearchResult};
pub use models::{FilterState, Listing, SearchParams};
pub use services::ListingStore;
