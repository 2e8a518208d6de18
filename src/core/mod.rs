// Core search and pricing exports
pub mod booking;
pub mod evaluator;
pub mod filters;

pub use booking::{nights_between, BookingQuote};
pub use evaluator::{evaluate, evaluate_with, SearchResult};
pub use filters::{matches_all, matches_location, Predicate, AMENITY_CHOICES, BEDROOM_CHOICES};
