// Service exports
pub mod listings;

pub use listings::{ListingStore, ListingStoreError};
