pub mod components;
pub mod layout;
pub mod pages;

// Re-exports for convenience
pub use components::{property_card, search_bar};
pub use layout::page_layout;
