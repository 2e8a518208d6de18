pub mod about;
pub mod home;
pub mod not_found;
pub mod property;
pub mod search;

pub use about::about_page;
pub use home::home_page;
pub use not_found::not_found_page;
pub use property::{property_page, PropertyVm};
pub use search::{search_page, SearchVm};
