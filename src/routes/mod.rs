// Route exports
pub mod api;
pub mod pages;

use std::sync::Arc;

use actix_web::web;

use crate::config::SearchSettings;
use crate::services::ListingStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<ListingStore>,
    pub search: SearchSettings,
}

impl AppState {
    pub fn new(listings: ListingStore, search: SearchSettings) -> Self {
        Self {
            listings: Arc::new(listings),
            search,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(api::configure))
        .configure(pages::configure);
}
