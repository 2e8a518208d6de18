use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::models::Listing;

/// Listing fixture bundled into the binary
const EMBEDDED_LISTINGS: &str = include_str!("../../data/listings.json");

/// Errors that can occur while loading the listing store
#[derive(Debug, Error)]
pub enum ListingStoreError {
    #[error("Failed to read listings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid listings TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Listing {id} failed validation: {source}")]
    Validation {
        id: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Duplicate listing id: {0}")]
    DuplicateId(String),

    #[error("Unsupported listings file format: {0}")]
    UnsupportedFormat(String),
}

/// TOML files wrap the sequence in a `[[listings]]` array of tables
#[derive(Debug, Deserialize)]
struct ListingFile {
    listings: Vec<Listing>,
}

/// Read-only, ordered set of listings supplied whole at startup
///
/// Nothing writes to the store after construction; handlers share it
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    /// Validate and wrap a listing sequence, keeping its order
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, ListingStoreError> {
        let mut seen = HashSet::with_capacity(listings.len());

        for listing in &listings {
            listing.validate().map_err(|source| ListingStoreError::Validation {
                id: listing.id.clone(),
                source,
            })?;

            if !seen.insert(listing.id.as_str()) {
                return Err(ListingStoreError::DuplicateId(listing.id.clone()));
            }
        }

        Ok(Self { listings })
    }

    /// The bundled fixture
    pub fn embedded() -> Result<Self, ListingStoreError> {
        Self::from_json(EMBEDDED_LISTINGS)
    }

    pub fn from_json(json: &str) -> Result<Self, ListingStoreError> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Self::from_listings(listings)
    }

    pub fn from_toml(source: &str) -> Result<Self, ListingStoreError> {
        let file: ListingFile = toml::from_str(source)?;
        Self::from_listings(file.listings)
    }

    /// Load a `.json` or `.toml` listing file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ListingStoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("toml") => Self::from_toml(&contents),
            other => Err(ListingStoreError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Load from `path` when configured, otherwise the bundled fixture
    pub fn load(path: Option<&str>) -> Result<Self, ListingStoreError> {
        match path {
            Some(path) => {
                tracing::info!("Loading listings from {}", path);
                Self::from_path(path)
            }
            None => {
                tracing::info!("Loading bundled listing fixture");
                Self::embedded()
            }
        }
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// The first `count` listings, in store order
    pub fn featured(&self, count: usize) -> &[Listing] {
        &self.listings[..count.min(self.listings.len())]
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
