// taxonomy/loader.rs
use crate::errors::{SeederError, SeederResult};
use crate::taxonomy::{Category, ExistingListing};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read the category taxonomy, keeping document order.
pub fn load_categories(path: &Path) -> SeederResult<Vec<Category>> {
    let categories: Vec<Category> = read_json(path)?;
    tracing::debug!(path = %path.display(), count = categories.len(), "Loaded categories");
    Ok(categories)
}

pub fn load_listings(path: &Path) -> SeederResult<Vec<ExistingListing>> {
    let listings: Vec<ExistingListing> = read_json(path)?;
    tracing::debug!(path = %path.display(), count = listings.len(), "Loaded listings");
    Ok(listings)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> SeederResult<T> {
    let text = fs::read_to_string(path).map_err(|e| SeederError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&text).map_err(|e| SeederError::JsonParse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
