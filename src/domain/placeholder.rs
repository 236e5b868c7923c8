// src/domain/placeholder.rs

use crate::domain::MissingPair;
use crate::errors::SeederResult;
use serde::Serialize;

pub const PLACEHOLDER_PRICE: i64 = 100;
pub const PLACEHOLDER_LOCATION: &str = "İstanbul";
pub const PLACEHOLDER_USER: &str = "Demo";
pub const PLACEHOLDER_EMAIL: &str = "demo@alo17.com";

/// Body of a `POST /api/listings` request for a demo listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderListing {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub subcategory: String,
    pub location: String,
    pub is_premium: bool,
    pub user: String,
    pub email: String,
}

impl PlaceholderListing {
    /// Fixed demo listing for `pair`; only the texts and slugs vary.
    pub fn for_pair(pair: &MissingPair<'_>) -> SeederResult<Self> {
        let name = pair.display_name()?;

        Ok(Self {
            title: format!("Örnek İlan Başlığı - {name}"),
            description: format!("Bu bir örnek {name} ilanıdır."),
            price: PLACEHOLDER_PRICE,
            category: pair.category.slug.clone(),
            subcategory: pair.subcategory.slug.clone(),
            location: PLACEHOLDER_LOCATION.to_string(),
            is_premium: false,
            user: PLACEHOLDER_USER.to_string(),
            email: PLACEHOLDER_EMAIL.to_string(),
        })
    }
}
