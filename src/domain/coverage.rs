// src/domain/coverage.rs

use crate::errors::{SeederError, SeederResult};
use crate::taxonomy::{Category, ExistingListing, Subcategory};
use std::collections::{HashMap, HashSet};

/// The (category, subcategory) pairs that already have at least one listing.
///
/// Keys are exact slugs. A listing without a subcategory is stored under
/// `(category, "")`, so it does not count for any real subcategory of that
/// category. A listing whose subcategory is `null` covers nothing.
#[derive(Debug, Default)]
pub struct CoverageSet {
    by_category: HashMap<String, HashSet<String>>,
}

impl CoverageSet {
    pub fn from_listings(listings: &[ExistingListing]) -> Self {
        let mut by_category: HashMap<String, HashSet<String>> = HashMap::new();

        for listing in listings {
            if let Some(subcategory) = &listing.subcategory {
                by_category
                    .entry(listing.category.clone())
                    .or_default()
                    .insert(subcategory.clone());
            }
        }

        Self { by_category }
    }

    pub fn covers(&self, category: &str, subcategory: &str) -> bool {
        self.by_category
            .get(category)
            .is_some_and(|subs| subs.contains(subcategory))
    }

    /// Number of distinct covered pairs.
    pub fn len(&self) -> usize {
        self.by_category.values().map(HashSet::len).sum()
    }
}

/// A taxonomy entry that has no listing yet.
#[derive(Debug, Clone, Copy)]
pub struct MissingPair<'a> {
    pub category: &'a Category,
    pub subcategory: &'a Subcategory,
}

impl MissingPair<'_> {
    /// Display name of the subcategory. A missing pair without one cannot
    /// be turned into a placeholder.
    pub fn display_name(&self) -> SeederResult<&str> {
        self.subcategory.name.as_deref().ok_or_else(|| {
            SeederError::UnexpectedShape(format!(
                "subcategory {}/{} has no name",
                self.category.slug, self.subcategory.slug
            ))
        })
    }
}

/// Walk the taxonomy in document order and collect every subcategory the
/// coverage set does not know about.
///
/// The set is not updated while walking, so a pair listed twice in the
/// taxonomy comes back twice.
pub fn missing_pairs<'a>(
    categories: &'a [Category],
    coverage: &CoverageSet,
) -> Vec<MissingPair<'a>> {
    categories
        .iter()
        .flat_map(|category| {
            category
                .sub_categories
                .iter()
                .map(move |subcategory| MissingPair {
                    category,
                    subcategory,
                })
        })
        .filter(|pair| !coverage.covers(&pair.category.slug, &pair.subcategory.slug))
        .collect()
}
