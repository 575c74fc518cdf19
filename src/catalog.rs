//! Catalog Helpers
//!
//! Loading and searching the found-item catalog.

use std::fmt;

use crate::models::FoundItem;

/// Catalog bundled into the binary at build time
pub const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "invalid catalog: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Parse a catalog JSON array
pub fn parse_catalog(json: &str) -> Result<Vec<FoundItem>, CatalogError> {
    let items = serde_json::from_str(json)?;
    Ok(items)
}

/// Case-insensitive search over the descriptive fields of each item.
///
/// A blank query keeps every item in its original order.
pub fn filter_items(items: &[FoundItem], query: &str) -> Vec<FoundItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            [
                &item.item.name,
                &item.item.category,
                &item.color.name,
                &item.memo,
                &item.location,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn find_item(items: &[FoundItem], id: &str) -> Option<FoundItem> {
    items.iter().find(|item| item.id == id).cloned()
}
