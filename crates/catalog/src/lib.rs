//! # APEX.SPHERE Catalog (`catalog`)
//!
//! Read-only product data for the search service. A [`Catalog`] is an
//! immutable, cheaply clonable snapshot of [`CatalogItem`] records in their
//! original order. Callers hand a snapshot to the matcher explicitly; nothing
//! in this crate keeps module-level state.
//!
//! Snapshots come from one of two places:
//! - [`Catalog::sample`]: the three built-in demo products.
//! - [`Catalog::from_json_file`] / [`Catalog::from_json_str`]: a JSON array
//!   of items in the same shape the HTTP API returns.
//!
//! ```
//! use catalog::Catalog;
//!
//! let catalog = Catalog::sample();
//! assert_eq!(catalog.len(), 3);
//! assert_eq!(catalog.get(1).unwrap().category, "jeans");
//! ```

mod error;
mod sample;
mod types;

pub use crate::error::CatalogError;
pub use crate::types::{CatalogItem, LocalizedText};

use std::collections::HashSet;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// Immutable, shareable view over an ordered list of catalog items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[CatalogItem]>,
}

impl Catalog {
    /// Build a snapshot, rejecting duplicate item ids.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    /// The built-in demo catalog.
    pub fn sample() -> Self {
        Self {
            items: sample::sample_items().into(),
        }
    }

    /// Parse a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a JSON array of items from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            items = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Deref for Catalog {
    type Target = [CatalogItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}
