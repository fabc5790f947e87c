//! Catalog store: the fixed list of menu items, loaded once from CSV.
//!
//! The CSV must carry the header columns `nama`, `kategori` and `deskripsi`.
//! Any malformed row fails the whole load; a partial catalog is never
//! returned.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::{Category, ItemId, MenuItem};

#[derive(Debug, Deserialize)]
struct CatalogRow {
    nama: String,
    kategori: String,
    deskripsi: String,
}

impl CatalogRow {
    fn into_item(self, row: usize) -> Result<MenuItem> {
        for (field, value) in [("nama", &self.nama), ("kategori", &self.kategori), ("deskripsi", &self.deskripsi)] {
            if value.is_empty() {
                return Err(Error::InvalidRow { row, reason: format!("empty field '{}'", field) });
            }
        }
        let category = self
            .kategori
            .parse::<Category>()
            .map_err(|_| Error::InvalidRow { row, reason: format!("unknown category '{}'", self.kategori) })?;
        Ok(MenuItem { name: self.nama, category, description: self.deskripsi })
    }
}

/// Ordered, immutable list of menu items. The index of an item is its
/// [`ItemId`] and the join key for every score vector built over it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self { Self { items } }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut items = Vec::new();
        for (idx, result) in rdr.deserialize::<CatalogRow>().enumerate() {
            let row = result?;
            items.push(row.into_item(idx + 1)?);
        }
        if items.is_empty() {
            warn!("catalog source has no rows");
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[MenuItem] { &self.items }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> { self.items.get(id) }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// One lower-cased document per item, index-aligned with the catalog.
    pub fn document_corpus(&self) -> Vec<String> {
        self.items.iter().map(MenuItem::document).collect()
    }

    /// Distinct lower-cased whitespace tokens of every name, category and
    /// description, in sorted order.
    pub fn vocabulary(&self) -> BTreeSet<String> {
        let mut words = BTreeSet::new();
        for item in &self.items {
            for field in [item.name.as_str(), item.category.as_str(), item.description.as_str()] {
                words.extend(field.to_lowercase().split_whitespace().map(str::to_string));
            }
        }
        words
    }

    /// Categories present in the catalog, in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    }
}
