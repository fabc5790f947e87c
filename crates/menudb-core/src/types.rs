//! Domain types shared by the catalog, the indices and the session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Position of an item in the catalog. Stable for the process lifetime.
pub type ItemId = usize;

/// Serving temperature of a menu item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Hot,
    Cold,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Hot, Category::Cold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hot => "Hot",
            Category::Cold => "Cold",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidFilter(s.to_string()))
    }
}

/// One row of the catalog.
///
/// - `name`: display name, e.g. "Kopi Susu"
/// - `category`: `Hot` or `Cold`
/// - `description`: free text used for matching
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub category: Category,
    pub description: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, category: Category, description: impl Into<String>) -> Self {
        Self { name: name.into(), category, description: description.into() }
    }

    /// The searchable text of this item: name, category and description,
    /// lower-cased.
    pub fn document(&self) -> String {
        format!("{} {} {}", self.name, self.category, self.description).to_lowercase()
    }
}

/// Restricts a search to one category.
///
/// Parsed case-insensitively; `"Semua"` and `"all"` mean no restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn allows(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("semua") || s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("Semua"),
            CategoryFilter::Only(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// A catalog item scored by an index. Higher `score` is better.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub id: ItemId,
    pub score: f32,
}
