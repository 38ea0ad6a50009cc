//! The scope catalog.
//!
//! A [`Catalog`] is an ordered list of [`Category`] groups, each holding
//! ordered [`ScopeEntry`] values. Order only matters for display. Once built
//! the catalog is never modified.

mod builtin;

use serde::Deserialize;
use snafu::prelude::*;

use builtin::BUILTIN_CATALOG;

/// A single selectable scope: a human-readable description plus the
/// identifier sent to the authorization server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScopeEntry {
    description: String,
    id: String,
}

impl ScopeEntry {
    /// Creates a new entry.
    pub fn new(description: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            id: id.into(),
        }
    }

    /// The label shown to the user.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The scope identifier, either a short keyword or a permission URI.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A named group of related scopes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    name: String,
    #[serde(default, rename = "scope")]
    entries: Vec<ScopeEntry>,
}

impl Category {
    /// Creates a new category.
    pub fn new(name: impl Into<String>, entries: impl IntoIterator<Item = ScopeEntry>) -> Self {
        Self {
            name: name.into(),
            entries: entries.into_iter().collect(),
        }
    }

    /// The display label of the category.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entries of the category, in display order.
    #[must_use]
    pub fn entries(&self) -> &[ScopeEntry] {
        &self.entries
    }
}

/// The full, read-only scope catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default, rename = "category")]
    categories: Vec<Category>,
}

impl Catalog {
    /// Creates a catalog from the given categories.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if there are no categories.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Result<Self, CatalogError> {
        let categories = categories.into_iter().collect::<Vec<_>>();
        ensure!(!categories.is_empty(), EmptySnafu);
        Ok(Self { categories })
    }

    /// The sample catalog embedded in the crate.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATALOG
            .iter()
            .map(|(name, entries)| {
                Category::new(
                    *name,
                    entries
                        .iter()
                        .map(|(description, id)| ScopeEntry::new(*description, *id)),
                )
            })
            .collect();
        Self { categories }
    }

    /// Parses a catalog written as `[[category]]` tables holding
    /// `[[category.scope]]` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML of that shape, or
    /// if it has no categories.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let document = toml::from_str::<CatalogDocument>(source).context(ParseSnafu)?;
        Self::new(document.categories)
    }

    /// The categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every entry in display order, paired with its category.
    pub fn entries(&self) -> impl Iterator<Item = (&Category, &ScopeEntry)> {
        self.categories
            .iter()
            .flat_map(|category| category.entries.iter().map(move |entry| (category, entry)))
    }

    /// Returns the entry at the 1-based position `index` in display order.
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<&ScopeEntry> {
        let position = index.checked_sub(1)?;
        self.entries().nth(position).map(|(_, entry)| entry)
    }

    /// Returns the first entry with the given identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ScopeEntry> {
        self.entries()
            .map(|(_, entry)| entry)
            .find(|entry| entry.id == id)
    }

    /// The total number of entries across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Returns true if no category holds any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Errors that can occur when loading a catalog.
#[derive(Debug, Snafu)]
pub enum CatalogError {
    /// The catalog document could not be parsed.
    #[snafu(display("Failed to parse scope catalog"))]
    Parse {
        /// The underlying TOML error.
        source: toml::de::Error,
    },
    /// The catalog has no categories.
    #[snafu(display("Scope catalog has no categories"))]
    Empty,
}
