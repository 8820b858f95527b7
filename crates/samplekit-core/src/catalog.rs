use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::validation::validate_catalog;

/// Mapping from a category label (e.g. a manufacturer) to its item labels
/// (e.g. models).
///
/// Categories are kept in a `BTreeMap` so iteration order is stable, which
/// keeps seeded sampling reproducible. Serialized as a plain object:
/// `{"Audi": ["A3", "A4"], "Volvo": ["S60"]}`. Deserialization validates,
/// so an empty catalog or category never reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ReferenceCatalog {
    categories: BTreeMap<String, Vec<String>>,
}

impl ReferenceCatalog {
    /// Build a catalog and validate it.
    pub fn new(categories: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let catalog = Self { categories };
        validate_catalog(&catalog)?;
        Ok(catalog)
    }

    /// Build a catalog from `(category, items)` entries and validate it.
    ///
    /// Repeated categories are merged, keeping item order.
    pub fn from_entries<I, K, V, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (category, items) in entries {
            categories
                .entry(category.into())
                .or_default()
                .extend(items.into_iter().map(Into::into));
        }
        Self::new(categories)
    }

    /// Bundled tables are checked by the crate's tests instead of at runtime.
    pub(crate) fn from_static(entries: &[(&str, &[&str])]) -> Self {
        let categories = entries
            .iter()
            .map(|(category, items)| {
                (
                    (*category).to_string(),
                    items.iter().map(|item| (*item).to_string()).collect(),
                )
            })
            .collect();
        Self { categories }
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category labels in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Items listed under `category`.
    pub fn items(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Category and items at a position in catalog order.
    pub fn entry_at(&self, index: usize) -> Option<(&str, &[String])> {
        self.categories
            .iter()
            .nth(index)
            .map(|(category, items)| (category.as_str(), items.as_slice()))
    }

    /// Whether `item` is listed under `category`.
    pub fn contains(&self, category: &str, item: &str) -> bool {
        self.items(category)
            .is_some_and(|items| items.iter().any(|candidate| candidate == item))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(category, items)| (category.as_str(), items.as_slice()))
    }
}

impl<'de> Deserialize<'de> for ReferenceCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let categories = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        Self::new(categories).map_err(serde::de::Error::custom)
    }
}
