//! Ordered mod catalogs
//!
//! A catalog maps human-readable display names to opaque Modrinth version ids.
//! Iteration order is declaration order, which fixes the order of entries in the
//! generated `modrinth.index.json` and the order of downloads.
//!
//! # Examples
//!
//! ```
//! use mekkapack::Catalog;
//!
//! let shared = Catalog::from_pairs(&[("Jade", "VGRMP69T"), ("EMI", "ouSj7NfF")]);
//! let client = Catalog::from_pairs(&[("Sodium", "Pb3OXVqC")]);
//!
//! let merged = Catalog::merge(&client, &shared);
//! let names: Vec<&str> = merged.iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, ["Sodium", "Jade", "EMI"]);
//! ```

use serde::{Deserialize, Serialize};

/// A single catalog line: display name and version id
///
/// Identity is the id; the name is only used for logging and for matching the
/// shader that needs patching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub id: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut catalog = Self::new();
        for (name, id) in pairs {
            catalog.insert(*name, *id);
        }
        catalog
    }

    /// Insert or replace an entry
    ///
    /// Replacing keeps the position of the first occurrence of `name`.
    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        let name = name.into();
        let id = id.into();

        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.id = id,
            None => self.entries.push(CatalogEntry { name, id }),
        }
    }

    /// Merge two catalogs
    ///
    /// Keys keep the position where they were first seen (`first`, then `second`);
    /// on a duplicate name the id from `second` wins.
    pub fn merge(first: &Catalog, second: &Catalog) -> Catalog {
        let mut merged = first.clone();
        for entry in &second.entries {
            merged.insert(entry.name.clone(), entry.id.clone());
        }
        merged
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry.name, entry.id);
        }
        catalog
    }
}

impl From<Catalog> for Vec<CatalogEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_keeps_declaration_order() {
        let catalog = Catalog::from_pairs(&[("B", "2"), ("A", "1"), ("C", "3")]);
        let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut catalog = Catalog::from_pairs(&[("A", "1"), ("B", "2")]);
        catalog.insert("A", "9");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.iter().next().unwrap(), &CatalogEntry::new("A", "9"));
    }

    #[test]
    fn test_merge_later_source_wins() {
        let first = Catalog::from_pairs(&[("Chunky", "LuFhm4eU"), ("Jade", "old")]);
        let second = Catalog::from_pairs(&[("Jade", "VGRMP69T"), ("EMI", "ouSj7NfF")]);

        let merged = Catalog::merge(&first, &second);

        let names: Vec<&str> = merged.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Chunky", "Jade", "EMI"]);
        assert_eq!(merged.get("Jade"), Some("VGRMP69T"));
    }

    #[test]
    fn test_merge_with_empty() {
        let shared = Catalog::from_pairs(&[("Jade", "VGRMP69T")]);

        assert_eq!(Catalog::merge(&Catalog::new(), &shared), shared);
        assert_eq!(Catalog::merge(&shared, &Catalog::new()), shared);
    }

    #[test]
    fn test_catalog_toml_roundtrip_shape() {
        #[derive(Deserialize)]
        struct Wrapper {
            mods: Catalog,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"
            [[mods]]
            name = "Sodium"
            id = "Pb3OXVqC"

            [[mods]]
            name = "Iris"
            id = "t3ruzodq"
            "#,
        )
        .unwrap();

        assert_eq!(wrapper.mods.len(), 2);
        assert_eq!(wrapper.mods.get("Iris"), Some("t3ruzodq"));
    }

    #[test]
    fn test_toml_duplicate_names_collapse() {
        #[derive(Deserialize)]
        struct Wrapper {
            mods: Catalog,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"
            mods = [
                { name = "Foo", id = "ID1" },
                { name = "Bar", id = "ID2" },
                { name = "Foo", id = "ID9" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(wrapper.mods.len(), 2);
        assert_eq!(wrapper.mods.iter().next().unwrap(), &CatalogEntry::new("Foo", "ID9"));
        assert_eq!(wrapper.mods.get("Bar"), Some("ID2"));
    }
}
