//! The contract between catalog entries and [`NameCatalog`](crate::NameCatalog).

use std::fmt;
use std::hash::Hash;

/// A named object that can be looked up by fuzzy name.
pub trait CatalogEntry {
    /// Primary key, unique within a catalog.
    type Key: Ord + Clone + Hash + fmt::Display + fmt::Debug;

    /// Primary key of this entry.
    fn key(&self) -> Self::Key;

    /// Display names, primary name first.
    fn names(&self) -> &[String];

    /// Names stored verbatim, bypassing relaxation (short internal codes).
    fn strict_names(&self) -> &[String] {
        &[]
    }

    /// Identifiers that must be unique across the whole catalog.
    fn secondary_keys(&self) -> Vec<String> {
        Vec::new()
    }

    /// Normalizes the entry once, before it is inserted.
    fn prepare(&mut self) {}

    /// The name shown to players.
    fn first_name(&self) -> &str {
        self.names().first().map_or("??", String::as_str)
    }
}
