//! Adventures and the maps they are played on.
//!
//! An adventure is looked up by its own name or by any of its maps. Those
//! lookup names double as secondary keys: no two adventures may share one.

use serde::{Deserialize, Serialize};
use warband_foundation::{Discard, MessageLog, deep_trim, relax_articles, relax_case};

use crate::catalog::NameCatalog;
use crate::entry::CatalogEntry;
use crate::unit::UnitCatalog;

/// A named adventure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adventure {
    /// Primary key and display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Whether the adventure is usually played from the player's side.
    #[serde(rename = "is player", default)]
    pub is_player: bool,
    /// Maps the adventure spans.
    #[serde(default)]
    pub maps: Vec<String>,
    /// Names of the enemy units met in the adventure.
    #[serde(rename = "units", default)]
    pub unit_names: Vec<String>,
    /// Lookup names derived from `name` and `maps`.
    #[serde(skip)]
    keys: Vec<String>,
    /// Ids of `unit_names`, once linked.
    #[serde(skip)]
    units: Vec<u32>,
}

/// Lowercase, article-free form of an adventure or map name.
fn lookup_name(text: &str) -> String {
    deep_trim(&relax_articles(&relax_case(text)))
}

impl Adventure {
    /// Creates an adventure spanning `maps`.
    #[must_use]
    pub fn new<I, N>(name: impl Into<String>, maps: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            name: name.into(),
            maps: maps.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Builder method to list the enemy units by name.
    #[must_use]
    pub fn with_units<I, N>(mut self, unit_names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.unit_names = unit_names.into_iter().map(Into::into).collect();
        self
    }

    /// The description, or the map list when there is none.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.description.trim().is_empty() {
            self.maps.join(", ")
        } else {
            self.description.clone()
        }
    }

    /// Lookup names: the adventure's own first, then one per map.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Linked unit ids, in `unit_names` order.
    #[must_use]
    pub fn units(&self) -> &[u32] {
        &self.units
    }

    /// Whether the linked units include `id`.
    #[must_use]
    pub fn has_unit(&self, id: u32) -> bool {
        self.units.contains(&id)
    }
}

impl CatalogEntry for Adventure {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }

    fn names(&self) -> &[String] {
        &self.keys
    }

    fn secondary_keys(&self) -> Vec<String> {
        self.keys.clone()
    }

    fn prepare(&mut self) {
        self.name = deep_trim(&self.name);
        for map in &mut self.maps {
            *map = deep_trim(map);
        }
        self.maps.retain(|map| !map.is_empty());

        self.keys = std::iter::once(&self.name)
            .chain(&self.maps)
            .map(|name| lookup_name(name))
            .filter(|key| !key.is_empty())
            .collect();
    }

    fn first_name(&self) -> &str {
        &self.name
    }
}

/// Adventures by name.
pub type AdventureCatalog = NameCatalog<Adventure>;

impl NameCatalog<Adventure> {
    /// Resolves every adventure's unit names against `units`.
    ///
    /// Names that do not resolve to a single unit are reported and skipped.
    /// Returns the number of links made.
    pub fn link_units(&mut self, units: &UnitCatalog, log: &mut dyn MessageLog) -> usize {
        let mut linked = 0;
        for adventure in self.entries.values_mut() {
            adventure.units.clear();
            for unit_name in &adventure.unit_names {
                match units.find(unit_name, |_| true, &mut Discard).entry() {
                    Some(unit) if !adventure.units.contains(&unit.id) => {
                        adventure.units.push(unit.id);
                        linked += 1;
                    }
                    Some(unit) => log.push(format!(
                        "Unit {} from adventure {} has already been mapped.",
                        unit.first_name(),
                        adventure.name
                    )),
                    None => log.push(format!(
                        "Unit {unit_name} from adventure {} not found.",
                        adventure.name
                    )),
                }
            }
        }
        tracing::debug!(linked, "adventure units linked");
        linked
    }
}
