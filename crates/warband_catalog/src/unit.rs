//! Unit types.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use warband_foundation::deep_trim;

use crate::catalog::NameCatalog;
use crate::entry::CatalogEntry;
use crate::tags::{Category, Faction};

/// A kind of unit that can appear in an army.
///
/// Identity is the numeric id: two values with the same id compare equal
/// whatever their other fields.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UnitType {
    /// Primary key.
    pub id: u32,
    /// Display names, primary first.
    pub names: Vec<String>,
    /// Short internal codes, matched verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub codenames: Vec<String>,
    /// Coarse faction tag.
    #[serde(default)]
    pub faction: Faction,
    /// Battlefield role.
    #[serde(default)]
    pub category: Category,
    /// Army slots taken by one unit.
    #[serde(default)]
    pub capacity: u32,
    /// Health of one unit.
    #[serde(rename = "hit points")]
    pub hit_points: u32,
    /// Experience awarded for killing one unit.
    #[serde(rename = "experience when killed", default)]
    pub experience: u32,
}

impl UnitType {
    /// Creates a unit with the given id and names and default attributes.
    #[must_use]
    pub fn new<I, N>(id: u32, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            id,
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Builder method to set the faction.
    #[must_use]
    pub fn with_faction(mut self, faction: Faction) -> Self {
        self.faction = faction;
        self
    }

    /// Builder method to set the category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Builder method to add codenames.
    #[must_use]
    pub fn with_codenames<I, N>(mut self, codenames: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.codenames.extend(codenames.into_iter().map(Into::into));
        self
    }

    /// Whether the unit belongs to `faction`.
    #[must_use]
    pub fn is(&self, faction: Faction) -> bool {
        self.faction == faction
    }

    /// Whether the unit leads armies.
    #[must_use]
    pub fn is_leader(&self) -> bool {
        self.faction.is_leader()
    }

    /// The shortest of the unit's names and codenames; earliest wins ties.
    #[must_use]
    pub fn shortest_name(&self) -> &str {
        self.codenames
            .iter()
            .chain(&self.names)
            .filter(|n| !n.is_empty())
            .min_by_key(|n| n.chars().count())
            .map_or_else(|| self.first_name(), String::as_str)
    }
}

impl PartialEq for UnitType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UnitType {}

impl Hash for UnitType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for UnitType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnitType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl CatalogEntry for UnitType {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn strict_names(&self) -> &[String] {
        &self.codenames
    }

    fn prepare(&mut self) {
        self.names = self
            .names
            .iter()
            .map(|name| deep_trim(name))
            .filter(|name| !name.is_empty())
            .collect();
        self.codenames.retain(|code| !code.trim().is_empty());
    }
}

/// Unit types by id.
pub type UnitCatalog = NameCatalog<UnitType>;

impl NameCatalog<UnitType> {
    /// Units of the leader faction, in id order.
    pub fn leaders(&self) -> impl Iterator<Item = &UnitType> {
        self.iter().filter(|unit| unit.is_leader())
    }
}
