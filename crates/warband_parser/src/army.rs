//! Reconstructed armies.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use warband_catalog::{BattleSkill, Camp, CatalogEntry, Faction, UnitType};
use warband_foundation::TagArray;

use crate::blueprint::is_parseable_name;

/// A number of units of one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitGroup {
    /// The unit type.
    pub unit: UnitType,
    /// How many units.
    pub count: u32,
}

impl UnitGroup {
    /// Creates a group.
    #[must_use]
    pub fn new(unit: UnitType, count: u32) -> Self {
        Self { unit, count }
    }
}

/// Unit groups plus the camp and skills they fight with.
///
/// Groups are sorted by unit id, never repeat a unit type, and never hold
/// zero units.
#[derive(Clone, Debug, PartialEq)]
pub struct Army {
    groups: Vec<UnitGroup>,
    /// Camp the army shelters in.
    pub camp: Option<Camp>,
    /// Skill levels granted by generals.
    pub skills: TagArray<BattleSkill, u32>,
}

impl Default for Army {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            camp: None,
            skills: TagArray::sparse(),
        }
    }
}

impl Army {
    /// Creates an empty army.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an army, merging groups of the same unit type.
    ///
    /// Returns `None` if a merged count does not fit in a `u32`.
    #[must_use]
    pub fn from_groups<I>(groups: I) -> Option<Self>
    where
        I: IntoIterator<Item = UnitGroup>,
    {
        let mut merged: BTreeMap<u32, UnitGroup> = BTreeMap::new();
        for group in groups {
            if group.count == 0 {
                continue;
            }
            match merged.get_mut(&group.unit.id) {
                Some(existing) => existing.count = existing.count.checked_add(group.count)?,
                None => {
                    merged.insert(group.unit.id, group);
                }
            }
        }
        Some(Self {
            groups: merged.into_values().collect(),
            ..Self::default()
        })
    }

    /// Groups, sorted by unit id.
    #[must_use]
    pub fn groups(&self) -> &[UnitGroup] {
        &self.groups
    }

    /// Unit types present.
    pub fn units(&self) -> impl Iterator<Item = &UnitType> {
        self.groups.iter().map(|g| &g.unit)
    }

    /// Count of units of type `id`, zero if absent.
    #[must_use]
    pub fn count_of(&self, id: u32) -> u32 {
        self.groups
            .iter()
            .find(|g| g.unit.id == id)
            .map_or(0, |g| g.count)
    }

    /// Whether any group belongs to `faction`.
    #[must_use]
    pub fn has(&self, faction: Faction) -> bool {
        self.units().any(|unit| unit.is(faction))
    }

    /// Whether some group is led by a general.
    #[must_use]
    pub fn has_leader(&self) -> bool {
        self.units().any(UnitType::is_leader)
    }

    /// Distinct factions present.
    #[must_use]
    pub fn factions(&self) -> BTreeSet<Faction> {
        self.units().map(|unit| unit.faction).collect()
    }

    /// Number of groups.
    #[must_use]
    pub fn count_groups(&self) -> usize {
        self.groups.len()
    }

    /// Total number of units.
    #[must_use]
    pub fn count_units(&self) -> u64 {
        self.groups.iter().map(|g| u64::from(g.count)).sum()
    }

    /// Returns true if the army has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Short form: `<qty><shortest name>` per group, or "empty".
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        if self.groups.is_empty() {
            return "empty".to_string();
        }
        self.groups
            .iter()
            .map(|g| format!("{}{}", g.count, compact_name(&g.unit)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Canonical `<qty> <name> ...` form, which parses back to the same army.
impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", group.count, canonical_name(&group.unit))?;
        }
        Ok(())
    }
}

/// First name or codename that reads back from blueprint text.
fn canonical_name(unit: &UnitType) -> &str {
    unit.names
        .iter()
        .chain(&unit.codenames)
        .map(String::as_str)
        .find(|name| is_parseable_name(name))
        .unwrap_or_else(|| unit.first_name())
}

/// Shortest name that reads back from blueprint text; codenames win ties.
fn compact_name(unit: &UnitType) -> &str {
    unit.codenames
        .iter()
        .chain(&unit.names)
        .map(String::as_str)
        .filter(|name| is_parseable_name(name))
        .min_by_key(|name| name.chars().count())
        .unwrap_or_else(|| unit.shortest_name())
}
