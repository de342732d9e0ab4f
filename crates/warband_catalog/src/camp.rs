//! Defensive camps an army can shelter in.

use serde::{Deserialize, Serialize};
use warband_foundation::{deep_trim, relax_case};

use crate::catalog::NameCatalog;
use crate::entry::CatalogEntry;

/// A camp, keyed by its lowercase primary name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camp {
    /// Display names, primary first.
    pub names: Vec<String>,
    /// Durability of the camp.
    #[serde(rename = "hit points")]
    pub hit_points: u32,
    /// Percentage of incoming damage absorbed.
    #[serde(rename = "damage reduction", default)]
    pub damage_reduction: u32,
}

impl Camp {
    /// Creates a camp with the given names.
    #[must_use]
    pub fn new<I, N>(names: I, hit_points: u32) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            hit_points,
            damage_reduction: 0,
        }
    }
}

impl CatalogEntry for Camp {
    type Key = String;

    fn key(&self) -> String {
        relax_case(self.first_name())
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn prepare(&mut self) {
        self.names = self
            .names
            .iter()
            .map(|name| deep_trim(name))
            .filter(|name| !name.is_empty())
            .collect();
    }
}

/// Camps by lowercase name.
pub type CampCatalog = NameCatalog<Camp>;
