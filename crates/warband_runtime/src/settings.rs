//! Persisted user settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use warband_parser::{ArmyDecorator, BuildOptions};

/// User configuration carried between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `units/`, `camps/` and `adventures/`.
    pub data_folder: Option<PathBuf>,
    /// Number of battles simulated per request.
    pub simulations: u32,
    /// Camp destructions simulated per battle.
    pub destructions: u32,
    /// Worker threads for simulation.
    pub threads: u32,
    /// How blueprints are turned into armies.
    pub build: BuildOptions,
    /// Decorations for the player's army.
    pub left: ArmyDecorator,
    /// Decorations for the enemy army.
    pub right: ArmyDecorator,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_folder: None,
            simulations: 10_000,
            destructions: 10,
            threads: 1,
            build: BuildOptions::default(),
            left: ArmyDecorator::default(),
            right: ArmyDecorator::default(),
        }
    }
}

impl Settings {
    /// Builder method to set the data folder.
    #[must_use]
    pub fn with_data_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.data_folder = Some(folder.into());
        self
    }

    /// Builder method to set build options.
    #[must_use]
    pub fn with_build_options(mut self, build: BuildOptions) -> Self {
        self.build = build;
        self
    }
}
