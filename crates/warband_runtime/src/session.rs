//! Session state for the REPL.
//!
//! The session owns the catalogs, the user settings, and the warnings
//! produced while loading data and evaluating blueprints. Nothing here is
//! global: whoever needs a catalog borrows it from the session.

use std::path::{Path, PathBuf};

use warband_catalog::{
    AdventureCatalog, CampCatalog, Lookup, UnitCatalog, UnitType, loader,
};
use warband_foundation::{Result, Warnings};
use warband_parser::{Army, ArmyAssembler, BlueprintParser};

use crate::settings::Settings;

/// Counts of entries added by [`Session::load_data_dir`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Units added.
    pub units: usize,
    /// Camps added.
    pub camps: usize,
    /// Adventures added.
    pub adventures: usize,
    /// Adventure units linked.
    pub links: usize,
}

/// Session state for an interactive REPL session.
#[derive(Debug, Default)]
pub struct Session {
    /// Unit types by id.
    units: UnitCatalog,

    /// Camps by name.
    camps: CampCatalog,

    /// Adventures by name.
    adventures: AdventureCatalog,

    /// User settings.
    settings: Settings,

    /// Messages not yet shown to the user.
    warnings: Warnings,
}

impl Session {
    /// Creates a session with empty catalogs and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Returns the unit catalog.
    #[must_use]
    pub fn units(&self) -> &UnitCatalog {
        &self.units
    }

    /// Returns the unit catalog mutably.
    pub fn units_mut(&mut self) -> &mut UnitCatalog {
        &mut self.units
    }

    /// Returns the camp catalog.
    #[must_use]
    pub fn camps(&self) -> &CampCatalog {
        &self.camps
    }

    /// Returns the adventure catalog.
    #[must_use]
    pub fn adventures(&self) -> &AdventureCatalog {
        &self.adventures
    }

    /// Returns the settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the settings mutably.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Returns the pending warnings.
    #[must_use]
    pub fn warnings(&self) -> &Warnings {
        &self.warnings
    }

    /// Takes every pending warning, oldest first.
    pub fn drain_warnings(&mut self) -> Vec<String> {
        self.warnings.drain().collect()
    }

    /// Empties all catalogs.
    pub fn clear(&mut self) {
        self.units.clear();
        self.camps.clear();
        self.adventures.clear();
    }

    /// Loads the `units`, `camps` and `adventures` subdirectories of `dir`.
    ///
    /// Missing subdirectories are skipped. Adventures are linked to units
    /// once everything is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if a data file cannot be read or decoded.
    pub fn load_data_dir(&mut self, dir: &Path) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        let units = dir.join("units");
        if units.is_dir() {
            report.units = loader::populate(&mut self.units, &units, &mut self.warnings)?;
        }
        let camps = dir.join("camps");
        if camps.is_dir() {
            report.camps = loader::populate(&mut self.camps, &camps, &mut self.warnings)?;
        }
        let adventures = dir.join("adventures");
        if adventures.is_dir() {
            report.adventures = loader::populate(&mut self.adventures, &adventures, &mut self.warnings)?;
        }
        report.links = self.adventures.link_units(&self.units, &mut self.warnings);

        tracing::info!(dir = %dir.display(), ?report, "data loaded");
        self.settings.data_folder = Some(dir.to_path_buf());
        Ok(report)
    }

    /// Loads the data folder named in the settings, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if a data file cannot be read or decoded.
    pub fn load_configured_data(&mut self) -> Result<Option<LoadReport>> {
        let Some(dir) = self.settings.data_folder.clone() else {
            return Ok(None);
        };
        self.load_data_dir(&dir).map(Some)
    }

    /// Parses and builds `text` with the configured options, then applies
    /// the player's decorations.
    pub fn evaluate(&mut self, text: &str) -> Army {
        let blueprint = BlueprintParser::parse(text);
        let mut army = ArmyAssembler::new(&self.units)
            .with_options(self.settings.build)
            .build(&blueprint, &mut self.warnings);
        if !army.is_empty() {
            self.settings.left.decorate(&mut army, &mut self.warnings);
        }
        army
    }

    /// Looks a unit up by fuzzy name.
    pub fn find_unit(&mut self, query: &str) -> Lookup<'_, UnitType> {
        self.units.find(query, |_| true, &mut self.warnings)
    }

    /// Resolves a path relative to the data folder, if there is one.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let candidate = PathBuf::from(path);
        match &self.settings.data_folder {
            Some(base) if candidate.is_relative() => base.join(candidate),
            _ => candidate,
        }
    }
}
