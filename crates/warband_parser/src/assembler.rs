//! Army reconstruction from parsed blueprints.
//!
//! # Faction coercion
//!
//! A blueprint typed without filters may resolve names across several
//! factions, usually because a short name happens to match a unit of the
//! wrong faction exactly. When coercion is on, the assembler retries the
//! blueprint once per faction found (generals always allowed) and reports
//! every retry that resolves completely. A single such alternative replaces
//! the original army unless the build is strict.

use serde::{Deserialize, Serialize};
use warband_catalog::{Faction, UnitCatalog, UnitType};
use warband_foundation::{Discard, MessageLog};

use crate::army::{Army, UnitGroup};
use crate::blueprint::Blueprint;

/// Switches controlling [`ArmyAssembler::build`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Warn when no unit in the army is a general.
    pub require_leader: bool,
    /// Retry mixed-faction armies one faction at a time.
    pub coerce_factions: bool,
    /// Never replace the army with a coerced alternative.
    pub strict: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::lenient()
    }
}

impl BuildOptions {
    /// Coerces factions and adopts a single alternative.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            require_leader: true,
            coerce_factions: true,
            strict: false,
        }
    }

    /// Coerces factions but only suggests alternatives.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_leader: true,
            coerce_factions: true,
            strict: true,
        }
    }

    /// Builder method to set the missing-leader warning.
    #[must_use]
    pub fn with_require_leader(mut self, require_leader: bool) -> Self {
        self.require_leader = require_leader;
        self
    }

    /// Builder method to set faction coercion.
    #[must_use]
    pub fn with_coerce_factions(mut self, coerce_factions: bool) -> Self {
        self.coerce_factions = coerce_factions;
        self
    }

    /// Builder method to set strictness.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Resolves blueprints against a unit catalog.
pub struct ArmyAssembler<'c> {
    units: &'c UnitCatalog,
    options: BuildOptions,
}

impl<'c> ArmyAssembler<'c> {
    /// Creates an assembler with default options.
    #[must_use]
    pub fn new(units: &'c UnitCatalog) -> Self {
        Self {
            units,
            options: BuildOptions::default(),
        }
    }

    /// Builder method to set options.
    #[must_use]
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Resolves every token of `blueprint` among units passing `filter`.
    ///
    /// Returns `None` as soon as one name does not resolve to a single
    /// unit, or if merging repeated units overflows a group's count.
    /// Zero-quantity tokens must resolve but add nothing.
    pub fn try_build<F>(&self, blueprint: &Blueprint, filter: F, log: &mut dyn MessageLog) -> Option<Army>
    where
        F: Fn(&UnitType) -> bool,
    {
        if !blueprint.is_good() {
            return None;
        }

        let mut groups = Vec::with_capacity(blueprint.len());
        for token in blueprint.tokens() {
            let unit = self.units.find(&token.name, &filter, log).entry()?;
            groups.push(UnitGroup::new(unit.clone(), token.quantity));
        }
        let army = Army::from_groups(groups);
        if army.is_none() {
            log.push("Too many units of one type.".to_string());
        }
        army
    }

    /// Reconstructs the army described by `blueprint`.
    ///
    /// Never fails: problems are reported to `log` and yield an empty army.
    pub fn build(&self, blueprint: &Blueprint, log: &mut dyn MessageLog) -> Army {
        if !blueprint.is_good() {
            log.push("Parsing army failed.".to_string());
            return Army::new();
        }

        let Some(mut army) = self.try_build(blueprint, |_| true, log) else {
            log.push("Reconstructing army from database failed.".to_string());
            return Army::new();
        };

        if army.is_empty() {
            return army;
        }

        if self.options.require_leader && !army.has_leader() {
            log.push("Army does not have any generals.".to_string());
        }

        if self.options.coerce_factions {
            if let Some(coerced) = self.coerce(blueprint, &army, log) {
                army = coerced;
            }
        }

        tracing::debug!(army = %army, "army built");
        army
    }

    /// Looks for a single-faction reading of a mixed-faction army.
    fn coerce(&self, blueprint: &Blueprint, army: &Army, log: &mut dyn MessageLog) -> Option<Army> {
        let mut factions = army.factions();
        factions.remove(&Faction::LEADER);
        if factions.len() < 2 {
            return None;
        }

        log.push("There is more than one faction in the army.".to_string());
        let mut alternatives = Vec::new();
        for faction in factions {
            let allowed = |unit: &UnitType| unit.is(faction) || unit.is_leader();
            if let Some(alternative) = self.try_build(blueprint, allowed, &mut Discard) {
                log.push(format!("Did you mean: {}?", alternative.to_compact_string()));
                alternatives.push(alternative);
            }
        }

        tracing::debug!(count = alternatives.len(), "faction alternatives");
        if alternatives.len() == 1 && !self.options.strict {
            log.push("Assuming yes.".to_string());
            return alternatives.pop();
        }
        None
    }
}
