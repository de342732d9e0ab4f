//! Camp and skill settings applied to a built army.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use warband_catalog::{BattleSkill, Camp};
use warband_foundation::{MessageLog, Tag, TagArray};

use crate::army::Army;

/// Extra battle settings layered on top of an army.
///
/// Skills are keyed by unit name: a skill set applies when any unit in the
/// army carries that exact name. Skill arrays are sparse, so only granted
/// skills are applied, logged and saved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmyDecorator {
    /// Camp to shelter in.
    pub camp: Option<Camp>,
    /// Skill levels by unit name.
    pub skills: BTreeMap<String, TagArray<BattleSkill, u32>>,
}

impl ArmyDecorator {
    /// Creates a decorator that changes nothing but resets skills.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the camp.
    #[must_use]
    pub fn with_camp(mut self, camp: Camp) -> Self {
        self.camp = Some(camp);
        self
    }

    /// Builder method to set one skill level for a unit name.
    #[must_use]
    pub fn with_skill(mut self, unit_name: impl Into<String>, skill: BattleSkill, level: u32) -> Self {
        self.skills
            .entry(unit_name.into())
            .or_insert_with(TagArray::sparse)[skill] = level;
        self
    }

    /// Overwrites the army's camp and skills with this decorator's.
    pub fn decorate(&self, army: &mut Army, log: &mut dyn MessageLog) {
        army.camp.clone_from(&self.camp);
        army.skills.clear();

        for (name, skills) in &self.skills {
            if !army.units().any(|unit| unit.names.iter().any(|n| n == name)) {
                continue;
            }

            let mut applied = Vec::new();
            for (skill, level) in skills.iter() {
                army.skills[skill] = *level;
                applied.push(format!("{} ({level})", skill.name()));
            }
            if !applied.is_empty() {
                log.push(format!("Applying skills: {}.", applied.join(", ")));
            }
        }
    }
}
