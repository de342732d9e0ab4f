//! Closed tag sets describing units.

use std::fmt;

use serde::{Deserialize, Serialize};
use warband_foundation::Tag;

/// Coarse faction of a unit.
///
/// [`Faction::General`] is the leader category: generals may join an army
/// of any other faction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Adventure enemy units.
    #[default]
    #[serde(rename = "non player adventure", alias = "non-player adventure")]
    NonPlayerAdventure,
    /// Expedition enemy units.
    #[serde(rename = "non player expedition", alias = "non-player expedition")]
    NonPlayerExpedition,
    /// Generals and champions.
    #[serde(rename = "general")]
    General,
    /// Combat academy units.
    #[serde(rename = "expedition")]
    Expedition,
    /// Common barracks units.
    #[serde(rename = "common")]
    Common,
    /// Elite barracks units.
    #[serde(rename = "elite")]
    Elite,
}

impl Faction {
    /// The faction that never counts towards a faction conflict.
    pub const LEADER: Faction = Faction::General;

    /// Whether this is the leader faction.
    #[must_use]
    pub fn is_leader(self) -> bool {
        self == Self::LEADER
    }
}

impl Tag for Faction {
    const KIND: &'static str = "faction";
    const ALL: &'static [Self] = &[
        Self::NonPlayerAdventure,
        Self::NonPlayerExpedition,
        Self::General,
        Self::Expedition,
        Self::Common,
        Self::Elite,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::NonPlayerAdventure => "non player adventure",
            Self::NonPlayerExpedition => "non player expedition",
            Self::General => "general",
            Self::Expedition => "expedition",
            Self::Common => "common",
            Self::Elite => "elite",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Battlefield role of a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Not specified.
    #[default]
    Unknown,
    /// Melee infantry.
    Melee,
    /// Ranged infantry.
    Ranged,
    /// Mounted units.
    Cavalry,
    /// Siege and artillery.
    Artillery,
    /// Elite units.
    Elite,
}

impl Tag for Category {
    const KIND: &'static str = "category";
    const ALL: &'static [Self] = &[
        Self::Unknown,
        Self::Melee,
        Self::Ranged,
        Self::Cavalry,
        Self::Artillery,
        Self::Elite,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Melee => "melee",
            Self::Ranged => "ranged",
            Self::Cavalry => "cavalry",
            Self::Artillery => "artillery",
            Self::Elite => "elite",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Skills a general can bring to battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BattleSkill {
    /// Juggernaut.
    Juggernaut,
    /// Garrison annex.
    GarrisonAnnex,
    /// Lightning slash.
    LightningSlash,
    /// Unstoppable charge.
    UnstoppableCharge,
    /// Weekly maintenance.
    WeeklyMaintenance,
    /// Master planner.
    MasterPlanner,
    /// Battle frenzy.
    BattleFrenzy,
    /// Rapid fire.
    RapidFire,
    /// Sniper training.
    SniperTraining,
    /// Cleave.
    Cleave,
    /// Fast learner.
    FastLearner,
    /// Overrun.
    Overrun,
}

impl Tag for BattleSkill {
    const KIND: &'static str = "battle skill";
    const ALL: &'static [Self] = &[
        Self::Juggernaut,
        Self::GarrisonAnnex,
        Self::LightningSlash,
        Self::UnstoppableCharge,
        Self::WeeklyMaintenance,
        Self::MasterPlanner,
        Self::BattleFrenzy,
        Self::RapidFire,
        Self::SniperTraining,
        Self::Cleave,
        Self::FastLearner,
        Self::Overrun,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Juggernaut => "juggernaut",
            Self::GarrisonAnnex => "garrison annex",
            Self::LightningSlash => "lightning slash",
            Self::UnstoppableCharge => "unstoppable charge",
            Self::WeeklyMaintenance => "weekly maintenance",
            Self::MasterPlanner => "master planner",
            Self::BattleFrenzy => "battle frenzy",
            Self::RapidFire => "rapid fire",
            Self::SniperTraining => "sniper training",
            Self::Cleave => "cleave",
            Self::FastLearner => "fast learner",
            Self::Overrun => "overrun",
        }
    }
}

impl fmt::Display for BattleSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
