use crate::{DamageClass, PokemonType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The means by which a move becomes available to a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearnMethod {
    LevelUp,
    Tutor,
    Egg,
    Machine,
}

impl LearnMethod {
    /// The tag used by the stored learn-method column.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            LearnMethod::LevelUp => "level-up",
            LearnMethod::Tutor => "tutor",
            LearnMethod::Egg => "egg",
            LearnMethod::Machine => "machine",
        }
    }
}

impl fmt::Display for LearnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LearnMethod::LevelUp => "Level Up",
            LearnMethod::Tutor => "Tutor",
            LearnMethod::Egg => "Egg",
            LearnMethod::Machine => "Machine",
        };
        write!(f, "{}", name)
    }
}

/// A species-scoped move-learning fact from the level/tutor ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedMove {
    pub name: String,
    /// Present for level-up entries only.
    pub level: Option<u32>,
    pub method: LearnMethod,
    pub version_group: Option<String>,
}

/// An egg-move row. The learning table carries a few move attributes of
/// its own, so these are kept alongside the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EggMove {
    pub name: String,
    pub move_type: Option<PokemonType>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub version_group: Option<String>,
}

/// One TM/HM machine. Machines are a shared catalog in the store, not a
/// per-species fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineEntry {
    pub move_name: String,
    pub machine_id: u32,
    pub item_name: String,
    pub version_group: Option<String>,
}

/// A move-catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub name: String,
    /// 0-100; None means "always hits / variable".
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub priority: i32,
    pub power: Option<u32>,
    pub damage_class: Option<DamageClass>,
    pub move_type: Option<PokemonType>,
    /// English effect text, when the catalog carries one.
    pub effect: Option<String>,
}

/// Contest metadata for a move. Every field is optional; the contest
/// table is sparsely populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestInfo {
    pub contest_type: Option<String>,
    pub appeal: Option<i32>,
    pub jam: Option<i32>,
    pub effect_description: Option<String>,
    pub flavor_text: Option<String>,
    pub super_appeal: Option<i32>,
    pub super_flavor_text: Option<String>,
}

/// The full detail view for one move: the catalog record plus the two
/// independently optional sections merged in from other tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveDetails {
    pub record: MoveRecord,
    /// Free-text effect override from the move-learning table.
    pub effect_override: Option<String>,
    pub contest: Option<ContestInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learn_method_db_tags() {
        assert_eq!(LearnMethod::LevelUp.as_db_str(), "level-up");
        assert_eq!(LearnMethod::Tutor.as_db_str(), "tutor");
        assert_eq!(LearnMethod::LevelUp.to_string(), "Level Up");
    }
}
