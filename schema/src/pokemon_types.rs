use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// The 18 Pokemon types, declared in the column order of the stored
/// type-effectiveness table. `PokemonType::iter()` therefore walks the
/// attacking types in the same order as the multiplier columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Number of attacking types, which is also the number of multiplier
/// columns in a stored type-effectiveness row.
pub const TYPE_COUNT: usize = 18;

impl PokemonType {
    /// Canonical title-cased name, matching the stored column headers.
    pub fn name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fire",
            PokemonType::Water => "Water",
            PokemonType::Electric => "Electric",
            PokemonType::Grass => "Grass",
            PokemonType::Ice => "Ice",
            PokemonType::Fighting => "Fighting",
            PokemonType::Poison => "Poison",
            PokemonType::Ground => "Ground",
            PokemonType::Flying => "Flying",
            PokemonType::Psychic => "Psychic",
            PokemonType::Bug => "Bug",
            PokemonType::Rock => "Rock",
            PokemonType::Ghost => "Ghost",
            PokemonType::Dragon => "Dragon",
            PokemonType::Dark => "Dark",
            PokemonType::Steel => "Steel",
            PokemonType::Fairy => "Fairy",
        }
    }

    /// Case-insensitive lookup from a dataset type name ("grass", "Grass", ...).
    pub fn from_name(name: &str) -> Option<PokemonType> {
        use strum::IntoEnumIterator;
        PokemonType::iter().find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// All 18 types, in multiplier-column order.
    pub fn all() -> [PokemonType; TYPE_COUNT] {
        use strum::IntoEnumIterator;
        let mut types = [PokemonType::Normal; TYPE_COUNT];
        for (slot, t) in types.iter_mut().zip(PokemonType::iter()) {
            *slot = t;
        }
        types
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a move deals its damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageClass {
    Physical,
    Special,
    Status,
}

impl DamageClass {
    pub fn from_name(name: &str) -> Option<DamageClass> {
        match name.trim().to_ascii_lowercase().as_str() {
            "physical" => Some(DamageClass::Physical),
            "special" => Some(DamageClass::Special),
            "status" => Some(DamageClass::Status),
            _ => None,
        }
    }
}

impl fmt::Display for DamageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DamageClass::Physical => "Physical",
            DamageClass::Special => "Special",
            DamageClass::Status => "Status",
        };
        write!(f, "{}", name)
    }
}
