use crate::PokemonType;
use serde::{Deserialize, Serialize};

/// The six base stats of a species. Values are nominally 0-255 but the
/// effective ceiling is whatever the dataset actually contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl StatBlock {
    /// Sum of the six base stats.
    pub fn total(&self) -> u32 {
        self.hp as u32
            + self.attack as u32
            + self.defense as u32
            + self.sp_attack as u32
            + self.sp_defense as u32
            + self.speed as u32
    }
}

/// One entry of a species' ability list, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub name: String,
    pub is_hidden: bool,
}

/// The canonical per-species record: identity, physical attributes,
/// decoded stats, types, and abilities. The id is the join key used by
/// every other table in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,
    pub species_name: Option<String>,
    /// Height in decimeters.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub stats: StatBlock,
    pub primary_type: Option<PokemonType>,
    pub secondary_type: Option<PokemonType>,
    pub abilities: Vec<AbilitySlot>,
}

impl SpeciesRecord {
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    /// True when the species has the given type in either slot.
    pub fn has_type(&self, type_: PokemonType) -> bool {
        self.primary_type == Some(type_) || self.secondary_type == Some(type_)
    }
}

/// Breeding and flavor attributes of a species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingProfile {
    /// Up to two egg group names, in stored order.
    pub egg_groups: Vec<String>,
    pub hatch_counter: Option<u32>,
    /// -1 = genderless, otherwise eighths of the population that is female (0-8).
    pub gender_rate: Option<i32>,
    pub growth_rate: Option<String>,
    pub base_happiness: Option<u32>,
    pub capture_rate: Option<u32>,
    pub habitat: Option<String>,
    pub color: Option<String>,
    pub shape: Option<String>,
    pub genus: Option<String>,
    pub is_baby: bool,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub has_gender_differences: bool,
}

impl BreedingProfile {
    /// Hatch time in steps (counter x 255).
    pub fn hatch_steps(&self) -> Option<u32> {
        self.hatch_counter.map(|c| c * 255)
    }

    pub fn is_genderless(&self) -> bool {
        self.gender_rate == Some(-1)
    }

    /// Percentage of the population that is female, None for genderless
    /// or unknown gender data.
    pub fn female_percent(&self) -> Option<u32> {
        match self.gender_rate {
            Some(rate) if (0..=8).contains(&rate) => Some(rate as u32 * 100 / 8),
            _ => None,
        }
    }

    pub fn male_percent(&self) -> Option<u32> {
        self.female_percent().map(|f| 100 - f)
    }
}
