//! Type-effectiveness lookups and the multiplier-bucket classification.
//!
//! The stored table keeps one row per defending type (or unordered type
//! pair) with a multiplier column per attacking type. This module turns
//! those multipliers into named buckets for display.

use std::collections::HashMap;

use schema::{PokemonType, TYPE_COUNT};

use crate::errors::DexResult;
use crate::store::{DexStore, EffectivenessRow};

/// Attacking types bucketed by their damage multiplier against one
/// defender. Every attacking type lands in at most one bucket; types at
/// exactly 1.0 land in none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeMatchups {
    pub weak: Vec<PokemonType>,
    pub very_weak: Vec<PokemonType>,
    pub resistant: Vec<PokemonType>,
    pub very_resistant: Vec<PokemonType>,
    pub immune: Vec<PokemonType>,
}

impl TypeMatchups {
    pub fn is_empty(&self) -> bool {
        self.weak.is_empty()
            && self.very_weak.is_empty()
            && self.resistant.is_empty()
            && self.very_resistant.is_empty()
            && self.immune.is_empty()
    }

    fn from_multipliers(multipliers: &[f64; TYPE_COUNT]) -> TypeMatchups {
        let mut matchups = TypeMatchups::default();
        for (attacker, &multiplier) in PokemonType::all().iter().zip(multipliers.iter()) {
            match bucket(multiplier) {
                Bucket::Immune => matchups.immune.push(*attacker),
                Bucket::VeryWeak => matchups.very_weak.push(*attacker),
                Bucket::Weak => matchups.weak.push(*attacker),
                Bucket::VeryResistant => matchups.very_resistant.push(*attacker),
                Bucket::Resistant => matchups.resistant.push(*attacker),
                Bucket::Neutral => {}
            }
        }
        matchups
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Immune,
    VeryWeak,
    Weak,
    VeryResistant,
    Resistant,
    Neutral,
}

fn bucket(multiplier: f64) -> Bucket {
    if multiplier == 0.0 {
        Bucket::Immune
    } else if multiplier == 4.0 {
        Bucket::VeryWeak
    } else if multiplier > 1.0 {
        Bucket::Weak
    } else if multiplier == 0.25 {
        Bucket::VeryResistant
    } else if multiplier < 1.0 {
        Bucket::Resistant
    } else {
        Bucket::Neutral
    }
}

/// Classify one defender directly against the store, without a cache.
/// Dual-type defenders match the stored row in either column order; a
/// missing row is `Ok(None)`.
pub fn effectiveness(
    store: &DexStore,
    primary: PokemonType,
    secondary: Option<PokemonType>,
) -> DexResult<Option<TypeMatchups>> {
    let row = store.effectiveness_row(primary.name(), secondary.map(|t| t.name()))?;
    Ok(row.map(|row| TypeMatchups::from_multipliers(&row.multipliers)))
}

/// The whole effectiveness table, loaded once and kept for the life of
/// the process. Repeated matchup queries then never touch the store.
pub struct TypeChart {
    entries: HashMap<(PokemonType, Option<PokemonType>), [f64; TYPE_COUNT]>,
}

impl TypeChart {
    /// Load every stored row. Rows naming an unrecognized type are
    /// skipped with a warning.
    pub fn load(store: &DexStore) -> DexResult<TypeChart> {
        let mut entries = HashMap::new();
        for row in store.effectiveness_rows()? {
            match Self::parse_key(&row) {
                Some(key) => {
                    entries.insert(key, row.multipliers);
                }
                None => {
                    log::warn!(
                        "skipping effectiveness row with unknown type ({:?}, {:?})",
                        row.type1,
                        row.type2
                    );
                }
            }
        }
        Ok(TypeChart { entries })
    }

    fn parse_key(row: &EffectivenessRow) -> Option<(PokemonType, Option<PokemonType>)> {
        let type1 = PokemonType::from_name(&row.type1)?;
        let type2 = match &row.type2 {
            Some(name) => Some(PokemonType::from_name(name)?),
            None => None,
        };
        Some((type1, type2))
    }

    /// Matchups for a defender, trying both orderings of a type pair.
    pub fn matchups(
        &self,
        primary: PokemonType,
        secondary: Option<PokemonType>,
    ) -> Option<TypeMatchups> {
        let multipliers = self.entries.get(&(primary, secondary)).or_else(|| {
            secondary.and_then(|second| self.entries.get(&(second, Some(primary))))
        })?;
        Some(TypeMatchups::from_multipliers(multipliers))
    }
}
