//! Evolution-chain resolution.
//!
//! Chains are stored whole as nested JSON documents, one row per chain.
//! Resolution scans every stored chain for a species name; when no chain
//! names the species (regional forms share their base form's chain under
//! the base species id), the species id is retried as a chain-row id.

use serde::Deserialize;

use schema::{EvolutionNode, EvolutionRequirement};

use crate::errors::DexResult;
use crate::store::DexStore;

/// Nesting cap applied while converting a raw chain document. Real
/// chains are at most three stages deep.
const MAX_CHAIN_DEPTH: usize = 8;

#[derive(Debug, Deserialize)]
struct RawNamedRef {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawEvolutionDetail {
    min_level: Option<u32>,
    item: Option<RawNamedRef>,
    held_item: Option<RawNamedRef>,
    trigger: Option<RawNamedRef>,
    min_happiness: Option<u32>,
    time_of_day: Option<String>,
    location: Option<RawNamedRef>,
    known_move: Option<RawNamedRef>,
    party_species: Option<RawNamedRef>,
    party_type: Option<RawNamedRef>,
    gender: Option<u32>,
    min_beauty: Option<u32>,
    min_affection: Option<u32>,
    #[serde(default)]
    needs_overworld_rain: bool,
    #[serde(default)]
    turn_upside_down: bool,
}

#[derive(Debug, Deserialize)]
struct RawChainNode {
    species: RawNamedRef,
    #[serde(default)]
    evolution_details: Vec<RawEvolutionDetail>,
    #[serde(default)]
    evolves_to: Vec<RawChainNode>,
}

impl RawEvolutionDetail {
    fn into_requirement(self) -> EvolutionRequirement {
        // `time_of_day` arrives as "" when unset; treat that as absent.
        let time_of_day = self.time_of_day.filter(|t| !t.is_empty());
        EvolutionRequirement {
            min_level: self.min_level,
            item: self.item.map(|r| r.name),
            held_item: self.held_item.map(|r| r.name),
            trigger: self.trigger.map(|r| r.name),
            min_happiness: self.min_happiness,
            time_of_day,
            location: self.location.map(|r| r.name),
            known_move: self.known_move.map(|r| r.name),
            party_species: self.party_species.map(|r| r.name),
            party_type: self.party_type.map(|r| r.name),
            gender: self.gender,
            min_beauty: self.min_beauty,
            min_affection: self.min_affection,
            needs_overworld_rain: self.needs_overworld_rain,
            turn_upside_down: self.turn_upside_down,
        }
    }
}

impl RawChainNode {
    fn into_node(self, depth: usize) -> EvolutionNode {
        let evolves_to = if depth >= MAX_CHAIN_DEPTH {
            Vec::new()
        } else {
            self.evolves_to
                .into_iter()
                .map(|child| child.into_node(depth + 1))
                .collect()
        };
        EvolutionNode {
            species: self.species.name,
            requirements: self
                .evolution_details
                .into_iter()
                .map(RawEvolutionDetail::into_requirement)
                .collect(),
            evolves_to,
        }
    }
}

fn parse_chain(chain_id: i64, json: &str) -> Option<EvolutionNode> {
    match serde_json::from_str::<RawChainNode>(json) {
        Ok(raw) => Some(raw.into_node(0)),
        Err(err) => {
            log::warn!("undecodable evolution chain {}: {}", chain_id, err);
            None
        }
    }
}

/// Find the chain that names a species, scanning stored chains in row
/// order and keeping the first match. Falls back to chain-row lookup by
/// species id, returning that chain whether or not it names the species.
pub fn find_chain_containing(
    store: &DexStore,
    species_name: &str,
) -> DexResult<Option<EvolutionNode>> {
    for (chain_id, json) in store.evolution_chains()? {
        if let Some(chain) = parse_chain(chain_id, &json) {
            if chain.contains(species_name) {
                return Ok(Some(chain));
            }
        }
    }

    if let Some(species_id) = store.species_id_by_name(species_name)? {
        if let Some(json) = store.evolution_chain_json(species_id)? {
            return Ok(parse_chain(species_id as i64, &json));
        }
    }
    Ok(None)
}
