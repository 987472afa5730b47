use crate::prettify;
use serde::{Deserialize, Serialize};

/// One way of triggering an evolution. A single trigger can combine
/// several simultaneous conditions (e.g. level + held item + night), so
/// this is a sparse fact set rather than a tagged union.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRequirement {
    pub min_level: Option<u32>,
    pub item: Option<String>,
    pub held_item: Option<String>,
    pub trigger: Option<String>,
    pub min_happiness: Option<u32>,
    pub time_of_day: Option<String>,
    pub location: Option<String>,
    pub known_move: Option<String>,
    pub party_species: Option<String>,
    pub party_type: Option<String>,
    /// 1 = Female, 2 = Male per the dataset convention.
    pub gender: Option<u32>,
    pub min_beauty: Option<u32>,
    pub min_affection: Option<u32>,
    pub needs_overworld_rain: bool,
    pub turn_upside_down: bool,
}

impl EvolutionRequirement {
    /// Render each present condition as a clause, joined by " + ".
    ///
    /// The field-check order is fixed so the output is reproducible:
    /// level, item, held item, trade, happiness, time of day, location,
    /// known move, party species, party type, gender, beauty, affection,
    /// rain, upside-down. An empty requirement set renders as "".
    pub fn describe(&self) -> String {
        let mut clauses = Vec::new();

        if let Some(level) = self.min_level {
            clauses.push(format!("Lv. {}", level));
        }
        if let Some(item) = &self.item {
            clauses.push(format!("Use {}", prettify(item)));
        }
        if let Some(held) = &self.held_item {
            clauses.push(format!("Hold {}", prettify(held)));
        }
        if self.trigger.as_deref() == Some("trade") {
            clauses.push("Trade".to_string());
        }
        if let Some(happiness) = self.min_happiness {
            clauses.push(format!("Happiness {}", happiness));
        }
        if let Some(time) = &self.time_of_day {
            clauses.push(format!("At {}", prettify(time)));
        }
        if let Some(location) = &self.location {
            clauses.push(format!("At {}", prettify(location)));
        }
        if let Some(known_move) = &self.known_move {
            clauses.push(format!("Know {}", prettify(known_move)));
        }
        if let Some(species) = &self.party_species {
            clauses.push(format!("{} in party", prettify(species)));
        }
        if let Some(type_) = &self.party_type {
            clauses.push(format!("{} in party", prettify(type_)));
        }
        if let Some(gender) = self.gender {
            let gender_name = match gender {
                1 => "Female",
                2 => "Male",
                _ => "Unknown",
            };
            clauses.push(format!("{} only", gender_name));
        }
        if let Some(beauty) = self.min_beauty {
            clauses.push(format!("Beauty {}", beauty));
        }
        if let Some(affection) = self.min_affection {
            clauses.push(format!("Affection {}", affection));
        }
        if self.needs_overworld_rain {
            clauses.push("Rain required".to_string());
        }
        if self.turn_upside_down {
            clauses.push("Turn upside down".to_string());
        }

        clauses.join(" + ")
    }

    pub fn is_empty(&self) -> bool {
        *self == EvolutionRequirement::default()
    }
}

/// A node of an evolution chain: one species, the alternative ways of
/// reaching it, and the species it evolves into. The chain root carries
/// no requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: String,
    /// Zero or more alternative requirement sets; each entry is one
    /// complete way of triggering this evolution.
    pub requirements: Vec<EvolutionRequirement>,
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Case-insensitive containment test over the whole tree.
    ///
    /// Walks with an explicit stack, so malformed deeply-nested data
    /// cannot blow the call stack.
    pub fn contains(&self, species_name: &str) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.species.eq_ignore_ascii_case(species_name) {
                return true;
            }
            stack.extend(node.evolves_to.iter());
        }
        false
    }

    /// Every alternative requirement set, formatted independently.
    /// Empty sets contribute no text.
    pub fn requirement_texts(&self) -> Vec<String> {
        self.requirements
            .iter()
            .map(|req| req.describe())
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// All species names in the tree, depth-first.
    pub fn species_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            names.push(node.species.as_str());
            for child in node.evolves_to.iter().rev() {
                stack.push(child);
            }
        }
        names
    }
}
