//! Tolerant decoders for the embedded-JSON columns.
//!
//! Stored rows carry denormalized JSON fragments (stats, types, abilities,
//! egg groups, effect entries). A malformed fragment is a data defect in
//! one row, not a reason to fail the whole query, so every decoder here
//! degrades to `None` or an empty collection and logs a warning.

use serde::Deserialize;

use schema::{AbilitySlot, PokemonType, StatBlock};

#[derive(Debug, Deserialize)]
struct NamedRef {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawStatEntry {
    #[serde(default)]
    base_stat: u16,
    stat: NamedRef,
}

#[derive(Debug, Deserialize)]
struct RawTypeEntry {
    #[serde(rename = "type")]
    type_ref: NamedRef,
}

#[derive(Debug, Deserialize)]
struct RawAbilityEntry {
    ability: NamedRef,
    #[serde(default)]
    is_hidden: bool,
}

#[derive(Debug, Deserialize)]
struct RawEffectEntry {
    #[serde(default)]
    effect: String,
    language: NamedRef,
}

fn parse_column<'a, T: Deserialize<'a>>(raw: Option<&'a str>, column: &str) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("undecodable {} column: {}", column, err);
            None
        }
    }
}

/// Decode a stored stats column into a `StatBlock`.
///
/// Entries with unrecognized stat names are ignored; a missing or
/// unparseable column yields `None` so callers can tell "no data" from
/// "all zeroes".
pub fn decode_stats(raw: Option<&str>) -> Option<StatBlock> {
    let entries: Vec<RawStatEntry> = parse_column(raw, "stats")?;
    let mut block = StatBlock::default();
    for entry in entries {
        match entry.stat.name.as_str() {
            "hp" => block.hp = entry.base_stat,
            "attack" => block.attack = entry.base_stat,
            "defense" => block.defense = entry.base_stat,
            "special-attack" => block.sp_attack = entry.base_stat,
            "special-defense" => block.sp_defense = entry.base_stat,
            "speed" => block.speed = entry.base_stat,
            _ => {}
        }
    }
    Some(block)
}

/// Decode a stored types column into (primary, secondary).
///
/// Array order is preserved; entries past the second are ignored. Type
/// names outside the known eighteen decode to `None` in their slot.
pub fn decode_types(raw: Option<&str>) -> Option<(Option<PokemonType>, Option<PokemonType>)> {
    let entries: Vec<RawTypeEntry> = parse_column(raw, "types")?;
    let mut slots = entries
        .iter()
        .map(|entry| PokemonType::from_name(&entry.type_ref.name));
    let primary = slots.next().flatten();
    let secondary = slots.next().flatten();
    Some((primary, secondary))
}

/// Decode a stored abilities column. Duplicates are preserved as stored.
pub fn decode_abilities(raw: Option<&str>) -> Vec<AbilitySlot> {
    let entries: Vec<RawAbilityEntry> = match parse_column(raw, "abilities") {
        Some(entries) => entries,
        None => return Vec::new(),
    };
    entries
        .into_iter()
        .map(|entry| AbilitySlot {
            name: entry.ability.name,
            is_hidden: entry.is_hidden,
        })
        .collect()
}

/// Decode a stored egg-groups column. At most two groups are kept.
pub fn decode_egg_groups(raw: Option<&str>) -> Vec<String> {
    let mut groups: Vec<String> = match parse_column(raw, "egg_groups") {
        Some(groups) => groups,
        None => return Vec::new(),
    };
    groups.truncate(2);
    groups
}

/// Pick the display effect text from a stored effect-entries column:
/// the English entry when present, otherwise the first entry.
pub fn decode_effect_entries(raw: Option<&str>) -> Option<String> {
    let entries: Vec<RawEffectEntry> = parse_column(raw, "effect_entries")?;
    let english = entries
        .iter()
        .find(|entry| entry.language.name == "en")
        .map(|entry| entry.effect.clone());
    english.or_else(|| entries.into_iter().next().map(|entry| entry.effect))
}
