//! Species search, single-species lookup, and breeding queries.

use schema::{BreedingProfile, PokemonType, SpeciesRecord, StatBlock};

use crate::decode::{decode_abilities, decode_egg_groups, decode_stats, decode_types};
use crate::errors::DexResult;
use crate::store::{DexStore, SpeciesRow};

/// Cap on the breeding-partner preview list.
const PARTNER_LIMIT: usize = 20;

/// Search criteria. Every field is optional; absent fields do not
/// constrain the result. All active criteria must hold at once.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Case-insensitive name substring.
    pub name: Option<String>,
    /// Dex-number text; ignored unless it parses as a number.
    pub number: Option<String>,
    /// Type name, matched against either type slot (case-insensitive).
    pub type_name: Option<String>,
    pub min_hp: Option<u16>,
    pub min_attack: Option<u16>,
    pub min_defense: Option<u16>,
    pub min_sp_attack: Option<u16>,
    pub min_sp_defense: Option<u16>,
    pub min_speed: Option<u16>,
}

impl SearchFilters {
    fn parsed_number(&self) -> Option<u32> {
        self.number.as_deref().and_then(|n| n.trim().parse().ok())
    }

    /// Name criterion, re-checked per row. The name fragment narrows
    /// server-side on the usual path, but the number path fetches by id
    /// and must still honor an active name filter.
    fn name_passes(&self, name: &str) -> bool {
        match self.name.as_deref() {
            Some(fragment) => name.to_lowercase().contains(&fragment.to_lowercase()),
            None => true,
        }
    }

    fn wants_stats(&self) -> bool {
        self.min_hp.is_some()
            || self.min_attack.is_some()
            || self.min_defense.is_some()
            || self.min_sp_attack.is_some()
            || self.min_sp_defense.is_some()
            || self.min_speed.is_some()
    }

    /// Stat criteria against a decoded block. A row whose stats column
    /// failed to decode is excluded whenever any stat criterion is
    /// active.
    fn stats_pass(&self, stats: Option<&StatBlock>) -> bool {
        if !self.wants_stats() {
            return true;
        }
        let stats = match stats {
            Some(stats) => stats,
            None => return false,
        };
        self.min_hp.map_or(true, |min| stats.hp >= min)
            && self.min_attack.map_or(true, |min| stats.attack >= min)
            && self.min_defense.map_or(true, |min| stats.defense >= min)
            && self.min_sp_attack.map_or(true, |min| stats.sp_attack >= min)
            && self.min_sp_defense.map_or(true, |min| stats.sp_defense >= min)
            && self.min_speed.map_or(true, |min| stats.speed >= min)
    }

    /// Type criterion against decoded slots, with the same exclusion
    /// rule for undecodable columns.
    fn type_passes(
        &self,
        slots: Option<(Option<PokemonType>, Option<PokemonType>)>,
    ) -> bool {
        let wanted = match self.type_name.as_deref() {
            Some(name) => name,
            None => return true,
        };
        let wanted = match PokemonType::from_name(wanted) {
            Some(t) => t,
            // A filter naming no known type matches nothing.
            None => return false,
        };
        match slots {
            Some((primary, secondary)) => {
                primary == Some(wanted) || secondary == Some(wanted)
            }
            None => false,
        }
    }
}

fn record_from_row(row: SpeciesRow) -> SpeciesRecord {
    let stats = decode_stats(row.stats_json.as_deref());
    let types = decode_types(row.types_json.as_deref());
    record_from_parts(row, stats, types)
}

fn record_from_parts(
    row: SpeciesRow,
    stats: Option<StatBlock>,
    types: Option<(Option<PokemonType>, Option<PokemonType>)>,
) -> SpeciesRecord {
    let stats = stats.unwrap_or_default();
    let (primary_type, secondary_type) = types.unwrap_or((None, None));
    SpeciesRecord {
        id: row.id,
        name: row.name,
        species_name: row.species_name,
        height: row.height.unwrap_or(0),
        weight: row.weight.unwrap_or(0),
        stats,
        primary_type,
        secondary_type,
        abilities: decode_abilities(row.abilities_json.as_deref()),
    }
}

/// Run a species search: the name fragment narrows server-side, type and
/// stat criteria are applied per row after decoding. Results ascend by
/// id with one record per matching species; no criteria returns the
/// whole dex.
pub fn search(store: &DexStore, filters: &SearchFilters) -> DexResult<Vec<SpeciesRecord>> {
    let rows = match filters.parsed_number() {
        Some(id) => store.species_row(id)?.into_iter().collect(),
        None => store.species_rows(filters.name.as_deref())?,
    };

    let mut records = Vec::new();
    for row in rows {
        if !filters.name_passes(&row.name) {
            continue;
        }
        let stats = decode_stats(row.stats_json.as_deref());
        let types = decode_types(row.types_json.as_deref());
        if filters.stats_pass(stats.as_ref()) && filters.type_passes(types) {
            records.push(record_from_parts(row, stats, types));
        }
    }
    Ok(records)
}

/// One species by id, fully decoded. Unknown ids are `Ok(None)`.
pub fn species_by_id(store: &DexStore, id: u32) -> DexResult<Option<SpeciesRecord>> {
    Ok(store.species_row(id)?.map(record_from_row))
}

/// Distinct type names across the whole dex, title-cased and sorted.
pub fn all_types(store: &DexStore) -> DexResult<Vec<String>> {
    let mut names: Vec<&'static str> = Vec::new();
    for row in store.species_rows(None)? {
        if let Some((primary, secondary)) = decode_types(row.types_json.as_deref()) {
            for t in [primary, secondary].into_iter().flatten() {
                names.push(t.name());
            }
        }
    }
    names.sort_unstable();
    names.dedup();
    Ok(names.into_iter().map(String::from).collect())
}

/// The highest stored value of each base stat, for scaling stat bars.
/// Falls back to 255 per stat when nothing decodes.
pub fn stat_maximums(store: &DexStore) -> DexResult<StatBlock> {
    let mut max: Option<StatBlock> = None;
    for row in store.species_rows(None)? {
        if let Some(stats) = decode_stats(row.stats_json.as_deref()) {
            let entry = max.get_or_insert_with(StatBlock::default);
            entry.hp = entry.hp.max(stats.hp);
            entry.attack = entry.attack.max(stats.attack);
            entry.defense = entry.defense.max(stats.defense);
            entry.sp_attack = entry.sp_attack.max(stats.sp_attack);
            entry.sp_defense = entry.sp_defense.max(stats.sp_defense);
            entry.speed = entry.speed.max(stats.speed);
        }
    }
    Ok(max.unwrap_or(StatBlock {
        hp: 255,
        attack: 255,
        defense: 255,
        sp_attack: 255,
        sp_defense: 255,
        speed: 255,
    }))
}

/// Breeding data for one species. Species without a breeding row are
/// `Ok(None)`.
pub fn breeding_profile(store: &DexStore, species_id: u32) -> DexResult<Option<BreedingProfile>> {
    let row = match store.breeding_row(species_id)? {
        Some(row) => row,
        None => return Ok(None),
    };
    Ok(Some(BreedingProfile {
        egg_groups: decode_egg_groups(row.egg_groups_json.as_deref()),
        hatch_counter: row.hatch_counter,
        gender_rate: row.gender_rate,
        growth_rate: row.growth_rate,
        base_happiness: row.base_happiness,
        capture_rate: row.capture_rate,
        habitat: row.habitat,
        color: row.color,
        shape: row.shape,
        genus: row.genus,
        is_baby: row.is_baby,
        is_legendary: row.is_legendary,
        is_mythical: row.is_mythical,
        has_gender_differences: row.has_gender_differences,
    }))
}

/// Names of other species sharing an egg group with the given species,
/// alphabetical, capped at twenty.
pub fn breeding_partners(store: &DexStore, species_id: u32) -> DexResult<Vec<String>> {
    let profile = match breeding_profile(store, species_id)? {
        Some(profile) => profile,
        None => return Ok(Vec::new()),
    };
    store.breeding_partner_names(species_id, &profile.egg_groups, PARTNER_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{empty_store, seeded_store};
    use pretty_assertions::assert_eq;

    fn ids(records: &[SpeciesRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_filters_return_whole_dex_in_id_order() {
        let store = seeded_store();
        let records = search(&store, &SearchFilters::default()).unwrap();
        assert_eq!(ids(&records), vec![1, 2, 3, 25, 132, 999]);
    }

    #[test]
    fn name_fragment_is_case_insensitive_substring() {
        let store = seeded_store();
        let filters = SearchFilters {
            name: Some("saur".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&store, &filters).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn number_filter_is_exact_when_parseable() {
        let store = seeded_store();
        let filters = SearchFilters {
            number: Some("25".to_string()),
            ..Default::default()
        };
        let records = search(&store, &filters).unwrap();
        assert_eq!(ids(&records), vec![25]);
        assert_eq!(records[0].name, "pikachu");

        // Unparseable number text is ignored.
        let filters = SearchFilters {
            number: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(search(&store, &filters).unwrap().len(), 6);
    }

    #[test]
    fn type_filter_matches_either_slot() {
        let store = seeded_store();
        let filters = SearchFilters {
            type_name: Some("poison".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&store, &filters).unwrap()), vec![1, 2, 3]);

        let filters = SearchFilters {
            type_name: Some("Grass".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&store, &filters).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn stat_threshold_is_inclusive() {
        let store = seeded_store();
        // Bulbasaur's attack is 49: a floor of 48 keeps it, 50 drops it.
        let filters = SearchFilters {
            min_attack: Some(48),
            ..Default::default()
        };
        assert!(ids(&search(&store, &filters).unwrap()).contains(&1));

        let filters = SearchFilters {
            min_attack: Some(50),
            ..Default::default()
        };
        assert!(!ids(&search(&store, &filters).unwrap()).contains(&1));
    }

    #[test]
    fn number_filter_still_honors_the_name_filter() {
        let store = seeded_store();
        // Id 1 is bulbasaur; a name fragment that does not match it must
        // exclude the row even though the number matched.
        let filters = SearchFilters {
            name: Some("pika".to_string()),
            number: Some("1".to_string()),
            ..Default::default()
        };
        assert!(search(&store, &filters).unwrap().is_empty());

        let filters = SearchFilters {
            name: Some("BULBA".to_string()),
            number: Some("1".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&store, &filters).unwrap()), vec![1]);
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let store = seeded_store();
        let filters = SearchFilters {
            type_name: Some("grass".to_string()),
            min_speed: Some(60),
            ..Default::default()
        };
        assert_eq!(ids(&search(&store, &filters).unwrap()), vec![2, 3]);
    }

    #[test]
    fn undecodable_rows_fail_active_stat_and_type_filters() {
        let store = seeded_store();
        // Species 999 has broken stats and types JSON. It survives an
        // unconstrained search but never a stat or type criterion.
        let all = search(&store, &SearchFilters::default()).unwrap();
        assert!(ids(&all).contains(&999));

        let filters = SearchFilters {
            min_hp: Some(1),
            ..Default::default()
        };
        assert!(!ids(&search(&store, &filters).unwrap()).contains(&999));

        let filters = SearchFilters {
            type_name: Some("normal".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&store, &filters).unwrap()), vec![132]);
    }

    #[test]
    fn species_lookup_decodes_the_row() {
        let store = seeded_store();
        let record = species_by_id(&store, 1).unwrap().unwrap();
        assert_eq!(record.name, "bulbasaur");
        assert_eq!(record.stats.total(), 318);
        assert_eq!(record.primary_type, Some(PokemonType::Grass));
        assert_eq!(record.secondary_type, Some(PokemonType::Poison));
        assert_eq!(record.abilities.len(), 2);
        assert!(record.abilities[1].is_hidden);

        assert!(species_by_id(&store, 9999).unwrap().is_none());
    }

    #[test]
    fn all_types_are_distinct_sorted_title_case() {
        let store = seeded_store();
        assert_eq!(
            all_types(&store).unwrap(),
            vec!["Electric", "Grass", "Normal", "Poison"]
        );
    }

    #[test]
    fn stat_maximums_take_per_stat_peaks() {
        let store = seeded_store();
        let max = stat_maximums(&store).unwrap();
        assert_eq!(max.hp, 80);
        assert_eq!(max.attack, 82);
        assert_eq!(max.sp_attack, 100);
        assert_eq!(max.speed, 90);
    }

    #[test]
    fn stat_maximums_fall_back_when_nothing_decodes() {
        let store = empty_store();
        let max = stat_maximums(&store).unwrap();
        assert_eq!(max.hp, 255);
        assert_eq!(max.speed, 255);
    }

    #[test]
    fn breeding_profile_decodes_groups_and_flags() {
        let store = seeded_store();
        let profile = breeding_profile(&store, 1).unwrap().unwrap();
        assert_eq!(profile.egg_groups, vec!["monster", "plant"]);
        assert_eq!(profile.hatch_steps(), Some(5100));
        assert_eq!(profile.female_percent(), Some(12));
        assert_eq!(profile.genus.as_deref(), Some("Seed Pokemon"));

        let ditto = breeding_profile(&store, 132).unwrap().unwrap();
        assert!(ditto.is_genderless());

        assert!(breeding_profile(&store, 9999).unwrap().is_none());
    }

    #[test]
    fn breeding_partners_share_a_group_and_exclude_self() {
        let store = seeded_store();
        let partners = breeding_partners(&store, 1).unwrap();
        assert_eq!(partners, vec!["ivysaur"]);

        // Ditto's group has no other members in the fixture.
        assert!(breeding_partners(&store, 132).unwrap().is_empty());
        assert!(breeding_partners(&store, 9999).unwrap().is_empty());
    }
}
