//! Species move ledgers, the machine catalog, and per-move detail lookup.

use schema::{
    ContestInfo, DamageClass, EggMove, LearnMethod, LearnedMove, MachineEntry, MoveDetails,
    MoveRecord, PokemonType,
};

use crate::decode::decode_effect_entries;
use crate::errors::DexResult;
use crate::store::DexStore;

/// Sentinel version filter that passes every entry, tagged or not.
pub const ALL_VERSIONS: &str = "All Versions";

/// Everything a species can learn, grouped by acquisition method. The
/// machine catalog is shared across species and kept separate.
#[derive(Debug, Clone, Default)]
pub struct MoveLedger {
    /// Level-up moves, ascending by learn level.
    pub level_up: Vec<LearnedMove>,
    /// Tutor moves, alphabetical.
    pub tutor: Vec<LearnedMove>,
    /// Egg moves, alphabetical.
    pub egg: Vec<EggMove>,
}

impl MoveLedger {
    pub fn is_empty(&self) -> bool {
        self.level_up.is_empty() && self.tutor.is_empty() && self.egg.is_empty()
    }

    /// Narrow the ledger to one version group. Tags must match exactly
    /// (case-sensitive); untagged entries are dropped under a specific
    /// filter and kept under [`ALL_VERSIONS`]. Relative order survives.
    pub fn filtered_by_version(&self, version: &str) -> MoveLedger {
        if version == ALL_VERSIONS {
            return self.clone();
        }
        MoveLedger {
            level_up: self
                .level_up
                .iter()
                .filter(|m| m.version_group.as_deref() == Some(version))
                .cloned()
                .collect(),
            tutor: self
                .tutor
                .iter()
                .filter(|m| m.version_group.as_deref() == Some(version))
                .cloned()
                .collect(),
            egg: self
                .egg
                .iter()
                .filter(|m| m.version_group.as_deref() == Some(version))
                .cloned()
                .collect(),
        }
    }

    /// Every version tag appearing in this ledger or the given machine
    /// catalog, sorted, with the [`ALL_VERSIONS`] sentinel first.
    pub fn version_options(&self, machines: &[MachineEntry]) -> Vec<String> {
        let mut tags: Vec<&str> = self
            .level_up
            .iter()
            .chain(self.tutor.iter())
            .filter_map(|m| m.version_group.as_deref())
            .chain(self.egg.iter().filter_map(|m| m.version_group.as_deref()))
            .chain(machines.iter().filter_map(|m| m.version_group.as_deref()))
            .collect();
        tags.sort_unstable();
        tags.dedup();

        let mut options = Vec::with_capacity(tags.len() + 1);
        options.push(ALL_VERSIONS.to_string());
        options.extend(tags.into_iter().map(String::from));
        options
    }
}

/// Load the full move ledger for a species. A species with no rows in
/// any source yields an empty ledger, not an error.
pub fn moves_for(store: &DexStore, species_id: u32) -> DexResult<MoveLedger> {
    let level_up = store
        .level_up_rows(species_id)?
        .into_iter()
        .map(|row| LearnedMove {
            name: row.move_name,
            level: row.level,
            method: LearnMethod::LevelUp,
            version_group: row.version_group,
        })
        .collect();
    let tutor = store
        .tutor_rows(species_id)?
        .into_iter()
        .map(|row| LearnedMove {
            name: row.move_name,
            level: None,
            method: LearnMethod::Tutor,
            version_group: row.version_group,
        })
        .collect();
    let egg = store
        .egg_move_rows(species_id)?
        .into_iter()
        .map(|row| EggMove {
            name: row.move_name,
            move_type: row.move_type.as_deref().and_then(PokemonType::from_name),
            power: row.power,
            pp: row.pp,
            version_group: row.version_group,
        })
        .collect();

    Ok(MoveLedger {
        level_up,
        tutor,
        egg,
    })
}

/// The shared TM/HM catalog, ascending by machine number, optionally
/// capped for previews.
pub fn machine_catalog(store: &DexStore, limit: Option<usize>) -> DexResult<Vec<MachineEntry>> {
    let entries = store
        .machine_rows(limit)?
        .into_iter()
        .map(|row| MachineEntry {
            move_name: row.move_name,
            machine_id: row.machine_id,
            item_name: row.item_name,
            version_group: row.version_group,
        })
        .collect();
    Ok(entries)
}

/// Narrow the machine catalog to one version group under the same rule
/// as [`MoveLedger::filtered_by_version`]: exact tag matches only, with
/// untagged entries dropped under a specific tag and kept under
/// [`ALL_VERSIONS`]. Catalog order survives.
pub fn filter_machines_by_version(machines: &[MachineEntry], version: &str) -> Vec<MachineEntry> {
    if version == ALL_VERSIONS {
        return machines.to_vec();
    }
    machines
        .iter()
        .filter(|m| m.version_group.as_deref() == Some(version))
        .cloned()
        .collect()
}

/// Full details for one move by exact name: the catalog record, the
/// learning-table effect override, and contest metadata. Each sidecar is
/// independently optional; a move absent from the catalog is `Ok(None)`.
pub fn move_details(store: &DexStore, move_name: &str) -> DexResult<Option<MoveDetails>> {
    let row = match store.move_row(move_name)? {
        Some(row) => row,
        None => return Ok(None),
    };

    let record = MoveRecord {
        name: row.name,
        accuracy: row.accuracy,
        pp: row.pp,
        priority: row.priority.unwrap_or(0),
        power: row.power,
        damage_class: row.damage_class.as_deref().and_then(DamageClass::from_name),
        move_type: row.type_name.as_deref().and_then(PokemonType::from_name),
        effect: decode_effect_entries(row.effect_entries_json.as_deref()),
    };

    let effect_override = store.move_effect_override(move_name)?;
    let contest = store.contest_row(move_name)?.map(|row| ContestInfo {
        contest_type: row.contest_type,
        appeal: row.appeal,
        jam: row.jam,
        effect_description: row.effect_description,
        flavor_text: row.flavor_text,
        super_appeal: row.super_appeal,
        super_flavor_text: row.super_flavor_text,
    });

    Ok(Some(MoveDetails {
        record,
        effect_override,
        contest,
    }))
}
