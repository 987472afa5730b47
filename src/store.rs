use std::path::Path;

use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::errors::DexResult;
use schema::TYPE_COUNT;

/// The 18 multiplier columns of `Weakness_Strength`, in the canonical
/// attacking-type order shared with `PokemonType::iter()`.
const MULTIPLIER_COLUMNS: &str = "\"Normal\", \"Fire\", \"Water\", \"Electric\", \"Grass\", \
     \"Ice\", \"Fighting\", \"Poison\", \"Ground\", \"Flying\", \"Psychic\", \"Bug\", \
     \"Rock\", \"Ghost\", \"Dragon\", \"Dark\", \"Steel\", \"Fairy\"";

/// A species row as stored: plain columns plus the three embedded JSON
/// columns, still undecoded. The schema decoder turns these into typed
/// values.
#[derive(Debug, Clone)]
pub struct SpeciesRow {
    pub id: u32,
    pub name: String,
    pub species_name: Option<String>,
    pub height: Option<u32>,
    pub weight: Option<u32>,
    pub abilities_json: Option<String>,
    pub stats_json: Option<String>,
    pub types_json: Option<String>,
}

/// A breeding row as stored; `egg_groups_json` is the embedded JSON column.
#[derive(Debug, Clone)]
pub struct BreedingRow {
    pub egg_groups_json: Option<String>,
    pub hatch_counter: Option<u32>,
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

/// A species-scoped move-learning row from the level/tutor ledger.
#[derive(Debug, Clone)]
pub struct LearnRow {
    pub move_name: String,
    pub level: Option<u32>,
    pub version_group: Option<String>,
}

/// An egg-move row from the parallel move-learning table.
#[derive(Debug, Clone)]
pub struct EggMoveRow {
    pub move_name: String,
    pub move_type: Option<String>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub version_group: Option<String>,
}

/// A TM/HM machine row. Not species-scoped.
#[derive(Debug, Clone)]
pub struct MachineRow {
    pub move_name: String,
    pub machine_id: u32,
    pub item_name: String,
    pub version_group: Option<String>,
}

/// A move-catalog row; `effect_entries_json` is the embedded JSON column.
#[derive(Debug, Clone)]
pub struct MoveRow {
    pub name: String,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub priority: Option<i32>,
    pub power: Option<u32>,
    pub damage_class: Option<String>,
    pub effect_entries_json: Option<String>,
    pub type_name: Option<String>,
}

/// A contest-metadata row for one move.
#[derive(Debug, Clone)]
pub struct ContestRow {
    pub contest_type: Option<String>,
    pub appeal: Option<i32>,
    pub jam: Option<i32>,
    pub effect_description: Option<String>,
    pub flavor_text: Option<String>,
    pub super_appeal: Option<i32>,
    pub super_flavor_text: Option<String>,
}

/// A type-effectiveness row: the defending type (or ordered pair) and the
/// 18 attacking-type multipliers in canonical column order.
#[derive(Debug, Clone)]
pub struct EffectivenessRow {
    pub type1: String,
    pub type2: Option<String>,
    pub multipliers: [f64; TYPE_COUNT],
}

/// Read-only handle over the Pokedex SQLite store.
///
/// The engine never writes; every component borrows this handle and runs
/// short-lived queries against it. Construct one per caller and pass it
/// down explicitly; there is no ambient global connection.
pub struct DexStore {
    conn: Connection,
}

impl DexStore {
    /// Open the store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> DexResult<DexStore> {
        let conn = Connection::open(path)?;
        Ok(DexStore { conn })
    }

    /// Open an empty in-memory store. Used by tests and tooling that seed
    /// their own fixture data.
    pub fn open_in_memory() -> DexResult<DexStore> {
        let conn = Connection::open_in_memory()?;
        Ok(DexStore { conn })
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    // --- Species table ---

    /// All species rows in id order, optionally narrowed server-side by a
    /// case-insensitive name substring.
    pub fn species_rows(&self, name_like: Option<&str>) -> DexResult<Vec<SpeciesRow>> {
        let base = "SELECT id, name, species_name, height, weight, abilities, stats, types \
             FROM New_Pokemon_Data";
        let rows = if let Some(fragment) = name_like {
            let sql = format!("{} WHERE name LIKE ?1 ORDER BY id ASC", base);
            let mut stmt = self.conn.prepare(&sql)?;
            let pattern = format!("%{}%", fragment);
            let mapped = stmt.query_map(params![pattern], Self::map_species_row)?;
            mapped.collect::<Result<Vec<_>, _>>()?
        } else {
            let sql = format!("{} ORDER BY id ASC", base);
            let mut stmt = self.conn.prepare(&sql)?;
            let mapped = stmt.query_map([], Self::map_species_row)?;
            mapped.collect::<Result<Vec<_>, _>>()?
        };
        Ok(rows)
    }

    /// One species row by id.
    pub fn species_row(&self, id: u32) -> DexResult<Option<SpeciesRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, species_name, height, weight, abilities, stats, types \
                 FROM New_Pokemon_Data WHERE id = ?1",
                params![id],
                Self::map_species_row,
            )
            .optional()?;
        Ok(row)
    }

    /// Resolve a species name (case-insensitive) to its id.
    pub fn species_id_by_name(&self, name: &str) -> DexResult<Option<u32>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM New_Pokemon_Data WHERE LOWER(name) = LOWER(?1)",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    fn map_species_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SpeciesRow> {
        Ok(SpeciesRow {
            id: row.get(0)?,
            name: row.get(1)?,
            species_name: row.get(2)?,
            height: row.get(3)?,
            weight: row.get(4)?,
            abilities_json: row.get(5)?,
            stats_json: row.get(6)?,
            types_json: row.get(7)?,
        })
    }

    // --- Breeding table ---

    pub fn breeding_row(&self, species_id: u32) -> DexResult<Option<BreedingRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT egg_groups, hatch_counter, gender_rate, growth_rate, base_happiness, \
                        capture_rate, habitat_name, color_name, shape_name, genus, \
                        is_baby, is_legendary, is_mythical, has_gender_differences \
                 FROM New_Pokemon_Breeding_Data WHERE id = ?1",
                params![species_id],
                |row| {
                    Ok(BreedingRow {
                        egg_groups_json: row.get(0)?,
                        hatch_counter: row.get(1)?,
                        gender_rate: row.get(2)?,
                        growth_rate: row.get(3)?,
                        base_happiness: row.get(4)?,
                        capture_rate: row.get(5)?,
                        habitat: row.get(6)?,
                        color: row.get(7)?,
                        shape: row.get(8)?,
                        genus: row.get(9)?,
                        is_baby: row.get::<_, Option<bool>>(10)?.unwrap_or(false),
                        is_legendary: row.get::<_, Option<bool>>(11)?.unwrap_or(false),
                        is_mythical: row.get::<_, Option<bool>>(12)?.unwrap_or(false),
                        has_gender_differences: row.get::<_, Option<bool>>(13)?.unwrap_or(false),
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Names of other species sharing at least one of the given egg
    /// groups, alphabetical, capped. The egg-group column is embedded
    /// JSON, so membership is tested with LIKE patterns over the stored
    /// text.
    pub fn breeding_partner_names(
        &self,
        exclude_id: u32,
        egg_groups: &[String],
        limit: usize,
    ) -> DexResult<Vec<String>> {
        if egg_groups.is_empty() {
            return Ok(Vec::new());
        }

        let mut conditions = Vec::new();
        let mut args: Vec<String> = vec![exclude_id.to_string()];
        for group in egg_groups {
            let first = args.len() + 1;
            conditions.push(format!(
                "(egg_groups LIKE ?{} OR egg_groups LIKE ?{} OR egg_groups LIKE ?{} OR egg_groups LIKE ?{})",
                first,
                first + 1,
                first + 2,
                first + 3
            ));
            args.push(format!("[\"{}\"]", group));
            args.push(format!("[\"{}\",%", group));
            args.push(format!("%,\"{}\"]", group));
            args.push(format!("%,\"{}\",%", group));
        }

        let sql = format!(
            "SELECT name FROM New_Pokemon_Breeding_Data \
             WHERE id != ?1 AND ({}) ORDER BY name LIMIT {}",
            conditions.join(" OR "),
            limit
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args.iter()), |row| row.get(0))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    // --- Evolution table ---

    /// Every stored chain as (chain id, raw chain JSON).
    pub fn evolution_chains(&self) -> DexResult<Vec<(i64, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, chain FROM New_Pokemon_Evolutions")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Direct chain-row lookup by id, the fallback path of the resolver.
    pub fn evolution_chain_json(&self, chain_id: u32) -> DexResult<Option<String>> {
        let json = self
            .conn
            .query_row(
                "SELECT chain FROM New_Pokemon_Evolutions WHERE id = ?1",
                params![chain_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(json)
    }

    // --- Move-learning tables ---

    /// Level-up rows for a species, ascending by learn level.
    pub fn level_up_rows(&self, species_id: u32) -> DexResult<Vec<LearnRow>> {
        self.learn_rows(
            species_id,
            "level-up",
            "ORDER BY level_learned ASC, move_name ASC",
        )
    }

    /// Tutor rows for a species, alphabetical.
    pub fn tutor_rows(&self, species_id: u32) -> DexResult<Vec<LearnRow>> {
        self.learn_rows(species_id, "tutor", "ORDER BY move_name ASC")
    }

    fn learn_rows(
        &self,
        species_id: u32,
        method: &str,
        order: &str,
    ) -> DexResult<Vec<LearnRow>> {
        let sql = format!(
            "SELECT move_name, level_learned, version_group \
             FROM New_Pokemon_Move_Level_Data \
             WHERE pokemon_id = ?1 AND learn_method = ?2 {}",
            order
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![species_id, method], |row| {
            Ok(LearnRow {
                move_name: row.get(0)?,
                level: row.get(1)?,
                version_group: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Egg-move rows for a species, alphabetical.
    pub fn egg_move_rows(&self, species_id: u32) -> DexResult<Vec<EggMoveRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT move_name, move_type, move_power, move_pp, version_group \
             FROM New_Pokemon_Move_Learning_Data \
             WHERE pokemon_id = ?1 AND is_egg_move = 1 ORDER BY move_name",
        )?;
        let rows = stmt.query_map(params![species_id], |row| {
            Ok(EggMoveRow {
                move_name: row.get(0)?,
                move_type: row.get(1)?,
                power: row.get(2)?,
                pp: row.get(3)?,
                version_group: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// The shared machine catalog, ascending by machine id. This table is
    /// not species-scoped; a negative-free `limit` caps the preview.
    pub fn machine_rows(&self, limit: Option<usize>) -> DexResult<Vec<MachineRow>> {
        // SQLite treats LIMIT -1 as unbounded.
        let cap: i64 = limit.map(|n| n as i64).unwrap_or(-1);
        let mut stmt = self.conn.prepare(
            "SELECT move_name, machine_id, item_name, version_group_name \
             FROM New_Pokemon_Machines \
             WHERE machine_id IS NOT NULL ORDER BY machine_id ASC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![cap], |row| {
            Ok(MachineRow {
                move_name: row.get(0)?,
                machine_id: row.get(1)?,
                item_name: row.get(2)?,
                version_group: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    // --- Move catalog and sidecar tables ---

    /// Exact-name lookup into the move catalog.
    pub fn move_row(&self, move_name: &str) -> DexResult<Option<MoveRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT name, accuracy, pp, priority, power, damage_class, effect_entries, \
                        type_name \
                 FROM New_Pokemon_Moves WHERE name = ?1",
                params![move_name],
                |row| {
                    Ok(MoveRow {
                        name: row.get(0)?,
                        accuracy: row.get(1)?,
                        pp: row.get(2)?,
                        priority: row.get(3)?,
                        power: row.get(4)?,
                        damage_class: row.get(5)?,
                        effect_entries_json: row.get(6)?,
                        type_name: row.get(7)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Optional free-text effect override from the move-learning table.
    pub fn move_effect_override(&self, move_name: &str) -> DexResult<Option<String>> {
        let effect: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT move_effect FROM New_Pokemon_Move_Learning_Data \
                 WHERE move_name = ?1 LIMIT 1",
                params![move_name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(effect.flatten())
    }

    /// Optional contest metadata for a move.
    pub fn contest_row(&self, move_name: &str) -> DexResult<Option<ContestRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT contest_type, contest_effect_appeal, contest_effect_jam, \
                        contest_effect_description, contest_effect_flavor_text, \
                        super_contest_effect_appeal, super_contest_effect_flavor_text \
                 FROM New_Pokemon_Contest_Data WHERE move_name = ?1",
                params![move_name],
                |row| {
                    Ok(ContestRow {
                        contest_type: row.get(0)?,
                        appeal: row.get(1)?,
                        jam: row.get(2)?,
                        effect_description: row.get(3)?,
                        flavor_text: row.get(4)?,
                        super_appeal: row.get(5)?,
                        super_flavor_text: row.get(6)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    // --- Type-effectiveness table ---

    /// Every stored effectiveness row. The table is small (one row per
    /// type or type pair), so loading it whole is how the process-lifetime
    /// cache is built.
    pub fn effectiveness_rows(&self) -> DexResult<Vec<EffectivenessRow>> {
        let sql = format!(
            "SELECT \"Type1\", \"Type2\", {} FROM Weakness_Strength",
            MULTIPLIER_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], Self::map_effectiveness_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Row lookup for one defending type or ordered pair. Dual-type
    /// queries match the stored row in either column order.
    pub fn effectiveness_row(
        &self,
        type1: &str,
        type2: Option<&str>,
    ) -> DexResult<Option<EffectivenessRow>> {
        let row = match type2 {
            None => {
                let sql = format!(
                    "SELECT \"Type1\", \"Type2\", {} FROM Weakness_Strength \
                     WHERE \"Type1\" = ?1 AND \"Type2\" IS NULL",
                    MULTIPLIER_COLUMNS
                );
                self.conn
                    .query_row(&sql, params![type1], Self::map_effectiveness_row)
                    .optional()?
            }
            Some(type2) => {
                let sql = format!(
                    "SELECT \"Type1\", \"Type2\", {} FROM Weakness_Strength \
                     WHERE (\"Type1\" = ?1 AND \"Type2\" = ?2) \
                        OR (\"Type1\" = ?2 AND \"Type2\" = ?1)",
                    MULTIPLIER_COLUMNS
                );
                self.conn
                    .query_row(&sql, params![type1, type2], Self::map_effectiveness_row)
                    .optional()?
            }
        };
        Ok(row)
    }

    fn map_effectiveness_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<EffectivenessRow> {
        let mut multipliers = [1.0; TYPE_COUNT];
        for (i, slot) in multipliers.iter_mut().enumerate() {
            *slot = row.get(i + 2)?;
        }
        Ok(EffectivenessRow {
            type1: row.get(0)?,
            type2: row.get(1)?,
            multipliers,
        })
    }
}
