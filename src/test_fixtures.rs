//! In-memory fixture store used by the engine tests. Creates the stored
//! table layout and seeds a small, hand-checked dataset: the Bulbasaur
//! line, Pikachu, Ditto, and one species with deliberately broken JSON.

use crate::store::DexStore;

const FIXTURE_SCHEMA: &str = r#"
CREATE TABLE New_Pokemon_Data (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL,
  species_name TEXT,
  height INTEGER,
  weight INTEGER,
  abilities TEXT,
  stats TEXT,
  types TEXT
);

CREATE TABLE New_Pokemon_Breeding_Data (
  id INTEGER PRIMARY KEY,
  name TEXT,
  egg_groups TEXT,
  hatch_counter INTEGER,
  gender_rate INTEGER,
  growth_rate TEXT,
  base_happiness INTEGER,
  capture_rate INTEGER,
  habitat_name TEXT,
  color_name TEXT,
  shape_name TEXT,
  genus TEXT,
  is_baby INTEGER,
  is_legendary INTEGER,
  is_mythical INTEGER,
  has_gender_differences INTEGER
);

CREATE TABLE New_Pokemon_Evolutions (
  id INTEGER PRIMARY KEY,
  chain TEXT
);

CREATE TABLE New_Pokemon_Move_Level_Data (
  pokemon_id INTEGER NOT NULL,
  move_name TEXT NOT NULL,
  level_learned INTEGER,
  learn_method TEXT NOT NULL,
  version_group TEXT
);

CREATE TABLE New_Pokemon_Move_Learning_Data (
  pokemon_id INTEGER NOT NULL,
  move_name TEXT NOT NULL,
  move_type TEXT,
  move_power INTEGER,
  move_pp INTEGER,
  version_group TEXT,
  is_egg_move INTEGER NOT NULL DEFAULT 0,
  move_effect TEXT
);

CREATE TABLE New_Pokemon_Machines (
  move_name TEXT NOT NULL,
  machine_id INTEGER,
  item_name TEXT,
  version_group_name TEXT
);

CREATE TABLE New_Pokemon_Moves (
  name TEXT PRIMARY KEY,
  accuracy INTEGER,
  pp INTEGER,
  priority INTEGER,
  power INTEGER,
  damage_class TEXT,
  effect_entries TEXT,
  type_name TEXT
);

CREATE TABLE New_Pokemon_Contest_Data (
  move_name TEXT PRIMARY KEY,
  contest_type TEXT,
  contest_effect_appeal INTEGER,
  contest_effect_jam INTEGER,
  contest_effect_description TEXT,
  contest_effect_flavor_text TEXT,
  super_contest_effect_appeal INTEGER,
  super_contest_effect_flavor_text TEXT
);

CREATE TABLE Weakness_Strength (
  "Type1" TEXT NOT NULL,
  "Type2" TEXT,
  "Normal" REAL, "Fire" REAL, "Water" REAL, "Electric" REAL, "Grass" REAL,
  "Ice" REAL, "Fighting" REAL, "Poison" REAL, "Ground" REAL, "Flying" REAL,
  "Psychic" REAL, "Bug" REAL, "Rock" REAL, "Ghost" REAL, "Dragon" REAL,
  "Dark" REAL, "Steel" REAL, "Fairy" REAL
);
"#;

const FIXTURE_DATA: &str = r#"
INSERT INTO New_Pokemon_Data (id, name, species_name, height, weight, abilities, stats, types) VALUES
(1, 'bulbasaur', 'Bulbasaur', 7, 69,
 '[{"ability":{"name":"overgrow"},"is_hidden":false},{"ability":{"name":"chlorophyll"},"is_hidden":true}]',
 '[{"base_stat":45,"stat":{"name":"hp"}},{"base_stat":49,"stat":{"name":"attack"}},{"base_stat":49,"stat":{"name":"defense"}},{"base_stat":65,"stat":{"name":"special-attack"}},{"base_stat":65,"stat":{"name":"special-defense"}},{"base_stat":45,"stat":{"name":"speed"}}]',
 '[{"type":{"name":"grass"}},{"type":{"name":"poison"}}]'),
(2, 'ivysaur', 'Ivysaur', 10, 130,
 '[{"ability":{"name":"overgrow"},"is_hidden":false}]',
 '[{"base_stat":60,"stat":{"name":"hp"}},{"base_stat":62,"stat":{"name":"attack"}},{"base_stat":63,"stat":{"name":"defense"}},{"base_stat":80,"stat":{"name":"special-attack"}},{"base_stat":80,"stat":{"name":"special-defense"}},{"base_stat":60,"stat":{"name":"speed"}}]',
 '[{"type":{"name":"grass"}},{"type":{"name":"poison"}}]'),
(3, 'venusaur', 'Venusaur', 20, 1000,
 '[{"ability":{"name":"overgrow"},"is_hidden":false}]',
 '[{"base_stat":80,"stat":{"name":"hp"}},{"base_stat":82,"stat":{"name":"attack"}},{"base_stat":83,"stat":{"name":"defense"}},{"base_stat":100,"stat":{"name":"special-attack"}},{"base_stat":100,"stat":{"name":"special-defense"}},{"base_stat":80,"stat":{"name":"speed"}}]',
 '[{"type":{"name":"grass"}},{"type":{"name":"poison"}}]'),
(25, 'pikachu', 'Pikachu', 4, 60,
 '[{"ability":{"name":"static"},"is_hidden":false},{"ability":{"name":"lightning-rod"},"is_hidden":true}]',
 '[{"base_stat":35,"stat":{"name":"hp"}},{"base_stat":55,"stat":{"name":"attack"}},{"base_stat":40,"stat":{"name":"defense"}},{"base_stat":50,"stat":{"name":"special-attack"}},{"base_stat":50,"stat":{"name":"special-defense"}},{"base_stat":90,"stat":{"name":"speed"}}]',
 '[{"type":{"name":"electric"}}]'),
(132, 'ditto', 'Ditto', 3, 40,
 '[{"ability":{"name":"limber"},"is_hidden":false}]',
 '[{"base_stat":48,"stat":{"name":"hp"}},{"base_stat":48,"stat":{"name":"attack"}},{"base_stat":48,"stat":{"name":"defense"}},{"base_stat":48,"stat":{"name":"special-attack"}},{"base_stat":48,"stat":{"name":"special-defense"}},{"base_stat":48,"stat":{"name":"speed"}}]',
 '[{"type":{"name":"normal"}}]'),
(999, 'glitchmon', NULL, NULL, NULL, NULL, 'not valid json', '[broken');

INSERT INTO New_Pokemon_Breeding_Data
  (id, name, egg_groups, hatch_counter, gender_rate, growth_rate, base_happiness,
   capture_rate, habitat_name, color_name, shape_name, genus,
   is_baby, is_legendary, is_mythical, has_gender_differences) VALUES
(1, 'bulbasaur', '["monster","plant"]', 20, 1, 'medium-slow', 50, 45,
 'grassland', 'green', 'quadruped', 'Seed Pokemon', 0, 0, 0, 0),
(2, 'ivysaur', '["monster","plant"]', 20, 1, 'medium-slow', 50, 45,
 'grassland', 'green', 'quadruped', 'Seed Pokemon', 0, 0, 0, 0),
(25, 'pikachu', '["field","fairy"]', 10, 4, 'medium', 50, 190,
 'forest', 'yellow', 'quadruped', 'Mouse Pokemon', 0, 0, 0, 1),
(132, 'ditto', '["ditto"]', 20, -1, 'medium', 50, 35,
 'urban', 'purple', 'ball', 'Transform Pokemon', 0, 0, 0, 0);

INSERT INTO New_Pokemon_Evolutions (id, chain) VALUES
(1, '{"species":{"name":"bulbasaur"},"evolution_details":[],"evolves_to":[{"species":{"name":"ivysaur"},"evolution_details":[{"min_level":16,"trigger":{"name":"level-up"}}],"evolves_to":[{"species":{"name":"venusaur"},"evolution_details":[{"min_level":32,"trigger":{"name":"level-up"}}],"evolves_to":[]}]}]}'),
(10, '{"species":{"name":"pichu"},"evolution_details":[],"evolves_to":[{"species":{"name":"pikachu"},"evolution_details":[{"min_happiness":220,"trigger":{"name":"level-up"}}],"evolves_to":[{"species":{"name":"raichu"},"evolution_details":[{"item":{"name":"thunder-stone"},"trigger":{"name":"use-item"}}],"evolves_to":[]}]}]}'),
(132, '{"species":{"name":"ditto-prime"},"evolution_details":[],"evolves_to":[]}'),
(500, 'this is not a chain');

INSERT INTO New_Pokemon_Move_Level_Data
  (pokemon_id, move_name, level_learned, learn_method, version_group) VALUES
(1, 'vine-whip', 13, 'level-up', 'red-blue'),
(1, 'tackle', 1, 'level-up', 'red-blue'),
(1, 'growl', 3, 'level-up', 'red-blue'),
(1, 'razor-leaf', 27, 'level-up', NULL),
(1, 'solar-beam', 65, 'level-up', 'emerald'),
(1, 'snore', NULL, 'tutor', 'crystal'),
(1, 'body-slam', NULL, 'tutor', 'emerald'),
(25, 'thunder-shock', 1, 'level-up', 'red-blue');

INSERT INTO New_Pokemon_Move_Learning_Data
  (pokemon_id, move_name, move_type, move_power, move_pp, version_group, is_egg_move, move_effect) VALUES
(1, 'skull-bash', 'normal', 130, 10, 'red-blue', 1, NULL),
(1, 'charm', 'fairy', NULL, 20, 'crystal', 1, NULL),
(1, 'tackle', 'normal', 40, 35, 'red-blue', 0, 'A full-body charge attack.');

INSERT INTO New_Pokemon_Machines (move_name, machine_id, item_name, version_group_name) VALUES
('cut', 1, 'hm01', NULL),
('swords-dance', 3, 'tm03', 'emerald'),
('toxic', 6, 'tm06', 'red-blue'),
('stealth-rock', NULL, 'tm76', 'platinum');

INSERT INTO New_Pokemon_Moves
  (name, accuracy, pp, priority, power, damage_class, effect_entries, type_name) VALUES
('tackle', 100, 35, 0, 40, 'physical',
 '[{"effect":"Inflicts regular damage.","language":{"name":"en"}},{"effect":"Normaler Schaden.","language":{"name":"de"}}]',
 'normal'),
('razor-leaf', 95, 25, 0, 55, 'physical',
 '[{"effect":"Has an increased chance for a critical hit.","language":{"name":"en"}}]',
 'grass'),
('growth', NULL, 20, 0, NULL, 'status',
 '[{"effect":"Erhoeht den Angriff.","language":{"name":"de"}}]',
 'normal');

INSERT INTO New_Pokemon_Contest_Data
  (move_name, contest_type, contest_effect_appeal, contest_effect_jam,
   contest_effect_description, contest_effect_flavor_text,
   super_contest_effect_appeal, super_contest_effect_flavor_text) VALUES
('tackle', 'tough', 4, 0, 'A highly appealing move.',
 'Works well if it is used first.', 3, 'Earns double the score in the next turn.');

INSERT INTO Weakness_Strength VALUES
('Grass', 'Poison', 1, 2, 0.5, 0.5, 0.25, 2, 0.5, 1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 0.5),
('Water', NULL,     1, 0.5, 0.5, 2, 2, 0.5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0.5, 1),
('Fire', 'Flying',  1, 0.5, 2, 2, 0.25, 1, 0.5, 1, 0, 1, 1, 0.25, 4, 1, 1, 1, 0.25, 0.5),
('Electric', NULL,  1, 1, 1, 0.5, 1, 1, 1, 1, 2, 0.5, 1, 1, 1, 1, 1, 1, 0.5, 1);
"#;

/// A store populated with the fixture dataset.
pub(crate) fn seeded_store() -> DexStore {
    let store = DexStore::open_in_memory().expect("in-memory store");
    store
        .connection()
        .execute_batch(FIXTURE_SCHEMA)
        .expect("fixture schema");
    store
        .connection()
        .execute_batch(FIXTURE_DATA)
        .expect("fixture data");
    store
}

/// A store with the table layout but no rows.
pub(crate) fn empty_store() -> DexStore {
    let store = DexStore::open_in_memory().expect("in-memory store");
    store
        .connection()
        .execute_batch(FIXTURE_SCHEMA)
        .expect("fixture schema");
    store
}
