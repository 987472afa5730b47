use std::env;
use std::process;

use pokedex_engine::{
    effectiveness, find_chain_containing, moves_for, species_by_id, DexResult, DexStore,
    SearchFilters, ALL_VERSIONS,
};
use pokedex_engine::schema::prettify;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let db_path = args.next().unwrap_or_else(|| "Pokemon.db".to_string());
    let species = args.next().unwrap_or_else(|| "bulbasaur".to_string());

    if let Err(err) = run(&db_path, &species) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(db_path: &str, species_name: &str) -> DexResult<()> {
    let store = DexStore::open(db_path)?;

    let filters = SearchFilters {
        name: Some(species_name.to_string()),
        ..Default::default()
    };
    let matches = pokedex_engine::search(&store, &filters)?;
    let record = match matches.into_iter().next() {
        Some(record) => record,
        None => {
            println!("No species matching '{}'.", species_name);
            return Ok(());
        }
    };
    let record = species_by_id(&store, record.id)?.unwrap_or(record);

    println!("#{:04} {}", record.id, prettify(&record.name));
    let types: Vec<String> = [record.primary_type, record.secondary_type]
        .into_iter()
        .flatten()
        .map(|t| t.to_string())
        .collect();
    println!("  Type: {}", types.join(" / "));
    println!(
        "  Height: {:.1} m   Weight: {:.1} kg",
        record.height_m(),
        record.weight_kg()
    );
    println!(
        "  Stats: {} HP / {} Atk / {} Def / {} SpA / {} SpD / {} Spe (total {})",
        record.stats.hp,
        record.stats.attack,
        record.stats.defense,
        record.stats.sp_attack,
        record.stats.sp_defense,
        record.stats.speed,
        record.stats.total()
    );
    for ability in &record.abilities {
        let marker = if ability.is_hidden { " (hidden)" } else { "" };
        println!("  Ability: {}{}", prettify(&ability.name), marker);
    }

    if let Some(primary) = record.primary_type {
        if let Some(matchups) = effectiveness(&store, primary, record.secondary_type)? {
            print_bucket("Weak to", &matchups.weak);
            print_bucket("Very weak to", &matchups.very_weak);
            print_bucket("Resists", &matchups.resistant);
            print_bucket("Strongly resists", &matchups.very_resistant);
            print_bucket("Immune to", &matchups.immune);
        }
    }

    if let Some(chain) = find_chain_containing(&store, &record.name)? {
        let names: Vec<String> = chain
            .species_names()
            .into_iter()
            .map(prettify)
            .collect();
        println!("  Evolution line: {}", names.join(" -> "));
    }

    let ledger = moves_for(&store, record.id)?;
    let all = ledger.filtered_by_version(ALL_VERSIONS);
    println!(
        "  Moves: {} level-up, {} tutor, {} egg",
        all.level_up.len(),
        all.tutor.len(),
        all.egg.len()
    );
    for learned in all.level_up.iter().take(5) {
        match learned.level {
            Some(level) if level > 0 => {
                println!("    Lv. {:>2}  {}", level, prettify(&learned.name))
            }
            _ => println!("    ------  {}", prettify(&learned.name)),
        }
    }

    Ok(())
}

fn print_bucket(label: &str, types: &[pokedex_engine::schema::PokemonType]) {
    if types.is_empty() {
        return;
    }
    let names: Vec<String> = types.iter().map(|t| t.to_string()).collect();
    println!("  {}: {}", label, names.join(", "));
}
