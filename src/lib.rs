// --- MODULE DECLARATIONS ---
pub mod decode;
pub mod effectiveness;
pub mod errors;
pub mod evolution;
pub mod moves;
pub mod query;
pub mod store;

#[cfg(test)]
pub(crate) mod test_fixtures;

// --- PUBLIC API RE-EXPORTS ---
pub use effectiveness::{effectiveness, TypeChart, TypeMatchups};
pub use errors::{DexError, DexResult};
pub use evolution::find_chain_containing;
pub use moves::{
    filter_machines_by_version, machine_catalog, move_details, moves_for, MoveLedger, ALL_VERSIONS,
};
pub use query::{
    all_types, breeding_partners, breeding_profile, search, species_by_id, stat_maximums,
    SearchFilters,
};
pub use store::DexStore;

// Re-export the shared data-model crate so callers need only one import.
pub use schema;
