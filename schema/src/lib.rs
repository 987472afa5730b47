// Pokedex Schema - Shared type definitions
// This crate contains the domain entities shared between the query engine
// and any front end built on top of it. Everything here is a plain value
// type with no knowledge of how the data is stored.

// Re-export the main types
pub use evolution_data::*;
pub use move_data::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod evolution_data;
pub mod move_data;
pub mod pokemon_types;
pub mod species_data;

/// Turn a raw dataset identifier like "thunder-stone" into "Thunder Stone".
pub fn prettify(raw: &str) -> String {
    raw.split(['-', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
