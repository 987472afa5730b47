use std::fmt;

/// Main error type for the Pokedex query engine.
///
/// Only storage-access failures surface here. Lookup misses are reported
/// as `Ok(None)` / empty results, and JSON decode failures are recovered
/// locally by substituting the field's empty value, so neither appears in
/// this taxonomy.
#[derive(Debug)]
pub enum DexError {
    /// The underlying SQLite store failed (connection, IO, malformed
    /// statement). Propagated unchanged; retry policy belongs to the
    /// storage boundary.
    Storage(rusqlite::Error),
}

impl fmt::Display for DexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DexError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for DexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DexError::Storage(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DexError {
    fn from(err: rusqlite::Error) -> Self {
        DexError::Storage(err)
    }
}

/// Type alias for Results using DexError
pub type DexResult<T> = Result<T, DexError>;
