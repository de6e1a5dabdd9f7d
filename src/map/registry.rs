//! Fixed-roster territory registry.
//!
//! Holds the ordered collection of territories for one game session and
//! exposes the lookup and counting queries used by combat and missions.
//! The roster size is fixed for the lifetime of a session: territories are
//! never inserted or removed, so indices stay stable.

use super::territory::Territory;

/// Number of territories in the demo layout.
pub const DEMO_SIZE: usize = 5;

/// Demo layout: (name, color, initial troops) per territory.
const DEMO_LAYOUT: [(&str, &str, u32); DEMO_SIZE] = [
    ("Aldea", "Verde", 3),
    ("Montanha", "Vermelho", 4),
    ("Planície", "Azul", 2),
    ("Fortaleza", "Amarelo", 5),
    ("Vale", "Verde", 1),
];

/// Errors raised by checked registry lookups.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("territory index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The ordered, fixed-size collection of territories for a session.
///
/// Storage is public in the style of a board state; `get`/`get_mut` are the
/// checked lookups that turn a bad index into a reportable error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryRegistry {
    pub territories: Vec<Territory>,
}

impl TerritoryRegistry {
    /// Creates a registry from an existing roster.
    pub fn new(territories: Vec<Territory>) -> Self {
        TerritoryRegistry { territories }
    }

    /// Creates the deterministic five-territory demo layout.
    pub fn demo() -> Self {
        let territories = DEMO_LAYOUT
            .iter()
            .map(|(name, color, troops)| Territory::new(name, color, *troops))
            .collect();
        TerritoryRegistry { territories }
    }

    /// Returns the number of territories in the roster.
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Returns true if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Checked lookup by index.
    pub fn get(&self, index: usize) -> Result<&Territory, RegistryError> {
        let len = self.territories.len();
        self.territories
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange { index, len })
    }

    /// Checked mutable lookup by index.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Territory, RegistryError> {
        let len = self.territories.len();
        self.territories
            .get_mut(index)
            .ok_or(RegistryError::IndexOutOfRange { index, len })
    }

    /// Counts territories currently holding troops.
    pub fn count_with_troops(&self) -> usize {
        self.territories.iter().filter(|t| t.has_troops()).count()
    }

    /// Counts troop-holding territories whose color matches `color`
    /// (case-insensitive substring).
    pub fn count_with_troops_matching(&self, color: &str) -> usize {
        self.territories
            .iter()
            .filter(|t| t.has_troops() && t.color_matches(color))
            .count()
    }
}
