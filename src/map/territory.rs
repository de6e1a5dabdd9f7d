//! Territory definition and color matching.
//!
//! A territory is a named region held by a color/faction with a troop count.
//! Names and colors are capped at fixed lengths; color comparisons used by
//! the mission layer are case-insensitive substring matches.

use serde::Serialize;

/// Maximum stored length of a territory name, in characters.
pub const MAX_NAME_LEN: usize = 30;

/// Maximum stored length of a color label, in characters.
pub const MAX_COLOR_LEN: usize = 15;

/// A named, colored region with a troop count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Territory {
    pub name: String,
    pub color: String,
    pub troops: u32,
    /// Reserved player slot; `None` until a player claims the territory.
    /// Unused by the current combat and mission rules.
    pub owner: Option<u32>,
}

impl Territory {
    /// Creates a territory, truncating name and color to their caps.
    pub fn new(name: &str, color: &str, troops: u32) -> Self {
        Territory {
            name: truncate(name, MAX_NAME_LEN),
            color: truncate(color, MAX_COLOR_LEN),
            troops,
            owner: None,
        }
    }

    /// Returns true if this territory holds any troops.
    pub fn has_troops(&self) -> bool {
        self.troops > 0
    }

    /// Case-insensitive substring match against the color label.
    ///
    /// This is the single matching policy for every ownership and mission
    /// check: `needle` matches if it appears anywhere in the color once both
    /// sides are lowercased.
    pub fn color_matches(&self, needle: &str) -> bool {
        self.color.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Truncates a string to at most `max` characters on a char boundary.
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
