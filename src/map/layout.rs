//! Custom roster layouts.
//!
//! A layout is a JSON array of territory descriptions supplied over the
//! protocol, replacing the demo roster for the rest of the session:
//!
//! ```json
//! [{"name": "Aldea", "color": "Verde", "troops": 3}, ...]
//! ```

use serde::Deserialize;

use super::registry::TerritoryRegistry;
use super::territory::Territory;

/// Minimum roster size: combat needs two distinct territories.
pub const MIN_TERRITORIES: usize = 2;

/// One territory description in a layout document.
#[derive(Debug, Clone, Deserialize)]
pub struct TerritorySpec {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub troops: u32,
}

/// Errors raised while building a registry from a layout document.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout needs at least 2 territories, got {0}")]
    TooFewTerritories(usize),

    #[error("territory {0} has an empty name")]
    EmptyName(usize),

    #[error("territory {0} has an empty color")]
    EmptyColor(usize),
}

/// Parses a JSON layout document into a registry.
///
/// Names and colors must be non-blank; they are truncated to the territory
/// field caps on construction.
pub fn parse_layout(json: &str) -> Result<TerritoryRegistry, LayoutError> {
    let specs: Vec<TerritorySpec> = serde_json::from_str(json)?;

    if specs.len() < MIN_TERRITORIES {
        return Err(LayoutError::TooFewTerritories(specs.len()));
    }

    let mut territories = Vec::with_capacity(specs.len());
    for (i, spec) in specs.iter().enumerate() {
        if spec.name.trim().is_empty() {
            return Err(LayoutError::EmptyName(i));
        }
        if spec.color.trim().is_empty() {
            return Err(LayoutError::EmptyColor(i));
        }
        territories.push(Territory::new(&spec.name, &spec.color, spec.troops));
    }

    Ok(TerritoryRegistry::new(territories))
}
