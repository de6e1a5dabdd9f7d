//! Mission catalog, random assignment, and evaluation.
//!
//! A mission is the session's victory condition, drawn uniformly from the
//! catalog at session start and evaluated on demand against the registry.
//! Evaluation is a pure read; no mission mutates game state.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::map::TerritoryRegistry;

/// Color targeted by the elimination mission in the current ruleset.
pub const ELIMINATION_COLOR: &str = "Verde";

/// Territory goal of the control mission in the current ruleset.
pub const CONTROL_GOAL: u32 = 3;

/// A victory condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Mission {
    /// No mission assigned; never satisfied.
    None,
    /// Every territory of the matching color must be emptied of troops.
    EliminateColor(String),
    /// At least this many territories must hold troops, any color.
    ControlCount(u32),
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mission::None => write!(f, "none"),
            Mission::EliminateColor(color) => write!(f, "eliminate {}", color),
            Mission::ControlCount(goal) => write!(f, "control {}", goal),
        }
    }
}

/// Draws a mission uniformly from the catalog of assignable variants.
///
/// The catalog currently holds two entries; extending it only means adding
/// an arm here.
pub fn generate_random(rng: &mut impl Rng) -> Mission {
    match rng.gen_range(0..2) {
        0 => Mission::EliminateColor(ELIMINATION_COLOR.to_string()),
        _ => Mission::ControlCount(CONTROL_GOAL),
    }
}

/// Evaluates whether the registry state satisfies the mission.
///
/// `EliminateColor` is vacuously satisfied when no territory matches the
/// color. `ControlCount` counts troop-holding territories of any color.
pub fn evaluate(registry: &TerritoryRegistry, mission: &Mission) -> bool {
    match mission {
        Mission::None => false,
        Mission::EliminateColor(color) => registry
            .territories
            .iter()
            .filter(|t| t.color_matches(color))
            .all(|t| t.troops == 0),
        Mission::ControlCount(goal) => registry.count_with_troops() >= *goal as usize,
    }
}
