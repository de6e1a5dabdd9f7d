//! One-round combat resolution.
//!
//! Resolves a single attacker-vs-defender dice exchange: both sides roll one
//! d6, ties favor the attacker, and the loser gives up one troop. A defender
//! emptied to zero troops is conquered; the attacker garrisons it with one
//! transferred troop when it has one to spare.
//!
//! Callers are responsible for the preconditions (distinct in-range indices,
//! attacker holding troops); see `Session::validate_attack`. Over valid
//! inputs the resolver is total and raises no error.

use rand::Rng;
use serde::Serialize;

use crate::map::TerritoryRegistry;

/// Number of faces on a combat die.
pub const DIE_SIDES: u32 = 6;

/// The report of one resolved combat round.
///
/// A pure value: the resolver mutates troop counts but performs no output
/// formatting and no color change. Callers apply the conquest recoloring
/// when `conquered` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombatOutcome {
    pub attack_roll: u32,
    pub defense_roll: u32,
    pub attacker_won: bool,
    pub conquered: bool,
    pub troops_transferred: u32,
}

/// Rolls one uniform die in `[1, DIE_SIDES]`.
pub fn roll_die(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=DIE_SIDES)
}

/// Resolves one combat round with dice drawn from the injected RNG.
pub fn resolve(
    registry: &mut TerritoryRegistry,
    attacker: usize,
    defender: usize,
    rng: &mut impl Rng,
) -> CombatOutcome {
    let attack_roll = roll_die(rng);
    let defense_roll = roll_die(rng);
    resolve_with_rolls(registry, attacker, defender, attack_roll, defense_roll)
}

/// Resolves one combat round for a fixed roll pair.
///
/// Ties favor the attacker. The losing side loses exactly one troop, with
/// the count clamped at zero. When the defender reaches zero the territory
/// is conquered: an attacker holding more than one troop moves exactly one
/// into the conquered territory; an attacker down to its last troop leaves
/// it empty.
pub fn resolve_with_rolls(
    registry: &mut TerritoryRegistry,
    attacker: usize,
    defender: usize,
    attack_roll: u32,
    defense_roll: u32,
) -> CombatOutcome {
    let attacker_won = attack_roll >= defense_roll;
    let mut conquered = false;
    let mut troops_transferred = 0;

    if attacker_won {
        let def = &mut registry.territories[defender];
        def.troops = def.troops.saturating_sub(1);

        if def.troops == 0 {
            conquered = true;
            if registry.territories[attacker].troops > 1 {
                registry.territories[attacker].troops -= 1;
                registry.territories[defender].troops = 1;
                troops_transferred = 1;
            }
        }
    } else {
        let atk = &mut registry.territories[attacker];
        atk.troops = atk.troops.saturating_sub(1);
    }

    CombatOutcome {
        attack_roll,
        defense_roll,
        attacker_won,
        conquered,
        troops_transferred,
    }
}
