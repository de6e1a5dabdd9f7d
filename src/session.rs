//! Session state management.
//!
//! Holds the territory registry, the current mission and its lifecycle
//! state, and the session RNG. Validates attack commands at the boundary,
//! applies the conquest recoloring rule, and renders protocol responses for
//! the binary entry point. The combat and mission modules stay pure; every
//! I/O concern lives here.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::combat::{self, CombatOutcome};
use crate::map::{parse_layout, LayoutError, RegistryError, Territory, TerritoryRegistry};
use crate::mission::{self, Mission};

/// Validation failures raised at the session boundary.
///
/// The combat resolver and mission engine are total over valid inputs;
/// everything that can go wrong is rejected here before they run.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("attacker and defender must be different territories")]
    SelfAttack,

    #[error("territory '{name}' has no troops to attack with")]
    InsufficientTroops { name: String },

    #[error("mission is not accomplished yet")]
    MissionNotAccomplished,
}

/// Where the current mission stands in its lifecycle.
///
/// A session starts `Assigned`. A successful check moves to `Accomplished`,
/// from which the player either rerolls a fresh mission or keeps the current
/// one; both return to `Assigned`. A failed check stays `Assigned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionProgress {
    Assigned,
    Accomplished,
}

/// JSON snapshot emitted by the `dump` command.
#[derive(Serialize)]
struct Snapshot<'a> {
    territories: &'a [Territory],
    mission: &'a Mission,
    progress: MissionProgress,
}

/// Holds the mutable state of one game session between commands.
pub struct Session {
    pub registry: TerritoryRegistry,
    pub mission: Mission,
    pub progress: MissionProgress,
    rng: SmallRng,
}

impl Session {
    /// Creates a session with the demo roster and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Creates a session with the demo roster and a fixed seed, for
    /// reproducible play and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: SmallRng) -> Self {
        let mission = mission::generate_random(&mut rng);
        Session {
            registry: TerritoryRegistry::demo(),
            mission,
            progress: MissionProgress::Assigned,
            rng,
        }
    }

    /// Resets the session: demo roster, fresh mission, lifecycle back to
    /// `Assigned`. The RNG keeps its stream.
    pub fn new_game(&mut self) {
        self.registry = TerritoryRegistry::demo();
        self.mission = mission::generate_random(&mut self.rng);
        self.progress = MissionProgress::Assigned;
    }

    /// Replaces the roster from a JSON layout document and assigns a fresh
    /// mission for it.
    pub fn load_layout(&mut self, json: &str) -> Result<(), LayoutError> {
        self.registry = parse_layout(json)?;
        self.mission = mission::generate_random(&mut self.rng);
        self.progress = MissionProgress::Assigned;
        Ok(())
    }

    /// Swaps in a freshly seeded RNG.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Checks the attack preconditions without resolving anything.
    ///
    /// Order of checks: index validity, self-attack, attacker troops.
    pub fn validate_attack(&self, attacker: usize, defender: usize) -> Result<(), SessionError> {
        let atk = self.registry.get(attacker)?;
        self.registry.get(defender)?;

        if attacker == defender {
            return Err(SessionError::SelfAttack);
        }
        if !atk.has_troops() {
            return Err(SessionError::InsufficientTroops {
                name: atk.name.clone(),
            });
        }
        Ok(())
    }

    /// Validates and resolves one combat round, then applies the conquest
    /// recoloring: a conquered territory takes the attacker's color.
    pub fn attack(
        &mut self,
        attacker: usize,
        defender: usize,
    ) -> Result<CombatOutcome, SessionError> {
        self.validate_attack(attacker, defender)?;

        let outcome = combat::resolve(&mut self.registry, attacker, defender, &mut self.rng);
        if outcome.conquered {
            let color = self.registry.territories[attacker].color.clone();
            self.registry.territories[defender].color = color;
        }
        Ok(outcome)
    }

    /// Evaluates the current mission and advances the lifecycle.
    pub fn check_mission(&mut self) -> bool {
        let accomplished = mission::evaluate(&self.registry, &self.mission);
        self.progress = if accomplished {
            MissionProgress::Accomplished
        } else {
            MissionProgress::Assigned
        };
        accomplished
    }

    /// Generates a fresh mission. Only allowed after a successful check.
    pub fn reroll_mission(&mut self) -> Result<(), SessionError> {
        if self.progress != MissionProgress::Accomplished {
            return Err(SessionError::MissionNotAccomplished);
        }
        self.mission = mission::generate_random(&mut self.rng);
        self.progress = MissionProgress::Assigned;
        Ok(())
    }

    /// Keeps the current mission after a successful check.
    pub fn retain_mission(&mut self) -> Result<(), SessionError> {
        if self.progress != MissionProgress::Accomplished {
            return Err(SessionError::MissionNotAccomplished);
        }
        self.progress = MissionProgress::Assigned;
        Ok(())
    }

    /// Handles the protocol handshake.
    pub fn handle_hello<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name contenda").unwrap();
        writeln!(out, "id author contenda").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "hellook").unwrap();
        out.flush().unwrap();
    }

    /// Writes one `territory` line per roster entry, then `mapok`.
    ///
    /// The name comes last so it may contain spaces.
    pub fn handle_map<W: Write>(&self, out: &mut W) {
        for (i, t) in self.registry.territories.iter().enumerate() {
            writeln!(out, "territory {} {} {} {}", i, t.troops, t.color, t.name).unwrap();
        }
        writeln!(out, "mapok").unwrap();
        out.flush().unwrap();
    }

    /// Writes the current mission.
    pub fn handle_mission<W: Write>(&self, out: &mut W) {
        writeln!(out, "mission {}", self.mission).unwrap();
        out.flush().unwrap();
    }

    /// Validates and resolves an attack, writing the combat report or a
    /// validation failure.
    pub fn handle_attack<W: Write>(&mut self, out: &mut W, attacker: usize, defender: usize) {
        let outcome = match self.attack(attacker, defender) {
            Ok(o) => o,
            Err(e) => {
                writeln!(out, "error {}", e).unwrap();
                out.flush().unwrap();
                return;
            }
        };

        // territory names are stable across resolution
        let atk_name = &self.registry.territories[attacker].name;
        let def_name = &self.registry.territories[defender].name;
        writeln!(out, "info battle {} -> {}", atk_name, def_name).unwrap();

        let winner = if outcome.attacker_won {
            "attacker"
        } else {
            "defender"
        };
        writeln!(
            out,
            "combat rolls {} {} winner {} conquered {} transferred {}",
            outcome.attack_roll,
            outcome.defense_roll,
            winner,
            outcome.conquered,
            outcome.troops_transferred
        )
        .unwrap();

        if outcome.conquered {
            let t = &self.registry.territories[defender];
            writeln!(out, "info conquered {} color {}", t.name, t.color).unwrap();
        }
        out.flush().unwrap();
    }

    /// Evaluates the mission and writes the status.
    pub fn handle_check<W: Write>(&mut self, out: &mut W) {
        let status = if self.check_mission() {
            "accomplished"
        } else {
            "pending"
        };
        writeln!(out, "missionstatus {}", status).unwrap();
        out.flush().unwrap();
    }

    /// Rerolls the mission after a success, writing the new assignment.
    pub fn handle_reroll<W: Write>(&mut self, out: &mut W) {
        match self.reroll_mission() {
            Ok(()) => {
                writeln!(out, "mission {}", self.mission).unwrap();
                writeln!(out, "missionok").unwrap();
            }
            Err(e) => writeln!(out, "error {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Keeps the mission after a success.
    pub fn handle_keep<W: Write>(&mut self, out: &mut W) {
        match self.retain_mission() {
            Ok(()) => writeln!(out, "missionok").unwrap(),
            Err(e) => writeln!(out, "error {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Loads a custom roster layout.
    pub fn handle_setup<W: Write>(&mut self, out: &mut W, layout: &str) {
        match self.load_layout(layout) {
            Ok(()) => writeln!(out, "setupok").unwrap(),
            Err(e) => writeln!(out, "error {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Writes a one-line JSON snapshot of the session state.
    pub fn handle_dump<W: Write>(&self, out: &mut W) {
        let snapshot = Snapshot {
            territories: &self.registry.territories,
            mission: &self.mission,
            progress: self.progress,
        };
        let json = serde_json::to_string(&snapshot).expect("session state serializes");
        writeln!(out, "{}", json).unwrap();
        out.flush().unwrap();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
