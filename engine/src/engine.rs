// ═══════════════════════════════════════════════════════════════════════
// Session engine — owns one game and applies the player's actions.
//
// Architecture:
//   The session is a pure state machine. It never prints or reads input.
//   A driver (interactive menu or autopilot agent) shows the map, picks
//   an `Action`, and feeds it to `apply_action()`, which returns a report
//   for the driver to render.
//
// Flow:
//   1. Driver builds a `Session` (map generated, objective drawn)
//   2. Driver calls `apply_action(Action::Attack { .. })` or
//      `apply_action(Action::CheckVictory)`
//   3. Repeat until `is_finished()` (victory confirmed or player quit)
// ═══════════════════════════════════════════════════════════════════════

use crate::battle::{resolve_attack, BattleOutcome, ValidatedAttack};
use crate::config::SessionConfig;
use crate::error::{AttackError, SetupError};
use crate::map::WorldMap;
use crate::objective::draw_objective;
use crate::random::{clock_seed, RandomSource, SeededRandom};
use crate::types::*;
use tracing::{debug, info};

/// What the player can do on a turn. Territory numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Attack { origin: usize, destination: usize },
    CheckVictory,
    Quit,
}

/// Result of a successfully applied action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionReport {
    Battle(BattleOutcome),
    VictoryCheck { met: bool },
    Quit,
    /// The session had already ended; nothing changed.
    SessionOver,
}

#[derive(Debug, Clone)]
pub struct Session<R = SeededRandom> {
    map: WorldMap,
    player: Player,
    rng: R,
    turn: u32,
    victory: bool,
    quit: bool,
}

impl Session<SeededRandom> {
    /// Start a session from config; seeds from the clock when no seed is set.
    pub fn new(config: &SessionConfig) -> Result<Self, SetupError> {
        let seed = config.seed.unwrap_or_else(clock_seed);
        Session::with_random(config, SeededRandom::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> Session<R> {
    /// Generate the map, then draw the objective, from the given source.
    pub fn with_random(config: &SessionConfig, mut rng: R) -> Result<Self, SetupError> {
        let map = WorldMap::generate(config, &mut rng)?;
        let objective = draw_objective(&mut rng);
        let player = Player {
            faction: config.player_faction,
            objective,
        };
        info!(
            faction = %player.faction,
            objective = %objective,
            territories = map.len(),
            "session started"
        );
        Ok(Session::from_parts(map, player, rng))
    }

    /// Assemble a session around an existing map and player.
    pub fn from_parts(map: WorldMap, player: Player, rng: R) -> Self {
        Session {
            map,
            player,
            rng,
            turn: 0,
            victory: false,
            quit: false,
        }
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Actions applied so far (rejected attacks don't count).
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_victory(&self) -> bool {
        self.victory
    }

    pub fn is_finished(&self) -> bool {
        self.victory || self.quit
    }

    /// Check an attack without rolling anything.
    pub fn validate_attack(
        &self,
        origin: usize,
        destination: usize,
    ) -> Result<ValidatedAttack, AttackError> {
        ValidatedAttack::from_numbers(&self.map, self.player.faction, origin, destination)
    }

    /// Apply one action. A rejected attack leaves the session untouched.
    pub fn apply_action(&mut self, action: Action) -> Result<ActionReport, AttackError> {
        if self.is_finished() {
            return Ok(ActionReport::SessionOver);
        }

        let report = match action {
            Action::Attack {
                origin,
                destination,
            } => {
                let attack = self.validate_attack(origin, destination).map_err(|e| {
                    debug!(origin, destination, error = %e, "attack rejected");
                    e
                })?;
                ActionReport::Battle(resolve_attack(&mut self.map, attack, &mut self.rng))
            }
            Action::CheckVictory => {
                let met = self.player.has_won(&self.map);
                if met {
                    self.victory = true;
                    info!(turn = self.turn + 1, objective = %self.player.objective, "objective complete");
                }
                ActionReport::VictoryCheck { met }
            }
            Action::Quit => {
                self.quit = true;
                info!(turn = self.turn, "player quit");
                ActionReport::Quit
            }
        };

        self.turn += 1;
        Ok(report)
    }
}
