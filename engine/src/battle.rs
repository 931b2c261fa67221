// ═══════════════════════════════════════════════════════════════════════
// Battle resolution — one attack, one round of paired dice.
//
// Rules:
//   - The origin always keeps one troop home, so it rolls troops - 1 dice.
//   - The defender rolls one die per troop.
//   - Only min(attacker dice, defender dice) duels are fought; surplus
//     troops on either side sit the round out.
//   - A duel goes to the attacker only on a strictly higher roll.
//   - A destination at <= 0 troops changes hands with exactly 1 troop,
//     then receives one more from the origin if the origin can spare it.
//   - The origin is never clamped; it keeps whatever its losses leave.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::AttackError;
use crate::map::WorldMap;
use crate::random::RandomSource;
use crate::types::Faction;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Fewest troops a territory needs before it can launch an attack.
pub const MIN_ATTACKING_TROOPS: i32 = 2;

// ── Validated attack ───────────────────────────────────────────────────

/// An origin/destination pair that passed every precondition.
/// Only `ValidatedAttack::new` can build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedAttack {
    origin: usize,
    destination: usize,
}

impl ValidatedAttack {
    /// Check an attack given 0-based indices. Errors carry 1-based numbers.
    pub fn new(
        map: &WorldMap,
        attacker: Faction,
        origin: usize,
        destination: usize,
    ) -> Result<Self, AttackError> {
        let count = map.len();
        let lookup = |index: usize| {
            map.get(index).ok_or(AttackError::OutOfRange {
                number: index.saturating_add(1),
                count,
            })
        };
        let from = lookup(origin)?;
        let to = lookup(destination)?;

        if origin == destination {
            return Err(AttackError::SelfAttack);
        }
        if from.faction != attacker {
            return Err(AttackError::NotOwnOrigin {
                number: origin + 1,
                owner: from.faction,
                faction: attacker,
            });
        }
        if to.faction == attacker {
            return Err(AttackError::OwnDestination {
                number: destination + 1,
            });
        }
        if from.troops < MIN_ATTACKING_TROOPS {
            return Err(AttackError::InsufficientTroops {
                number: origin + 1,
                troops: from.troops,
            });
        }

        Ok(ValidatedAttack {
            origin,
            destination,
        })
    }

    /// Same checks, from 1-based presentation numbers. Zero is out of range.
    pub fn from_numbers(
        map: &WorldMap,
        attacker: Faction,
        origin: usize,
        destination: usize,
    ) -> Result<Self, AttackError> {
        let to_index = |number: usize| {
            number.checked_sub(1).ok_or(AttackError::OutOfRange {
                number,
                count: map.len(),
            })
        };
        ValidatedAttack::new(map, attacker, to_index(origin)?, to_index(destination)?)
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn destination(&self) -> usize {
        self.destination
    }
}

// ── Outcome ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Attacker,
    Defender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duel {
    pub attacker_roll: u8,
    pub defender_roll: u8,
    pub winner: Side,
}

impl Duel {
    /// Ties go to the defender.
    pub fn fight(attacker_roll: u8, defender_roll: u8) -> Duel {
        let winner = if attacker_roll > defender_roll {
            Side::Attacker
        } else {
            Side::Defender
        };
        Duel {
            attacker_roll,
            defender_roll,
            winner,
        }
    }
}

/// Who took more duels. Says nothing about conquest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    AttackerAhead,
    DefenderAhead,
    Draw,
}

/// Snapshot of one side before the dice were rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub index: usize,
    pub name: String,
    pub faction: Faction,
    pub troops: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub attacker: Combatant,
    pub defender: Combatant,
    pub duels: Vec<Duel>,
    pub attacker_wins: u32,
    pub defender_wins: u32,
    pub conquered: bool,
    /// An extra troop moved from origin into the conquered territory.
    pub transferred_troop: bool,
    pub origin_troops: i32,
    pub destination_troops: i32,
}

impl BattleOutcome {
    pub fn verdict(&self) -> Verdict {
        match self.attacker_wins.cmp(&self.defender_wins) {
            std::cmp::Ordering::Greater => Verdict::AttackerAhead,
            std::cmp::Ordering::Less => Verdict::DefenderAhead,
            std::cmp::Ordering::Equal => Verdict::Draw,
        }
    }

    /// Dice each side was entitled to, before the minimum was taken.
    pub fn dice_available(&self) -> (i32, i32) {
        (self.attacker.troops - 1, self.defender.troops)
    }
}

// ── Resolution ─────────────────────────────────────────────────────────

/// Number of duels an attack will fight with the map as it is now.
pub fn duel_count(origin_troops: i32, destination_troops: i32) -> u32 {
    (origin_troops - 1).min(destination_troops).max(0) as u32
}

/// Run one attack and write the result back to the map.
pub fn resolve_attack(
    map: &mut WorldMap,
    attack: ValidatedAttack,
    rng: &mut impl RandomSource,
) -> BattleOutcome {
    let (origin, destination) = map.pair_mut(attack.origin, attack.destination);

    let attacker = Combatant {
        index: attack.origin,
        name: origin.name().to_string(),
        faction: origin.faction,
        troops: origin.troops,
    };
    let defender = Combatant {
        index: attack.destination,
        name: destination.name().to_string(),
        faction: destination.faction,
        troops: destination.troops,
    };

    let rounds = duel_count(origin.troops, destination.troops);
    let mut duels = Vec::with_capacity(rounds as usize);
    for i in 0..rounds {
        let attacker_roll = rng.roll_die();
        let defender_roll = rng.roll_die();
        let duel = Duel::fight(attacker_roll, defender_roll);
        trace!(duel = i + 1, attacker_roll, defender_roll, winner = ?duel.winner, "duel");
        duels.push(duel);
    }

    let attacker_wins = duels.iter().filter(|d| d.winner == Side::Attacker).count() as u32;
    let defender_wins = rounds - attacker_wins;

    destination.troops -= attacker_wins as i32;
    origin.troops -= defender_wins as i32;

    let conquered = destination.troops <= 0;
    let mut transferred_troop = false;
    if conquered {
        destination.faction = origin.faction;
        destination.troops = 1;
        if origin.troops > 1 {
            origin.troops -= 1;
            destination.troops += 1;
            transferred_troop = true;
        }
        debug!(
            territory = %defender.name,
            from = %defender.faction,
            to = %attacker.faction,
            "territory conquered"
        );
    }

    debug!(
        origin = %attacker.name,
        destination = %defender.name,
        duels = rounds,
        attacker_wins,
        defender_wins,
        origin_troops = origin.troops,
        destination_troops = destination.troops,
        "attack resolved"
    );

    BattleOutcome {
        origin_troops: origin.troops,
        destination_troops: destination.troops,
        attacker,
        defender,
        duels,
        attacker_wins,
        defender_wins,
        conquered,
        transferred_troop,
    }
}
