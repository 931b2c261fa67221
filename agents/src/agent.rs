// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — interface for autopilots that play the human's turns.
//
// Agents only ever act for the player's own faction; the other armies on
// the map never move. An agent sees the public map plus its own player
// record (faction and secret objective) and returns one `Action`.
// ═══════════════════════════════════════════════════════════════════════

use war_engine::battle::MIN_ATTACKING_TROOPS;
use war_engine::engine::Action;
use war_engine::map::WorldMap;
use war_engine::types::*;

/// Trait that all autopilot agents implement.
pub trait Agent: Send {
    /// Human-readable name for this agent (e.g., "Random", "Heuristic").
    fn name(&self) -> &str;

    /// Pick the next action for `player` on `map`.
    fn decide(&mut self, map: &WorldMap, player: &Player) -> Action;
}

/// A legal attack as 1-based territory numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOption {
    pub origin: usize,
    pub destination: usize,
}

impl AttackOption {
    pub fn into_action(self) -> Action {
        Action::Attack {
            origin: self.origin,
            destination: self.destination,
        }
    }
}

/// Every attack `faction` could launch right now.
pub fn legal_attacks(map: &WorldMap, faction: Faction) -> Vec<AttackOption> {
    let origins: Vec<usize> = map
        .iter()
        .enumerate()
        .filter(|(_, t)| t.faction == faction && t.troops >= MIN_ATTACKING_TROOPS)
        .map(|(i, _)| i)
        .collect();

    let mut options = Vec::new();
    for &origin in &origins {
        for (destination, target) in map.iter().enumerate() {
            if target.faction != faction {
                options.push(AttackOption {
                    origin: origin + 1,
                    destination: destination + 1,
                });
            }
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_attacks_respect_preconditions() {
        let map = WorldMap::from_territories(vec![
            Territory::new("A", Faction::Blue, 3),
            Territory::new("B", Faction::Blue, 1),
            Territory::new("C", Faction::Red, 2),
            Territory::new("D", Faction::Green, 4),
        ]);
        let options = legal_attacks(&map, Faction::Blue);
        assert_eq!(
            options,
            vec![
                AttackOption { origin: 1, destination: 3 },
                AttackOption { origin: 1, destination: 4 },
            ]
        );
        for o in options {
            assert!(war_engine::ValidatedAttack::from_numbers(&map, Faction::Blue, o.origin, o.destination).is_ok());
        }
    }

    #[test]
    fn test_no_attacks_without_spare_troops() {
        let map = WorldMap::from_territories(vec![
            Territory::new("A", Faction::Blue, 1),
            Territory::new("B", Faction::Red, 2),
        ]);
        assert!(legal_attacks(&map, Faction::Blue).is_empty());
    }
}
