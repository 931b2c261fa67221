// ═══════════════════════════════════════════════════════════════════════
// Objectives — drawing the secret mission and checking it against the map
// ═══════════════════════════════════════════════════════════════════════

use crate::map::WorldMap;
use crate::random::RandomSource;
use crate::types::*;

/// Uniform draw over the four mission ids.
pub fn draw_objective(rng: &mut impl RandomSource) -> Objective {
    Objective::from_id(rng.next_in_range(1, DRAWABLE_OBJECTIVES))
}

/// Pure query: is `objective` satisfied for `player` on this map?
pub fn is_objective_met(map: &WorldMap, objective: Objective, player: Faction) -> bool {
    match objective {
        Objective::EliminateFaction(target) => !map.contains_faction(target),
        Objective::ControlAtLeast(count) => {
            let needed = count as usize;
            if needed == 0 {
                return true;
            }
            let mut owned = 0usize;
            for territory in map.iter() {
                if territory.faction == player {
                    owned += 1;
                    if owned >= needed {
                        return true;
                    }
                }
            }
            false
        }
    }
}

impl Objective {
    pub fn is_met(self, map: &WorldMap, player: Faction) -> bool {
        is_objective_met(map, self, player)
    }
}

impl Player {
    pub fn has_won(&self, map: &WorldMap) -> bool {
        self.objective.is_met(map, self.faction)
    }
}
