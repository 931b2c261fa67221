// ═══════════════════════════════════════════════════════════════════════
// Random Agent — attacks at random.
// Serves as baseline and for testing session stability.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::{legal_attacks, Agent};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use war_engine::engine::Action;
use war_engine::map::WorldMap;
use war_engine::types::Player;

pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str { "Random" }

    fn decide(&mut self, map: &WorldMap, player: &Player) -> Action {
        if player.has_won(map) {
            return Action::CheckVictory;
        }
        match legal_attacks(map, player.faction).choose(&mut self.rng) {
            Some(option) => option.into_action(),
            None => Action::Quit, // Nothing can attack anymore
        }
    }
}
