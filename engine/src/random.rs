// ═══════════════════════════════════════════════════════════════════════
// Random source — the only place the engine gets randomness from.
//
// Battles and objective draws take a `&mut impl RandomSource` instead of
// touching a global generator, so tests can replay an exact dice sequence.
// ═══════════════════════════════════════════════════════════════════════

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DIE_FACES: u32 = 6;

/// Yields the next integer in an inclusive range.
pub trait RandomSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;

    /// One six-sided die.
    fn roll_die(&mut self) -> u8 {
        self.next_in_range(1, DIE_FACES) as u8
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }
}

// ── Seeded generator ───────────────────────────────────────────────────

/// ChaCha-backed source. Same seed → same session.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from the wall clock, for sessions that don't ask for one.
    pub fn from_clock() -> Self {
        SeededRandom::new(clock_seed())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Nanoseconds since the epoch, truncated to 64 bits.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

// ── Scripted source ────────────────────────────────────────────────────

/// Replays a fixed list of values, one per draw.
///
/// Panics when the script runs out or a value falls outside the requested
/// range; both mean the test that built it is wrong.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        ScriptedRandom {
            values: values.into_iter().collect(),
        }
    }

    /// Script of (attacker, defender) die pairs, in duel order.
    pub fn duels(pairs: &[(u8, u8)]) -> Self {
        ScriptedRandom::new(
            pairs
                .iter()
                .flat_map(|&(a, d)| [u32::from(a), u32::from(d)]),
        )
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        let value = self
            .values
            .pop_front()
            .expect("scripted random source exhausted");
        assert!(
            (low..=high).contains(&value),
            "scripted value {} outside {}..={}",
            value,
            low,
            high
        );
        value
    }
}
