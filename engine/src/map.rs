// ═══════════════════════════════════════════════════════════════════════
// Map store — the fixed, ordered set of territories and their live state.
// Territories are 0-based here; presentation numbers them 1..=N.
// ═══════════════════════════════════════════════════════════════════════

use crate::config::SessionConfig;
use crate::error::SetupError;
use crate::random::RandomSource;
use crate::types::{Faction, Territory};
use serde::{Deserialize, Serialize};

pub const NUM_TERRITORIES: usize = 42;

/// Board names, in presentation order.
pub const TERRITORY_NAMES: [&str; NUM_TERRITORIES] = [
    // Americas
    "Alaska", "Alberta", "Central America", "South America", "Argentina", "Brazil",
    "Greenland", "Mackenzie", "New York", "Ontario", "Quebec", "Northwest Territory",
    "Venezuela",
    // Africa
    "South Africa", "Congo", "Egypt", "Madagascar", "North Africa", "East Africa",
    // Asia
    "Afghanistan", "China", "India", "Irkutsk", "Japan", "Kamchatka", "Mongolia",
    "Middle East", "Siberia", "Southeast Asia", "Siam", "Ural", "Yakutsk",
    // Oceania
    "Eastern Australia", "Indonesia", "New Guinea", "Western Australia",
    // Europe
    "Western Europe", "Eastern Europe", "Great Britain", "Iceland", "Scandinavia",
    "Ukraine",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldMap {
    territories: Vec<Territory>,
}

impl WorldMap {
    /// Build a map from explicit territories (tests, custom scenarios).
    pub fn from_territories(territories: Vec<Territory>) -> Self {
        WorldMap { territories }
    }

    /// Randomized board: every territory gets a uniform faction and a
    /// uniform troop count within the configured bounds.
    pub fn generate(
        config: &SessionConfig,
        rng: &mut impl RandomSource,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        let mut territories = Vec::new();
        territories
            .try_reserve_exact(NUM_TERRITORIES)
            .map_err(|_| SetupError::Allocation(NUM_TERRITORIES))?;

        let factions = Faction::ALL.len() as u32;
        // Bounds validated above, so both are >= 1.
        let (min, max) = (
            config.min_initial_troops as u32,
            config.max_initial_troops as u32,
        );
        for name in TERRITORY_NAMES {
            let faction = Faction::ALL[rng.next_in_range(0, factions - 1) as usize];
            let troops = rng.next_in_range(min, max) as i32;
            territories.push(Territory::new(name, faction, troops));
        }

        Ok(WorldMap { territories })
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Exclusive access to two distinct territories at once.
    ///
    /// Panics if the indices are equal or out of range.
    pub fn pair_mut(&mut self, first: usize, second: usize) -> (&mut Territory, &mut Territory) {
        assert_ne!(first, second, "pair_mut needs two distinct territories");
        if first < second {
            let (left, right) = self.territories.split_at_mut(second);
            (&mut left[first], &mut right[0])
        } else {
            let (left, right) = self.territories.split_at_mut(first);
            (&mut right[0], &mut left[second])
        }
    }

    pub fn count_controlled(&self, faction: Faction) -> usize {
        self.territories.iter().filter(|t| t.faction == faction).count()
    }

    pub fn contains_faction(&self, faction: Faction) -> bool {
        self.territories.iter().any(|t| t.faction == faction)
    }

    /// Indices of every territory owned by `faction`.
    pub fn indices_of(&self, faction: Faction) -> Vec<usize> {
        self.territories
            .iter()
            .enumerate()
            .filter(|(_, t)| t.faction == faction)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    fn small_map() -> WorldMap {
        WorldMap::from_territories(vec![
            Territory::new("A", Faction::Blue, 3),
            Territory::new("B", Faction::Red, 2),
            Territory::new("C", Faction::Blue, 1),
        ])
    }

    #[test]
    fn test_generate_full_board() {
        let mut rng = SeededRandom::new(42);
        let map = WorldMap::generate(&SessionConfig::default(), &mut rng).unwrap();
        assert_eq!(map.len(), NUM_TERRITORIES);
        for (t, name) in map.iter().zip(TERRITORY_NAMES) {
            assert_eq!(t.name(), name);
            assert!((1..=5).contains(&t.troops));
        }
    }

    #[test]
    fn test_generate_consumes_faction_then_troops() {
        // faction index then troops, per territory
        let script = (0..NUM_TERRITORIES).flat_map(|i| [(i % 6) as u32, 3]);
        let mut rng = ScriptedRandom::new(script);
        let map = WorldMap::generate(&SessionConfig::default(), &mut rng).unwrap();
        assert_eq!(map.get(0).unwrap().faction, Faction::Blue);
        assert_eq!(map.get(1).unwrap().faction, Faction::Red);
        assert_eq!(map.get(5).unwrap().faction, Faction::Purple);
        assert!(map.iter().all(|t| t.troops == 3));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_generate_rejects_bad_config() {
        let config = SessionConfig {
            min_initial_troops: 0,
            ..SessionConfig::default()
        };
        let mut rng = SeededRandom::new(1);
        assert!(matches!(
            WorldMap::generate(&config, &mut rng),
            Err(SetupError::Config(_))
        ));
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut map = small_map();
        {
            let (a, b) = map.pair_mut(0, 1);
            assert_eq!(a.name(), "A");
            assert_eq!(b.name(), "B");
        }
        let (b, a) = map.pair_mut(1, 0);
        assert_eq!(b.name(), "B");
        assert_eq!(a.name(), "A");
    }

    #[test]
    #[should_panic]
    fn test_pair_mut_same_index_panics() {
        let mut map = small_map();
        let _ = map.pair_mut(2, 2);
    }

    #[test]
    fn test_faction_queries() {
        let map = small_map();
        assert_eq!(map.count_controlled(Faction::Blue), 2);
        assert!(map.contains_faction(Faction::Red));
        assert!(!map.contains_faction(Faction::Green));
        assert_eq!(map.indices_of(Faction::Blue), vec![0, 2]);
    }
}
