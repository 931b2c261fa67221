// ═══════════════════════════════════════════════════════════════════════
// Core types — factions, territories, objectives and the player
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Faction ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Blue,
    Red,
    Green,
    Yellow,
    Pink,
    Purple,
}

impl Faction {
    pub const ALL: [Faction; 6] = [
        Faction::Blue,
        Faction::Red,
        Faction::Green,
        Faction::Yellow,
        Faction::Pink,
        Faction::Purple,
    ];

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Faction> {
        Faction::ALL
            .iter()
            .copied()
            .find(|f| f.to_string().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Blue => write!(f, "Blue"),
            Faction::Red => write!(f, "Red"),
            Faction::Green => write!(f, "Green"),
            Faction::Yellow => write!(f, "Yellow"),
            Faction::Pink => write!(f, "Pink"),
            Faction::Purple => write!(f, "Purple"),
        }
    }
}

impl std::str::FromStr for Faction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Faction::from_name(s).ok_or_else(|| format!("unknown faction '{}'", s))
    }
}

// ── Territory ──────────────────────────────────────────────────────────

/// One region of the map.
///
/// `troops` is signed: the attacking side of a battle is never clamped, so
/// the type must be able to carry whatever the loss arithmetic produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    name: String,
    pub faction: Faction,
    pub troops: i32,
}

impl Territory {
    pub fn new(name: impl Into<String>, faction: Faction, troops: i32) -> Self {
        Territory {
            name: name.into(),
            faction,
            troops,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// ── Objective ──────────────────────────────────────────────────────────

/// Identifier the fallback objective maps to (any id outside 1..=4).
pub const FALLBACK_OBJECTIVE_ID: u32 = 0;
/// Number of objectives in the drawable set.
pub const DRAWABLE_OBJECTIVES: u32 = 4;

/// Secret mission assigned to the player once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    /// No territory on the map may remain with this faction.
    EliminateFaction(Faction),
    /// The player must own at least this many territories.
    ControlAtLeast(u32),
}

impl Objective {
    /// Map a drawn identifier to its objective. Unknown ids fall back to
    /// controlling 15 territories.
    pub fn from_id(id: u32) -> Objective {
        match id {
            1 => Objective::EliminateFaction(Faction::Red),
            2 => Objective::EliminateFaction(Faction::Green),
            3 => Objective::ControlAtLeast(18),
            4 => Objective::ControlAtLeast(24),
            _ => Objective::ControlAtLeast(15),
        }
    }

    /// Inverse of `from_id` for the drawable set; the fallback reports 0.
    pub fn id(self) -> u32 {
        match self {
            Objective::EliminateFaction(Faction::Red) => 1,
            Objective::EliminateFaction(Faction::Green) => 2,
            Objective::ControlAtLeast(18) => 3,
            Objective::ControlAtLeast(24) => 4,
            _ => FALLBACK_OBJECTIVE_ID,
        }
    }

    /// Short headline, e.g. "Destroy the Red army".
    pub fn title(self) -> String {
        match self {
            Objective::EliminateFaction(f) => format!("Destroy the {} army", f),
            Objective::ControlAtLeast(n) => format!("Conquer {} territories", n),
        }
    }

    /// One-line explanation of what satisfies the objective.
    pub fn goal(self) -> String {
        match self {
            Objective::EliminateFaction(f) => {
                format!("Eliminate every {} territory from the map", f)
            }
            Objective::ControlAtLeast(n) => {
                format!("Control at least {} territories with your army", n)
            }
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ── Player ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub faction: Faction,
    pub objective: Objective,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_ids_round_trip_for_drawable_set() {
        for id in 1..=DRAWABLE_OBJECTIVES {
            assert_eq!(Objective::from_id(id).id(), id);
        }
    }

    #[test]
    fn test_unknown_objective_id_falls_back() {
        assert_eq!(Objective::from_id(0), Objective::ControlAtLeast(15));
        assert_eq!(Objective::from_id(5), Objective::ControlAtLeast(15));
        assert_eq!(Objective::from_id(u32::MAX), Objective::ControlAtLeast(15));
        assert_eq!(Objective::ControlAtLeast(15).id(), FALLBACK_OBJECTIVE_ID);
    }

    #[test]
    fn test_faction_from_name() {
        assert_eq!(Faction::from_name("red"), Some(Faction::Red));
        assert_eq!(Faction::from_name(" PURPLE "), Some(Faction::Purple));
        assert_eq!(Faction::from_name("orange"), None);
        assert_eq!("Blue".parse::<Faction>(), Ok(Faction::Blue));
    }

    #[test]
    fn test_objective_text() {
        let o = Objective::EliminateFaction(Faction::Green);
        assert_eq!(o.title(), "Destroy the Green army");
        assert!(Objective::ControlAtLeast(24).goal().contains("24"));
    }
}
