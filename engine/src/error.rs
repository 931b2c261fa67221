// ═══════════════════════════════════════════════════════════════════════
// Errors — invalid attacks, setup failures and configuration problems
// ═══════════════════════════════════════════════════════════════════════

use crate::types::Faction;

/// Why an attack request was rejected before any dice were rolled.
/// Indices are 1-based presentation numbers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    #[error("territory {number} does not exist (choose 1-{count})")]
    OutOfRange { number: usize, count: usize },

    #[error("a territory cannot attack itself")]
    SelfAttack,

    #[error("territory {number} belongs to {owner}; you can only attack from your own ({faction}) territories")]
    NotOwnOrigin {
        number: usize,
        owner: Faction,
        faction: Faction,
    },

    #[error("territory {number} is already yours; you cannot attack your own territories")]
    OwnDestination { number: usize },

    #[error("territory {number} has {troops} troop(s); at least 2 are needed to attack")]
    InsufficientTroops { number: usize, troops: i32 },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("min_initial_troops must be at least 1 (got {0})")]
    MinTroopsTooLow(i32),

    #[error("max_initial_troops must be at most {limit} (got {max})")]
    MaxTroopsTooHigh { max: i32, limit: i32 },

    #[error("min_initial_troops ({min}) exceeds max_initial_troops ({max})")]
    InvertedTroopRange { min: i32, max: i32 },
}

/// Fatal conditions when a session is being set up.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("could not allocate memory for {0} territories")]
    Allocation(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
