// ═══════════════════════════════════════════════════════════════════════
// Session configuration — loaded from JSON, overridden by CLI flags
// ═══════════════════════════════════════════════════════════════════════

use crate::error::ConfigError;
use crate::types::Faction;
use serde::{Deserialize, Serialize};

/// Upper bound for `max_initial_troops`.
pub const MAX_INITIAL_TROOPS: i32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed seed for reproducible sessions. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Army the human plays.
    pub player_faction: Faction,
    /// Inclusive bounds for each territory's starting troops.
    pub min_initial_troops: i32,
    pub max_initial_troops: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            seed: None,
            player_faction: Faction::Blue,
            min_initial_troops: 1,
            max_initial_troops: 5,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_initial_troops < 1 {
            return Err(ConfigError::MinTroopsTooLow(self.min_initial_troops));
        }
        if self.max_initial_troops > MAX_INITIAL_TROOPS {
            return Err(ConfigError::MaxTroopsTooHigh {
                max: self.max_initial_troops,
                limit: MAX_INITIAL_TROOPS,
            });
        }
        if self.min_initial_troops > self.max_initial_troops {
            return Err(ConfigError::InvertedTroopRange {
                min: self.min_initial_troops,
                max: self.max_initial_troops,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SessionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            SessionConfig::from_json_str(r#"{"seed": 12, "player_faction": "Green"}"#).unwrap();
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.player_faction, Faction::Green);
        assert_eq!(config.max_initial_troops, 5);
    }

    #[test]
    fn test_rejects_zero_min_troops() {
        let err = SessionConfig::from_json_str(r#"{"min_initial_troops": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MinTroopsTooLow(0)));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = SessionConfig::from_json_str(
            r#"{"min_initial_troops": 4, "max_initial_troops": 2}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvertedTroopRange { min: 4, max: 2 }));
    }

    #[test]
    fn test_rejects_huge_max_troops() {
        let err = SessionConfig::from_json_str(
            r#"{"seed": 1, "min_initial_troops": 1, "max_initial_troops": 2000000000}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MaxTroopsTooHigh { max: 2_000_000_000, limit: MAX_INITIAL_TROOPS }
        ));

        let at_limit = SessionConfig {
            max_initial_troops: MAX_INITIAL_TROOPS,
            ..SessionConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            SessionConfig::from_json_str("{seed:"),
            Err(ConfigError::Parse(_))
        ));
    }
}
