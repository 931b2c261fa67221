pub mod types;
pub mod error;
pub mod config;
pub mod random;
pub mod map;
pub mod battle;
pub mod objective;
pub mod engine;

pub use types::*;
pub use error::{AttackError, ConfigError, SetupError};
pub use config::{SessionConfig, MAX_INITIAL_TROOPS};
pub use map::{WorldMap, NUM_TERRITORIES};
pub use battle::{resolve_attack, BattleOutcome, ValidatedAttack};
pub use objective::{draw_objective, is_objective_met};
pub use engine::{Action, ActionReport, Session};
