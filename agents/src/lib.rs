pub mod agent;
pub mod random;
pub mod heuristic;

pub use agent::{legal_attacks, Agent, AttackOption};
pub use random::RandomAgent;
pub use heuristic::HeuristicAgent;
