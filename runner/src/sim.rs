// ═══════════════════════════════════════════════════════════════════════
// Headless simulation — an agent plays whole sessions without a human.
// ═══════════════════════════════════════════════════════════════════════

use anyhow::{bail, Result};
use clap::ValueEnum;
use rayon::prelude::*;
use tracing::{debug, info};
use war_agents::{Agent, HeuristicAgent, RandomAgent};
use war_engine::battle::BattleOutcome;
use war_engine::config::SessionConfig;
use war_engine::engine::{ActionReport, Session};
use war_engine::random::RandomSource;
use war_engine::types::Objective;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    Random,
    Heuristic,
}

pub fn make_agent(kind: AgentKind, seed: u64) -> Box<dyn Agent> {
    match kind {
        AgentKind::Random => Box::new(RandomAgent::new(seed)),
        AgentKind::Heuristic => Box::new(HeuristicAgent::new(seed)),
    }
}

/// Result of one finished (or abandoned) session.
#[derive(Debug, Clone)]
pub struct SimResult {
    pub seed: u64,
    pub objective: Objective,
    pub victory: bool,
    pub turns: u32,
    pub battles: u32,
    pub conquests: u32,
}

/// Drive `session` with `agent` until it ends or `max_turns` actions pass.
/// `on_battle` sees every battle as it happens.
pub fn drive<R: RandomSource>(
    session: &mut Session<R>,
    agent: &mut dyn Agent,
    max_turns: u32,
    mut on_battle: impl FnMut(&BattleOutcome),
) -> Result<(u32, u32)> {
    let (mut battles, mut conquests) = (0u32, 0u32);
    while !session.is_finished() && session.turn() < max_turns {
        let action = agent.decide(session.map(), session.player());
        match session.apply_action(action) {
            Ok(ActionReport::Battle(outcome)) => {
                battles += 1;
                if outcome.conquered {
                    conquests += 1;
                }
                on_battle(&outcome);
            }
            Ok(_) => {}
            Err(e) => bail!("{} agent proposed an invalid attack: {}", agent.name(), e),
        }
    }
    Ok((battles, conquests))
}

/// Play one full session with a fresh agent.
pub fn run_session(config: &SessionConfig, seed: u64, kind: AgentKind, max_turns: u32) -> Result<SimResult> {
    let config = SessionConfig {
        seed: Some(seed),
        ..config.clone()
    };
    let mut session = Session::new(&config)?;
    let mut agent = make_agent(kind, seed);
    let (battles, conquests) = drive(&mut session, agent.as_mut(), max_turns, |_| {})?;

    debug!(seed, victory = session.is_victory(), turns = session.turn(), "session finished");
    Ok(SimResult {
        seed,
        objective: session.player().objective,
        victory: session.is_victory(),
        turns: session.turn(),
        battles,
        conquests,
    })
}

/// Run `games` independent sessions in parallel. Game `g` uses seed
/// `base_seed + g * 1000`.
pub fn run_batch(
    config: &SessionConfig,
    base_seed: u64,
    games: u32,
    kind: AgentKind,
    max_turns: u32,
) -> Result<Vec<SimResult>> {
    info!(games, ?kind, base_seed, "batch started");
    (0..games)
        .into_par_iter()
        .map(|g| run_session(config, base_seed.wrapping_add(u64::from(g) * 1000), kind, max_turns))
        .collect()
}

/// Aggregates for a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub games: usize,
    pub victories: usize,
    /// Battles fought in winning sessions; victory checks are not counted.
    pub mean_battles_to_win: Option<f64>,
    pub mean_conquests: f64,
}

impl BatchSummary {
    pub fn from_results(results: &[SimResult]) -> Self {
        let games = results.len();
        let wins: Vec<&SimResult> = results.iter().filter(|r| r.victory).collect();
        let mean_battles_to_win = if wins.is_empty() {
            None
        } else {
            Some(wins.iter().map(|r| r.battles as f64).sum::<f64>() / wins.len() as f64)
        };
        let mean_conquests = if games == 0 {
            0.0
        } else {
            results.iter().map(|r| r.conquests as f64).sum::<f64>() / games as f64
        };
        BatchSummary {
            games,
            victories: wins.len(),
            mean_battles_to_win,
            mean_conquests,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.victories as f64 / self.games as f64 * 100.0
        }
    }
}
