// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for interactive play and headless simulation
// ═══════════════════════════════════════════════════════════════════════

mod play;
mod render;
mod sim;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sim::{AgentKind, BatchSummary};
use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;
use war_engine::config::SessionConfig;
use war_engine::engine::Session;
use war_engine::random::clock_seed;
use war_engine::types::Faction;

#[derive(Parser)]
#[command(name = "war", about = "Territory conquest simulation")]
struct Cli {
    /// JSON session config (seed, player_faction, troop bounds)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Seed for the random source; defaults to the wall clock
    #[arg(short, long, global = true)]
    seed: Option<u64>,
    /// Army to play (Blue, Red, Green, Yellow, Pink, Purple)
    #[arg(short, long, global = true)]
    faction: Option<Faction>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,
    /// Let an agent play one session and print every battle
    Autoplay {
        #[arg(short, long, value_enum, default_value_t = AgentKind::Heuristic)]
        agent: AgentKind,
        #[arg(short, long, default_value_t = 1000)]
        max_turns: u32,
    },
    /// Run N sessions in parallel and report win statistics
    Batch {
        #[arg(short, long, default_value_t = 100)]
        games: u32,
        #[arg(short, long, value_enum, default_value_t = AgentKind::Heuristic)]
        agent: AgentKind,
        #[arg(short, long, default_value_t = 1000)]
        max_turns: u32,
    },
}

fn main() {
    init_tracing();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.seed, cli.faction)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => cmd_play(&config),
        Commands::Autoplay { agent, max_turns } => cmd_autoplay(&config, agent, max_turns),
        Commands::Batch { games, agent, max_turns } => cmd_batch(&config, games, agent, max_turns),
    }
}

/// File first, then CLI overrides, then validation.
fn load_config(path: Option<&Path>, seed: Option<u64>, faction: Option<Faction>) -> Result<SessionConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SessionConfig::from_json_str(&text)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => SessionConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(faction) = faction {
        config.player_faction = faction;
    }
    config.validate()?;
    Ok(config)
}

fn cmd_play(config: &SessionConfig) -> Result<()> {
    let mut session = Session::new(config).context("could not set up the map")?;
    let stdin = std::io::stdin();
    play::run_interactive(&mut session, stdin.lock(), std::io::stdout())
}

fn cmd_autoplay(config: &SessionConfig, agent_kind: AgentKind, max_turns: u32) -> Result<()> {
    let mut session = Session::new(config).context("could not set up the map")?;
    let mut agent = sim::make_agent(agent_kind, session.seed());
    let objective = session.player().objective;

    println!("=== War autoplay: seed={}, agent={} ===", session.seed(), agent.name());
    print!("{}", render::objective_panel(objective));
    print!("{}", render::map_table(session.map()));

    let (battles, conquests) = sim::drive(&mut session, agent.as_mut(), max_turns, |outcome| {
        print!("{}", render::battle_report(outcome));
    })?;

    print!("{}", render::map_table(session.map()));
    if session.is_victory() {
        println!("\n*** Mission complete after {} actions! ***", session.turn());
    } else {
        println!("\n*** Mission not completed after {} actions. ***", session.turn());
    }
    println!("Battles: {}, conquests: {}", battles, conquests);
    Ok(())
}

fn cmd_batch(config: &SessionConfig, games: u32, agent_kind: AgentKind, max_turns: u32) -> Result<()> {
    let base_seed = config.seed.unwrap_or_else(clock_seed);
    println!(
        "=== Batch: {} games, agent={:?}, max actions={}, base seed={} ===\n",
        games, agent_kind, max_turns, base_seed
    );

    let results = sim::run_batch(config, base_seed, games, agent_kind, max_turns)?;
    let summary = BatchSummary::from_results(&results);

    println!("--- Summary ({} games) ---", summary.games);
    println!("  Victories:        {:>5} ({:.1}%)", summary.victories, summary.win_rate());
    match summary.mean_battles_to_win {
        Some(battles) => println!("  Mean battles (win): {:>6.1}", battles),
        None => println!("  Mean battles (win):    n/a"),
    }
    println!("  Mean conquests:   {:>8.1}", summary.mean_conquests);

    println!("\n  By mission:");
    for id in 0..=war_engine::types::DRAWABLE_OBJECTIVES {
        let objective = war_engine::types::Objective::from_id(id);
        let of_kind: Vec<_> = results.iter().filter(|r| r.objective == objective).collect();
        if of_kind.is_empty() {
            continue;
        }
        let won = of_kind.iter().filter(|r| r.victory).count();
        println!("    {:<28} {:>4}/{:<4}", objective.title(), won, of_kind.len());
    }
    Ok(())
}
