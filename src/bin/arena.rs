use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use connect_four::arena::Arena;
use connect_four::config::{AppConfig, Seat};

/// Pit two computer players against each other over many games.
#[derive(Parser)]
#[command(name = "arena", about = "Run Connect Four agent-vs-agent trials")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Red player: random, greedy, minimax or minimax:<depth>
    #[arg(long)]
    red: Option<Seat>,

    /// Yellow player: random, greedy, minimax or minimax:<depth>
    #[arg(long)]
    yellow: Option<Seat>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.arena.games = games;
    }
    if let Some(red) = cli.red {
        app_config.arena.red = red;
    }
    if let Some(yellow) = cli.yellow {
        app_config.arena.yellow = yellow;
    }
    if cli.seed.is_some() {
        app_config.arena.seed = cli.seed;
    }
    app_config.validate().context("validating config")?;

    let mut arena = Arena::from_config(&app_config.arena)?;
    let report = arena
        .run(app_config.arena.games)
        .context("running arena")?;
    info!("arena finished");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
