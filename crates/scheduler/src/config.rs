//! Runner configuration: TOML file plus CLI overrides.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use schedule_core::ScheduleParams;

/// Balanced round-robin schedule generator
#[derive(Parser, Debug)]
#[command(name = "scheduler", version, about)]
pub struct CliArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    // --- Overrides ---
    /// Courts available per round
    #[arg(long)]
    pub courts: Option<u32>,

    /// Number of players on the roster
    #[arg(long)]
    pub players: Option<u32>,

    /// Rounds to schedule
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Players per team (2 = doubles)
    #[arg(long)]
    pub team_size: Option<u32>,

    /// Rounds each player should sit out across the tournament
    #[arg(long)]
    pub breaks: Option<u32>,

    /// Independent schedule trials to evaluate
    #[arg(long)]
    pub trials: Option<usize>,

    /// Random seed; omit for a fresh seed each run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the CSV schedule
    #[arg(long, default_value = "matches.csv")]
    pub output: PathBuf,

    /// Also write the winning schedule as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Everything one run needs, with defaults sized for a typical club night:
/// 24 players in doubles teams on 4 courts across 12 rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_courts")]
    pub courts: u32,
    #[serde(default = "default_breaks")]
    pub breaks_per_player: u32,
    #[serde(default = "default_players")]
    pub player_count: u32,
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default = "default_team_size")]
    pub team_size: u32,
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Fixed seed for reproducible schedules
    #[serde(default)]
    pub seed: Option<u64>,
}

// Default value functions
fn default_courts() -> u32 {
    4
}
fn default_breaks() -> u32 {
    2
}
fn default_players() -> u32 {
    24
}
fn default_rounds() -> u32 {
    12
}
fn default_team_size() -> u32 {
    2
}
fn default_trials() -> usize {
    500
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            courts: default_courts(),
            breaks_per_player: default_breaks(),
            player_count: default_players(),
            rounds: default_rounds(),
            team_size: default_team_size(),
            trials: default_trials(),
            seed: None,
        }
    }
}

impl RunConfig {
    /// Load the TOML config when one is given, then apply CLI overrides.
    pub fn load(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?
            }
            None => RunConfig::default(),
        };
        config.apply_cli_overrides(args);
        Ok(config)
    }

    fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(courts) = args.courts {
            self.courts = courts;
        }
        if let Some(players) = args.players {
            self.player_count = players;
        }
        if let Some(rounds) = args.rounds {
            self.rounds = rounds;
        }
        if let Some(team_size) = args.team_size {
            self.team_size = team_size;
        }
        if let Some(breaks) = args.breaks {
            self.breaks_per_player = breaks;
        }
        if let Some(trials) = args.trials {
            self.trials = trials;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
    }

    /// The schedule-shape subset of the config, handed to the core engine.
    pub fn params(&self) -> ScheduleParams {
        ScheduleParams {
            courts: self.courts,
            breaks_per_player: self.breaks_per_player,
            player_count: self.player_count,
            rounds: self.rounds,
            team_size: self.team_size,
        }
    }
}
