//! Schedule generator CLI.
//!
//! Builds a balanced round-robin schedule and reports it three ways: a
//! console table, a CSV file, and (optionally) JSON.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use schedule_core::Optimizer;
use scheduler::{print_table, write_csv, write_json, CliArgs, RunConfig};

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let config = RunConfig::load(&args)?;
    let params = config.params();

    // A fixed seed reproduces a schedule exactly; otherwise draw one and
    // report it so a good schedule can be regenerated later.
    let seed = config.seed.unwrap_or_else(rand::random);

    println!("scheduler v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "Players: {}, team size: {}, courts: {}, rounds: {}",
        params.player_count, params.team_size, params.courts, params.rounds
    );
    println!(
        "Rest target: {} per player ({} per round)",
        params.breaks_per_player,
        params.breaks_per_round()
    );
    println!("Trials: {}, seed: {}", config.trials, seed);
    println!();

    let optimizer = Optimizer::new(params, config.trials, seed)?;

    let start = Instant::now();
    let result = optimizer.run();
    let elapsed = start.elapsed();

    print_table(&result.schedule);

    write_csv(&result.schedule, &args.output)?;
    println!();
    println!("CSV file '{}' created successfully!", args.output.display());

    if let Some(path) = &args.json {
        write_json(&result.schedule, path)?;
        println!("JSON file '{}' created successfully!", path.display());
    }

    println!("-");
    println!("Worst skill differential: {}", result.score);
    println!(
        "The search ran {} trials in {:.3} seconds.",
        result.trials,
        elapsed.as_secs_f64()
    );

    Ok(())
}
