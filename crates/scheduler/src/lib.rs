//! Schedule runner for round-robin team tournaments.
//!
//! This crate wraps the `schedule_core` search with everything a user
//! touches:
//! - Loading configuration from a TOML file with CLI overrides
//! - Rendering the winning schedule as a console table
//! - Exporting the schedule to CSV (and reading it back)
//!
//! # Usage
//!
//! ```bash
//! # Schedule 24 players on 4 courts with the built-in defaults
//! cargo run -p scheduler
//!
//! # Smaller club night, reproducible seed
//! cargo run -p scheduler -- --players 10 --courts 2 --rounds 5 --seed 7
//! ```

mod config;
mod export;
mod render;

pub use config::*;
pub use export::*;
pub use render::*;
