//! Scheduling engine for round-robin team tournaments.
//!
//! Given a roster of players, a court count, and a rest target, the engine
//! builds multi-round schedules in which no two players are paired into the
//! same team twice and opposing teams are as evenly matched as the player
//! pool allows. The search is heuristic: many independent randomized
//! schedules are generated and the one with the smallest worst-case skill
//! mismatch is kept.

pub mod balance;
pub mod optimize;
pub mod params;
pub mod pool;
pub mod rest;
pub mod round;
pub mod types;

// Re-export the public surface so callers don't need to spell out modules
pub use balance::pair_matches;
pub use optimize::{generate_schedule, Optimizer, SearchResult};
pub use params::{ParamsError, ScheduleParams};
pub use pool::TeamPool;
pub use rest::select_resting;
pub use round::{build_round, RoundSelection};
pub use types::{Match, PlayerId, Round, Schedule, Team};
