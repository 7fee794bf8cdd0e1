//! Monte-Carlo search over whole schedules.
//!
//! One trial builds one complete schedule round by round; the search runs
//! many independent trials and keeps the schedule whose worst single match
//! is least lopsided. Trials share nothing but the immutable parameters,
//! so they are evaluated in parallel.

use std::collections::{HashMap, HashSet};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::balance::pair_matches;
use crate::params::{ParamsError, ScheduleParams};
use crate::pool::TeamPool;
use crate::rest::select_resting;
use crate::round::build_round;
use crate::types::{PlayerId, Round, Schedule};

/// Build one complete candidate schedule: fresh team pool, fresh play
/// counters, then rest allocation, team selection, and opponent pairing
/// for each round in order.
///
/// Rounds are strictly sequential within a trial; each round observes the
/// pool consumption and play counts left by the previous one.
pub fn generate_schedule<R: Rng>(params: &ScheduleParams, rng: &mut R) -> Schedule {
    let mut pool = TeamPool::new(params);
    let mut rounds_played: HashMap<PlayerId, u32> = params.players().map(|p| (p, 0)).collect();
    let quota = params.breaks_per_round() as usize;
    let max_teams = params.teams_per_round() as usize;

    let mut rounds = Vec::with_capacity(params.rounds as usize);
    for _ in 0..params.rounds {
        let mut play_order: Vec<(u32, PlayerId)> = params
            .players()
            .map(|p| (rounds_played.get(&p).copied().unwrap_or(0), p))
            .collect();
        play_order.sort_unstable();

        let resting = select_resting(&play_order, quota, rng);
        let selection = build_round(&play_order, &mut pool, &resting, max_teams);

        for team in &selection.teams {
            for &member in team.members() {
                *rounds_played.entry(member).or_insert(0) += 1;
            }
        }

        rounds.push(Round {
            matches: pair_matches(selection.teams),
            resting: resting.into_iter().collect(),
        });
    }

    Schedule { rounds }
}

/// Outcome of a search: the winning schedule and how it was found.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub schedule: Schedule,
    /// Worst-match skill differential of the winner.
    pub score: u32,
    /// Zero-based index of the trial that produced the winner.
    pub winning_trial: usize,
    /// Total trials evaluated.
    pub trials: usize,
}

/// Repeated-trial schedule search.
///
/// Each trial owns a private rng derived from the master seed and its
/// trial index, so results do not depend on how rayon schedules the work:
/// a parallel run and a serial run of the same seed produce the same
/// winner.
pub struct Optimizer {
    params: ScheduleParams,
    trials: usize,
    seed: u64,
}

impl Optimizer {
    pub fn new(params: ScheduleParams, trials: usize, seed: u64) -> Result<Self, ParamsError> {
        params.validate()?;
        if trials == 0 {
            return Err(ParamsError::NoTrials);
        }
        Ok(Self {
            params,
            trials,
            seed,
        })
    }

    fn trial_rng(&self, trial: usize) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(trial as u64))
    }

    /// Run every trial and keep the minimum-score schedule. Ties keep the
    /// earliest trial: candidates are keyed `(score, trial_index)`, which
    /// makes the reduction deterministic under any work splitting.
    pub fn run(&self) -> SearchResult {
        let best = (0..self.trials)
            .into_par_iter()
            .map(|trial| {
                let mut rng = self.trial_rng(trial);
                let schedule = generate_schedule(&self.params, &mut rng);
                (schedule.worst_differential(), trial, schedule)
            })
            .min_by_key(|&(score, trial, _)| (score, trial))
            .expect("trial count is validated to be at least 1");

        let (score, winning_trial, mut schedule) = best;
        debug!("trial {winning_trial} won with worst differential {score}");

        reconcile_resting(&mut schedule, &self.params);
        SearchResult {
            schedule,
            score,
            winning_trial,
            trials: self.trials,
        }
    }
}

/// Rebuild each round's rest set from its final match composition.
///
/// The builder's running rest accounting can drift from the finished
/// round when an odd team was dropped; whoever appears in no match is
/// resting, by definition.
fn reconcile_resting(schedule: &mut Schedule, params: &ScheduleParams) {
    for round in &mut schedule.rounds {
        let playing: HashSet<PlayerId> = round.playing().collect();
        round.resting = params.players().filter(|p| !playing.contains(p)).collect();
    }
}
