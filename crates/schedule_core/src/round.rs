//! Greedy per-round team assembly.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::pool::TeamPool;
use crate::types::{PlayerId, Team};

/// What one round of selection produced: the teams kept for play (always
/// an even count) and every player occupied this round, resting players
/// included.
#[derive(Debug, Clone)]
pub struct RoundSelection {
    pub teams: Vec<Team>,
    pub used: HashSet<PlayerId>,
}

/// Assemble up to `max_teams` teams for one round.
///
/// Walks `play_order` (ascending by rounds played, so the least-played
/// players get first pick) and gives each unplaced, non-resting player the
/// highest-ranked pooled team whose members are all still free. The walk
/// continues from where it left off rather than restarting after each
/// acceptance.
///
/// If the selection ends on an odd team count, the last-accepted team is
/// dropped and its members released; they fold into the round's effective
/// rest. Teams that stay selected are consumed from the pool and can never
/// be fielded again. An exhausted pool simply yields a short round.
pub fn build_round(
    play_order: &[(u32, PlayerId)],
    pool: &mut TeamPool,
    resting: &BTreeSet<PlayerId>,
    max_teams: usize,
) -> RoundSelection {
    let mut used: HashSet<PlayerId> = resting.iter().copied().collect();
    let mut teams: Vec<Team> = Vec::with_capacity(max_teams);

    for &(_, player) in play_order {
        if teams.len() >= max_teams {
            break;
        }
        if used.contains(&player) {
            continue;
        }
        if let Some(team) = pool.first_available(player, &used).cloned() {
            for &member in team.members() {
                used.insert(member);
            }
            teams.push(team);
        }
    }

    if teams.len() % 2 == 1 {
        if let Some(dropped) = teams.pop() {
            debug!("dropping odd team {dropped} to keep matches paired");
            for member in dropped.members() {
                used.remove(member);
            }
        }
    }

    if teams.len() < max_teams {
        debug!(
            "short round: {} of {} teams (pool has {} left)",
            teams.len(),
            max_teams,
            pool.len()
        );
    }

    for team in &teams {
        pool.consume(team);
    }

    RoundSelection { teams, used }
}
