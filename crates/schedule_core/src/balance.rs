//! Opponent pairing within a round.

use itertools::Itertools;

use crate::types::{Match, Team};

/// Pair a round's teams into matches so opposing sides are as evenly
/// matched as possible.
///
/// Teams are sorted ascending by skill (ties by member order) and adjacent
/// entries paired: 1st vs 2nd, 3rd vs 4th, and so on. Among adjacent
/// pairings of a fixed team set this minimizes the largest single gap; it
/// is not a global minimax over arbitrary pairings, which is fine for a
/// heuristic search that regenerates whole schedules anyway.
///
/// The round builder guarantees an even team count, so every team lands in
/// exactly one match.
pub fn pair_matches(mut teams: Vec<Team>) -> Vec<Match> {
    teams.sort_by(|a, b| a.skill().cmp(&b.skill()).then_with(|| a.cmp(b)));
    teams
        .into_iter()
        .tuples()
        .map(|(team_a, team_b)| Match { team_a, team_b })
        .collect()
}
