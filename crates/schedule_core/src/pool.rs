//! The ranked, consumable pool of candidate teams.
//!
//! Every distinct team that could ever be fielded is enumerated up front
//! and ordered by how internally balanced it is (spread ascending). Rounds
//! draw from the front of this ranking, and a team that makes it into the
//! schedule is removed for good: no grouping plays together twice in a
//! tournament.

use itertools::Itertools;
use std::collections::HashSet;

use crate::params::ScheduleParams;
use crate::types::{PlayerId, Team};

/// Priority list of candidate teams, most balanced first.
///
/// The ranking only affects selection order, never eligibility. Ties on
/// spread fall back to lexicographic member order, so the ranking is total
/// and reproducible.
#[derive(Debug, Clone)]
pub struct TeamPool {
    ranked: Vec<Team>,
}

impl TeamPool {
    /// Enumerate all `team_size`-subsets of the roster. `team_size == 1`
    /// degenerates to one singleton team per player, each with spread 0.
    pub fn new(params: &ScheduleParams) -> Self {
        let mut ranked: Vec<Team> = params
            .players()
            .combinations(params.team_size as usize)
            .map(Team::new)
            .collect();
        ranked.sort_by(|a, b| a.spread().cmp(&b.spread()).then_with(|| a.cmp(b)));
        Self { ranked }
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// The highest-ranked remaining team that contains `player` and none of
    /// the players in `used`. Does not consume the team; the round builder
    /// decides which selections are kept.
    pub fn first_available(&self, player: PlayerId, used: &HashSet<PlayerId>) -> Option<&Team> {
        self.ranked
            .iter()
            .find(|team| team.contains(player) && team.members().iter().all(|m| !used.contains(m)))
    }

    /// Permanently remove a team that was fielded. Returns false if the
    /// team was not in the pool (already consumed).
    pub fn consume(&mut self, team: &Team) -> bool {
        match self.ranked.iter().position(|t| t == team) {
            Some(idx) => {
                self.ranked.remove(idx);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn ranked(&self) -> &[Team] {
        &self.ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_of(player_count: u32, team_size: u32) -> TeamPool {
        TeamPool::new(&ScheduleParams {
            courts: 1,
            breaks_per_player: 0,
            player_count,
            rounds: 1,
            team_size,
        })
    }

    fn team(members: &[PlayerId]) -> Team {
        Team::new(members.to_vec())
    }

    #[test]
    fn ranking_orders_by_spread_then_members() {
        let pool = pool_of(4, 2);
        let expected = [
            team(&[1, 2]),
            team(&[2, 3]),
            team(&[3, 4]),
            team(&[1, 3]),
            team(&[2, 4]),
            team(&[1, 4]),
        ];
        assert_eq!(pool.ranked(), &expected);
    }

    #[test]
    fn singleton_pool_has_one_team_per_player() {
        let pool = pool_of(3, 1);
        assert_eq!(pool.len(), 3);
        assert!(pool.ranked().iter().all(|t| t.spread() == 0));
    }

    #[test]
    fn first_available_skips_used_members() {
        let pool = pool_of(4, 2);
        let mut used = HashSet::new();
        assert_eq!(pool.first_available(1, &used), Some(&team(&[1, 2])));

        used.insert(2);
        assert_eq!(pool.first_available(1, &used), Some(&team(&[1, 3])));

        used.insert(3);
        assert_eq!(pool.first_available(1, &used), Some(&team(&[1, 4])));

        used.insert(4);
        assert_eq!(pool.first_available(1, &used), None);
    }

    #[test]
    fn consume_removes_exactly_once() {
        let mut pool = pool_of(4, 2);
        let t = team(&[1, 2]);
        assert!(pool.consume(&t));
        assert!(!pool.consume(&t));
        assert_eq!(pool.len(), 5);

        let used = HashSet::new();
        assert_eq!(pool.first_available(1, &used), Some(&team(&[1, 3])));
    }
}
