//! Tournament parameters and the per-round quantities derived from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::PlayerId;

/// Shape of the tournament being scheduled.
///
/// All fields are fixed for the lifetime of a search; the derived values
/// (`breaks_per_round`, `teams_per_round`) are computed once per schedule
/// and stay constant across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleParams {
    /// Courts available per round; each court hosts one match.
    pub courts: u32,
    /// How many rounds each player should sit out over the whole tournament.
    pub breaks_per_player: u32,
    /// Roster size; players are identified as `1..=player_count`.
    pub player_count: u32,
    /// Number of rounds to schedule.
    pub rounds: u32,
    /// Players per team (2 for a doubles format).
    pub team_size: u32,
}

/// Rejected parameter combinations. These are caller misuse, not runtime
/// conditions: a running search never produces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("at least one court is required")]
    NoCourts,
    #[error("at least one round is required")]
    NoRounds,
    #[error("team size must be at least 1")]
    ZeroTeamSize,
    #[error("{player_count} players cannot field two teams of {team_size}")]
    TooFewPlayers { player_count: u32, team_size: u32 },
    #[error("at least one trial is required")]
    NoTrials,
}

impl ScheduleParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.courts == 0 {
            return Err(ParamsError::NoCourts);
        }
        if self.rounds == 0 {
            return Err(ParamsError::NoRounds);
        }
        if self.team_size == 0 {
            return Err(ParamsError::ZeroTeamSize);
        }
        if self.player_count < self.team_size * 2 {
            return Err(ParamsError::TooFewPlayers {
                player_count: self.player_count,
                team_size: self.team_size,
            });
        }
        Ok(())
    }

    /// The full roster in ascending id order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        1..=self.player_count
    }

    /// How many players sit out each round so that everyone reaches the
    /// tournament-wide rest target: `ceil(player_count * breaks / rounds)`.
    pub fn breaks_per_round(&self) -> u32 {
        (self.player_count * self.breaks_per_player).div_ceil(self.rounds)
    }

    /// Team count target for one round.
    ///
    /// Capped by court capacity (two teams per court) and by how many full
    /// teams the non-resting players can field; forced even because teams
    /// must pair up into matches.
    pub fn teams_per_round(&self) -> u32 {
        let by_courts = 2 * self.courts;
        let mut by_players =
            self.player_count.saturating_sub(self.breaks_per_round()) / self.team_size;
        if by_players % 2 == 1 {
            by_players -= 1;
        }
        by_courts.min(by_players)
    }
}
