//! Core data types shared by every stage of the scheduling pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player identity. Players are numbered `1..=player_count`.
///
/// A player's skill level is taken to equal its identity value, so ranking
/// by id also ranks by skill. The balancer and the search score both rely
/// on this, so treat it as part of the model rather than a placeholder.
pub type PlayerId = u32;

/// An unordered, fixed-size grouping of players acting as one team.
///
/// Members are kept sorted ascending. That makes equality checks cheap and
/// gives the ranking tie-break (lexicographic member order) for free via
/// the derived `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Team {
    members: Vec<PlayerId>,
}

impl Team {
    pub fn new(mut members: Vec<PlayerId>) -> Self {
        members.sort_unstable();
        Self { members }
    }

    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.members.contains(&player)
    }

    /// Sum of member identities; the skill proxy used for opponent balancing.
    pub fn skill(&self) -> u32 {
        self.members.iter().sum()
    }

    /// Max minus min member identity; the within-team balance proxy used to
    /// rank candidate teams.
    pub fn spread(&self) -> u32 {
        match (self.members.first(), self.members.last()) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }
}

impl fmt::Display for Team {
    /// Renders as a member tuple, e.g. `(1, 4)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.members.iter().map(|id| id.to_string()).collect();
        write!(f, "({})", ids.join(", "))
    }
}

/// Two teams scheduled against each other within one round.
///
/// The balancer stores the lower-skill side as `team_a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub team_a: Team,
    pub team_b: Team,
}

impl Match {
    /// Absolute skill gap between the two sides.
    pub fn differential(&self) -> u32 {
        self.team_a.skill().abs_diff(self.team_b.skill())
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.team_a, self.team_b)
    }
}

/// One scheduled time-slot: the matches being played plus who sits out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub matches: Vec<Match>,
    /// Resting players, ascending by id.
    pub resting: Vec<PlayerId>,
}

impl Round {
    /// Every player appearing in one of this round's matches.
    pub fn playing(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.matches.iter().flat_map(|m| {
            m.team_a
                .members()
                .iter()
                .chain(m.team_b.members())
                .copied()
        })
    }
}

/// A complete tournament schedule, rounds in playing order.
///
/// Round numbers are 1-indexed: `rounds[0]` is round 1. A schedule is built
/// once and never mutated afterwards; the optimizer either keeps it or
/// throws it away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub rounds: Vec<Round>,
}

impl Schedule {
    /// The largest skill differential of any match anywhere in the
    /// schedule; the quantity the search minimizes. Zero for a schedule
    /// with no matches.
    pub fn worst_differential(&self) -> u32 {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .map(Match::differential)
            .max()
            .unwrap_or(0)
    }
}
