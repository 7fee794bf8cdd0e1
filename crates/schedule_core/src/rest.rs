//! Rest-set selection: deciding who sits out a round.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::PlayerId;

/// Pick `quota` players to rest this round.
///
/// Players who have played the most rounds rest first. Within one
/// play-count level the order is randomized; a deterministic order here
/// (say, lowest id first) would bias the whole schedule towards resting
/// the same players in the same rounds. The rng is injected so searches
/// stay reproducible under a fixed seed.
///
/// `play_order` is the round's (rounds_played, player) list sorted
/// ascending. Returns fewer than `quota` players only when the roster
/// itself is smaller than the quota.
pub fn select_resting<R: Rng>(
    play_order: &[(u32, PlayerId)],
    quota: usize,
    rng: &mut R,
) -> BTreeSet<PlayerId> {
    let mut resting = BTreeSet::new();
    if play_order.is_empty() || quota == 0 {
        return resting;
    }

    let min_played = play_order[0].0;
    let max_played = play_order[play_order.len() - 1].0;

    let mut shuffled = play_order.to_vec();
    shuffled.shuffle(rng);

    let mut level = max_played;
    'levels: loop {
        for &(played, player) in &shuffled {
            if played == level {
                resting.insert(player);
                if resting.len() >= quota {
                    break 'levels;
                }
            }
        }
        if level == min_played {
            break;
        }
        level -= 1;
    }

    resting
}
