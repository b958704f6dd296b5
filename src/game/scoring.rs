//! End-game scoring: majority flips, totals, winner selection.
//!
//! For each colour, the players holding the most cards of that colour
//! flip them all to 1 point. With more than two players every player
//! tied for the maximum flips simultaneously; with exactly two players
//! a flip needs a lead of at least two cards. Scores are the summed
//! values of the collected pile after flips, and the lowest score
//! wins; ties go to the smaller pile, then to the earlier seat.

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Colour, Player, PlayerId};

/// One player's final tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Which player.
    pub player: PlayerId,
    /// Summed collected values after flips. Lower is better.
    pub score: u32,
    /// Size of the collected pile, the first tie-breaker.
    pub cards_collected: usize,
}

/// Final standings, in seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    entries: Vec<PlayerScore>,
}

impl Scoreboard {
    /// All entries, in seat order.
    #[must_use]
    pub fn entries(&self) -> &[PlayerScore] {
        &self.entries
    }

    /// One player's score, if they played.
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.score)
    }

    /// The winning player.
    ///
    /// Lowest score wins; equal scores fall back to the smaller
    /// collected pile, and a residual tie goes to the earlier seat so
    /// the result is always deterministic.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        self.entries
            .iter()
            .min_by_key(|e| (e.score, e.cards_collected, e.player.index()))
            .expect("scoreboard is never empty")
            .player
    }
}

/// Apply the flip rule and tally every player.
///
/// Counts are taken before any flipping, then flips mutate the
/// collected piles in place (flipping never changes a card's colour,
/// so the counts stay valid throughout).
pub(crate) fn score_players(players: &mut [Player]) -> Scoreboard {
    assert!(players.len() >= 2, "scoring needs at least 2 players");

    let mut colour_counts: FxHashMap<Colour, Vec<usize>> = FxHashMap::default();
    for colour in Colour::ALL {
        colour_counts.insert(
            colour,
            players.iter().map(|p| p.collected_of_colour(colour)).collect(),
        );
    }

    if players.len() > 2 {
        // Regular rules: every player tied for the maximum flips.
        for colour in Colour::ALL {
            let counts = &colour_counts[&colour];
            let max = counts.iter().copied().max().unwrap_or(0);
            for (i, player) in players.iter_mut().enumerate() {
                if counts[i] == max {
                    player.flip_colour(colour);
                }
            }
        }
    } else {
        // Two-player rules: a flip needs a lead of more than one card.
        for colour in Colour::ALL {
            let counts = &colour_counts[&colour];
            if counts[0] > counts[1] + 1 {
                players[0].flip_colour(colour);
            } else if counts[1] > counts[0] + 1 {
                players[1].flip_colour(colour);
            }
        }
    }

    let entries: Vec<PlayerScore> = players
        .iter()
        .map(|p| PlayerScore {
            player: p.id(),
            score: p.collected_value(),
            cards_collected: p.collected().len(),
        })
        .collect();

    for entry in &entries {
        debug!(
            "{} scored {} from {} card(s)",
            entry.player, entry.score, entry.cards_collected
        );
    }

    Scoreboard { entries }
}
