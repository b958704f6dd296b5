//! AI decision layer.
//!
//! Strategies are trait-based, selected at construction time by a
//! [`Difficulty`] tag:
//! - [`EasyStrategy`]: ranks plays by how *many* cards they would
//!   collect, discards its highest values.
//! - [`MediumStrategy`]: ranks plays by the *value* they would collect,
//!   searches discard pairs against the players' actual piles.
//! - [`HardStrategy`]: greedy minimum-value play, discard search with a
//!   pessimistic estimate of what opponents may still collect.
//!
//! Every evaluation goes through [`Parade::simulate_play`], so choosing
//! a move never mutates game state; strategies return hand indices and
//! leave the actual mutation to the turn orchestration layer.

mod easy;
mod hard;
mod medium;

pub use easy::EasyStrategy;
pub use hard::HardStrategy;
pub use medium::MediumStrategy;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Colour, Player, PlayerId};
use crate::parade::Parade;

/// A card-choosing policy for one seat.
///
/// ## Contract
///
/// - `choose_card` is called with a non-empty hand and returns an index
///   into it; the hand is not modified.
/// - `choose_discards` is called with a hand of at least two cards and
///   returns two distinct indices into it, both interpreted against
///   the hand as passed.
pub trait Strategy: Send + Sync {
    /// Pick the hand index to play against the current parade.
    fn choose_card(&self, hand: &[Card], parade: &Parade) -> usize;

    /// Pick two distinct hand indices to discard at game end.
    fn choose_discards(&self, hand: &[Card], players: &[Player], me: PlayerId) -> [usize; 2];
}

/// Difficulty tag selecting a [`Strategy`] implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Build the strategy for this difficulty.
    #[must_use]
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(EasyStrategy),
            Difficulty::Medium => Box::new(MediumStrategy),
            Difficulty::Hard => Box::new(HardStrategy),
        }
    }
}

/// Unrecognised difficulty name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected easy, medium, or hard)")]
pub struct ParseDifficultyError(String);

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Sum of values a play would collect; the Medium/Hard cost oracle.
pub(crate) fn simulated_value(parade: &Parade, candidate: &Card) -> u32 {
    parade
        .simulate_play(candidate)
        .iter()
        .map(|c| u32::from(c.value()))
        .sum()
}

/// Exhaustive discard-pair search shared by Medium and Hard.
///
/// For every unordered pair of hand indices, scores the hypothetical
/// pile (current collected plus the rest of the hand) under the
/// majority rule: a colour counts as flipped for us when no opponent's
/// collected count exceeds ours. `opponent_estimate` is added to every
/// opponent colour count first: 0 models opponents as they stand
/// (Medium), 2 is Hard's pessimistic guess of what they may still
/// collect. Returns the pair with the lowest post-flip total, first
/// minimum winning ties.
pub(crate) fn best_discard_pair(
    hand: &[Card],
    players: &[Player],
    me: PlayerId,
    opponent_estimate: usize,
) -> [usize; 2] {
    debug_assert!(hand.len() >= 2, "discard search needs at least two cards");

    let my_collected: &[Card] = players
        .iter()
        .find(|p| p.id() == me)
        .map_or(&[], |p| p.collected());

    // Opponent colour counts are independent of the pair under test.
    let opponent_counts: Vec<FxHashMap<Colour, usize>> = players
        .iter()
        .filter(|p| p.id() != me)
        .map(|p| {
            let mut counts = FxHashMap::default();
            for card in p.collected() {
                *counts.entry(card.colour()).or_insert(0) += 1;
            }
            for colour in Colour::ALL {
                *counts.entry(colour).or_insert(0) += opponent_estimate;
            }
            counts
        })
        .collect();

    let mut best = [0, 1];
    let mut min_total = u32::MAX;

    for i in 0..hand.len() {
        for j in i + 1..hand.len() {
            let kept = hand
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, card)| card);
            let pile: Vec<&Card> = my_collected.iter().chain(kept).collect();

            let mut my_counts: FxHashMap<Colour, usize> = FxHashMap::default();
            for card in &pile {
                *my_counts.entry(card.colour()).or_insert(0) += 1;
            }

            let mut total = 0u32;
            for colour in Colour::ALL {
                let mine = my_counts.get(&colour).copied().unwrap_or(0);
                let flipped = !opponent_counts
                    .iter()
                    .any(|counts| counts.get(&colour).copied().unwrap_or(0) > mine);

                for card in pile.iter().filter(|c| c.colour() == colour) {
                    total += if flipped { 1 } else { u32::from(card.value()) };
                }
            }

            if total < min_total {
                min_total = total;
                best = [i, j];
            }
        }
    }

    best
}
