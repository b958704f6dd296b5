//! The draw deck.
//!
//! One card per (colour, value) combination, shuffled exactly once at
//! construction. Draws advance a cursor; the order is fixed for the
//! rest of the game and exhaustion is a normal transition, not an
//! error.

use serde::{Deserialize, Serialize};

use super::card::{Card, Colour};
use super::rng::GameRng;

/// A shuffled deck with a monotonically advancing draw cursor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build and shuffle a full deck: `cards_per_color` cards of each
    /// of the six colours, valued `0..cards_per_color`.
    #[must_use]
    pub fn new(cards_per_color: u8, rng: &mut GameRng) -> Self {
        assert!(cards_per_color > 0, "Must have at least 1 card per colour");

        let mut cards = Vec::with_capacity(Colour::COUNT * cards_per_color as usize);
        for colour in Colour::ALL {
            for value in 0..cards_per_color {
                cards.push(Card::new(colour, value));
            }
        }

        rng.shuffle(&mut cards);

        Self { cards, cursor: 0 }
    }

    /// Draw the next card, or `None` once the deck is exhausted.
    ///
    /// There is no reshuffling; after the first `None` every further
    /// draw is also `None`.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(card)
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Number of cards drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }

    /// Is the deck exhausted?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.cards.len()
    }
}
