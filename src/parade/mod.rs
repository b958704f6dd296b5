//! The parade: the shared ordered card sequence and its removal rule.
//!
//! ## The removal rule
//!
//! When a card of value `v` is appended, the trailing `v + 1` cards
//! (the played card included) form the **safe zone** and are never
//! touched. Every card strictly before the safe zone is examined in
//! left-to-right order and collected if it shares the played card's
//! colour or its value is `<= v`; survivors keep their relative order.
//!
//! Two edge cases are part of the rule, not accidents:
//! - a value-0 card's safe zone is just itself, so the whole rest of
//!   the parade is examined (same-colour and value-0 cards leave);
//! - a card whose value is at least the parade's size collects
//!   nothing, because the safe zone covers everything.
//!
//! ## Simulation
//!
//! [`Parade::simulate_play`] runs the identical computation on an O(1)
//! clone of the persistent sequence. It is the pure cost oracle the AI
//! layer and move previews are built on, and it is guaranteed to
//! return exactly what a subsequent [`Parade::apply_play`] with the
//! same card would collect. Both paths share one private routine so
//! they cannot drift apart.

use im::Vector;
use smallvec::SmallVec;

use crate::core::Card;

/// Cards removed from the parade by a single play, in scan order.
pub type Collected = SmallVec<[Card; 8]>;

/// The shared face-up card sequence.
///
/// Backed by a persistent vector so that simulation can snapshot the
/// sequence in O(1) without ever touching the real state.
#[derive(Clone, Debug, Default)]
pub struct Parade {
    cards: Vector<Card>,
}

impl Parade {
    /// Create an empty parade.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the end of the parade.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Number of cards currently in the parade.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the parade empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards, oldest first. Read-only view for display.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Run the removal rule for `played`.
    ///
    /// Precondition: `played` has already been appended as the last
    /// element (the game layer appends before calling). Returns the
    /// collected cards in scan order and mutates the parade to the
    /// surviving sequence.
    pub fn apply_play(&mut self, played: &Card) -> Collected {
        debug_assert!(
            self.cards.last().is_some_and(|last| {
                last.colour() == played.colour() && last.value() == played.value()
            }),
            "apply_play called before the played card was appended"
        );

        let (remaining, collected) = split_on_play(&self.cards, played);
        self.cards = remaining;
        collected
    }

    /// Compute what playing `candidate` would collect, without
    /// modifying the parade.
    ///
    /// Appends `candidate` to a throwaway clone and runs the same
    /// routine as [`Parade::apply_play`].
    #[must_use]
    pub fn simulate_play(&self, candidate: &Card) -> Collected {
        let mut copy = self.cards.clone();
        copy.push_back(candidate.clone());
        let (_, collected) = split_on_play(&copy, candidate);
        collected
    }
}

/// The removal rule itself, shared by the real and simulated paths.
///
/// `cards` includes the played card as its last element.
fn split_on_play(cards: &Vector<Card>, played: &Card) -> (Vector<Card>, Collected) {
    let n = cards.len();
    let v = played.value() as usize;

    let mut remaining = Vector::new();
    let mut collected = Collected::new();

    if n > v || (v == 0 && n > 0) {
        for (pos, card) in cards.iter().enumerate() {
            // Safe zone: the trailing v + 1 cards are always kept.
            let examined = pos + v + 1 < n;
            if examined && (card.colour() == played.colour() || card.value() as usize <= v) {
                collected.push(card.clone());
            } else {
                remaining.push_back(card.clone());
            }
        }
    } else {
        remaining = cards.clone();
    }

    (remaining, collected)
}
