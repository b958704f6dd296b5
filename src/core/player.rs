//! Player identification and per-player card containers.
//!
//! ## PlayerId
//!
//! Type-safe player identifier; turn order fixes the id at game
//! construction.
//!
//! ## Player
//!
//! A player owns two containers: an ordered hand (order is
//! display-significant, index-addressed by the turn interface) and an
//! unordered collected pile that only grows during play. At scoring
//! time some collected cards are flipped in place.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, Colour};

/// Player identifier. Indices are 0-based and double as turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player: id, display name, hand, and collected pile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vec<Card>,
    collected: Vec<Card>,
}

impl Player {
    /// Create a player with empty containers.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            collected: Vec::new(),
        }
    }

    /// The player's id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hand, in display order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The collected pile.
    #[must_use]
    pub fn collected(&self) -> &[Card] {
        &self.collected
    }

    /// Add a drawn card to the end of the hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove and return the card at `index`.
    ///
    /// Callers validate the index first; an out-of-bounds index is a
    /// caller bug and panics.
    pub fn remove_from_hand(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    /// Take the entire hand, leaving it empty.
    pub fn take_hand(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    /// Move cards into the collected pile.
    pub fn add_collected<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.collected.extend(cards);
    }

    /// Number of distinct colours in the collected pile.
    #[must_use]
    pub fn collected_colour_count(&self) -> usize {
        self.collected
            .iter()
            .map(Card::colour)
            .collect::<FxHashSet<Colour>>()
            .len()
    }

    /// Count collected cards of one colour.
    #[must_use]
    pub fn collected_of_colour(&self, colour: Colour) -> usize {
        self.collected.iter().filter(|c| c.colour() == colour).count()
    }

    /// Flip every collected card of `colour` to value 1.
    ///
    /// Scoring-time mutation; a no-op for colours the player never
    /// collected.
    pub(crate) fn flip_colour(&mut self, colour: Colour) {
        for card in &mut self.collected {
            if card.colour() == colour {
                card.flip();
            }
        }
    }

    /// Sum of collected card values (after any flips).
    #[must_use]
    pub fn collected_value(&self) -> u32 {
        self.collected.iter().map(|c| u32::from(c.value())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p2 = PlayerId::new(2);
        assert_eq!(p2.index(), 2);
        assert_eq!(format!("{}", p2), "Player 2");
    }

    #[test]
    fn test_hand_operations_preserve_order() {
        let mut player = Player::new(PlayerId::new(0), "Alice");
        player.add_to_hand(Card::new(Colour::Red, 1));
        player.add_to_hand(Card::new(Colour::Blue, 2));
        player.add_to_hand(Card::new(Colour::Green, 3));

        let removed = player.remove_from_hand(1);
        assert_eq!(removed, Card::new(Colour::Blue, 2));
        assert_eq!(
            player.hand(),
            &[Card::new(Colour::Red, 1), Card::new(Colour::Green, 3)]
        );
    }

    #[test]
    fn test_take_hand_empties_hand() {
        let mut player = Player::new(PlayerId::new(0), "Alice");
        player.add_to_hand(Card::new(Colour::Red, 1));
        player.add_to_hand(Card::new(Colour::Blue, 2));

        let taken = player.take_hand();
        assert_eq!(taken.len(), 2);
        assert!(player.hand().is_empty());
    }

    #[test]
    fn test_collected_colour_count() {
        let mut player = Player::new(PlayerId::new(1), "Bob");
        assert_eq!(player.collected_colour_count(), 0);

        player.add_collected([
            Card::new(Colour::Red, 1),
            Card::new(Colour::Red, 4),
            Card::new(Colour::Blue, 0),
        ]);
        assert_eq!(player.collected_colour_count(), 2);
        assert_eq!(player.collected_of_colour(Colour::Red), 2);
        assert_eq!(player.collected_of_colour(Colour::Grey), 0);
    }

    #[test]
    fn test_flip_colour_only_touches_that_colour() {
        let mut player = Player::new(PlayerId::new(1), "Bob");
        player.add_collected([
            Card::new(Colour::Red, 5),
            Card::new(Colour::Blue, 7),
            Card::new(Colour::Red, 0),
        ]);

        player.flip_colour(Colour::Red);

        let collected = player.collected();
        assert!(collected[0].is_flipped());
        assert_eq!(collected[0].value(), 1);
        assert!(!collected[1].is_flipped());
        assert_eq!(collected[1].value(), 7);
        assert!(collected[2].is_flipped());
        assert_eq!(collected[2].value(), 1);
    }

    #[test]
    fn test_collected_value_after_flip() {
        let mut player = Player::new(PlayerId::new(1), "Bob");
        player.add_collected([
            Card::new(Colour::Red, 5),
            Card::new(Colour::Blue, 7),
            Card::new(Colour::Red, 0),
        ]);
        assert_eq!(player.collected_value(), 12);

        player.flip_colour(Colour::Red);
        assert_eq!(player.collected_value(), 9);
    }
}
