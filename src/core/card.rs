//! Cards and colours.
//!
//! ## Colour
//!
//! The fixed six-colour enumeration. The deck holds one card per
//! (colour, value) combination, so `Colour::ALL` doubles as the
//! iteration order for deterministic grouping.
//!
//! ## Card
//!
//! A card is a small value type: an immutable colour plus a value that
//! is mutated exactly once, during scoring, when the card joins a
//! majority flip. Cards are owned by exactly one container (deck,
//! parade, a hand, a collected pile) at any time; they move between
//! containers, they are not shared.

use serde::{Deserialize, Serialize};

/// The six card colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    Blue,
    Green,
    Grey,
    Orange,
    Purple,
    Red,
}

impl Colour {
    /// Number of colours in the game.
    pub const COUNT: usize = 6;

    /// All colours, in their canonical order.
    pub const ALL: [Colour; Colour::COUNT] = [
        Colour::Blue,
        Colour::Green,
        Colour::Grey,
        Colour::Orange,
        Colour::Purple,
        Colour::Red,
    ];
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Colour::Blue => "Blue",
            Colour::Green => "Green",
            Colour::Grey => "Grey",
            Colour::Orange => "Orange",
            Colour::Purple => "Purple",
            Colour::Red => "Red",
        };
        write!(f, "{}", name)
    }
}

/// A single card.
///
/// `value` ranges over `0..cards_per_color`. The only mutation a card
/// ever undergoes is [`Card::flip`], which forces its value to 1 at
/// scoring time.
///
/// ```
/// use parade_engine::core::{Card, Colour};
///
/// let mut card = Card::new(Colour::Red, 7);
/// assert_eq!(format!("{}", card), "Red 7");
///
/// card.flip();
/// assert_eq!(card.value(), 1);
/// assert_eq!(format!("{}", card), "FLIPPED 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    colour: Colour,
    value: u8,
    flipped: bool,
}

impl Card {
    /// Create a new face-value card.
    #[must_use]
    pub fn new(colour: Colour, value: u8) -> Self {
        Self {
            colour,
            value,
            flipped: false,
        }
    }

    /// The card's colour. Never changes.
    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// The card's current value.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Has this card been flipped during scoring?
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Flip the card: its value becomes 1 for the final tally.
    ///
    /// Called only by scoring, on cards in a collected pile whose owner
    /// holds the majority of the card's colour.
    pub fn flip(&mut self) {
        self.value = 1;
        self.flipped = true;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.flipped {
            write!(f, "FLIPPED {}", self.value)
        } else {
            write!(f, "{} {}", self.colour, self.value)
        }
    }
}
