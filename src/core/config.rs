//! Game configuration.
//!
//! `GameConfig` bundles the three integers the core consumes at
//! construction time: parade size, hand size, and cards per colour.
//! Loading configuration from disk belongs to the embedding frontend;
//! the core only offers [`GameConfig::from_properties`], which accepts
//! whatever key/value pairs the frontend parsed and falls back to the
//! documented defaults for anything missing or unparsable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::card::Colour;

/// Default number of cards dealt into the parade at setup.
pub const DEFAULT_PARADE_SIZE: usize = 6;
/// Default starting hand size.
pub const DEFAULT_HAND_SIZE: usize = 5;
/// Default number of cards per colour (values `0..11`).
pub const DEFAULT_CARDS_PER_COLOR: u8 = 11;

/// Construction parameters for a game.
///
/// ```
/// use parade_engine::core::GameConfig;
///
/// let config = GameConfig::new().with_parade_size(4).with_hand_size(3);
/// assert_eq!(config.parade_size, 4);
/// assert_eq!(config.cards_per_color, 11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt into the parade at setup.
    pub parade_size: usize,

    /// Cards dealt to each player at setup.
    pub hand_size: usize,

    /// Cards per colour; card values range over `0..cards_per_color`.
    pub cards_per_color: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            parade_size: DEFAULT_PARADE_SIZE,
            hand_size: DEFAULT_HAND_SIZE,
            cards_per_color: DEFAULT_CARDS_PER_COLOR,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default values (6, 5, 11).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial parade size.
    #[must_use]
    pub fn with_parade_size(mut self, size: usize) -> Self {
        self.parade_size = size;
        self
    }

    /// Set the initial hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the number of cards per colour.
    #[must_use]
    pub fn with_cards_per_color(mut self, count: u8) -> Self {
        assert!(count > 0, "Must have at least 1 card per colour");
        self.cards_per_color = count;
        self
    }

    /// Build a configuration from string key/value pairs.
    ///
    /// Recognised keys: `parade_size`, `hand_size`, `cards_per_color`.
    /// A missing or unparsable value falls back to its default; this is
    /// never an error.
    pub fn from_properties<'a, I>(properties: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in properties {
            match key {
                "parade_size" => config.parade_size = parse_or(value, config.parade_size),
                "hand_size" => config.hand_size = parse_or(value, config.hand_size),
                "cards_per_color" => {
                    let parsed = parse_or(value, config.cards_per_color);
                    if parsed > 0 {
                        config.cards_per_color = parsed;
                    }
                }
                _ => {}
            }
        }
        config
    }

    /// Total deck size for this configuration.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        Colour::COUNT * self.cards_per_color as usize
    }
}

fn parse_or<T: FromStr>(value: &str, default: T) -> T {
    value.trim().parse().unwrap_or(default)
}
