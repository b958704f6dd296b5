//! Core leaf types: cards, deck, players, configuration, RNG.

pub mod card;
pub mod config;
pub mod deck;
pub mod player;
pub mod rng;

pub use card::{Card, Colour};
pub use config::{
    GameConfig, DEFAULT_CARDS_PER_COLOR, DEFAULT_HAND_SIZE, DEFAULT_PARADE_SIZE,
};
pub use deck::Deck;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
