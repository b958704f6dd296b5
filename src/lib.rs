//! # parade-engine
//!
//! Rules engine and heuristic AI for the Parade card game.
//!
//! A fixed deck feeds a communal card sequence (the parade); each turn
//! a player appends a card from their hand and, by a positional/colour
//! rule, collects some of the parade's older cards into a private
//! pile. An end trigger starts the last round, hands are discarded
//! down to two cards, and the lowest post-flip score wins.
//!
//! ## Design Principles
//!
//! 1. **The removal rule is one routine**: the real play path and the
//!    AI's simulation share it, so previews can never disagree with
//!    what a play actually does.
//!
//! 2. **Simulation never mutates**: the parade is a persistent
//!    sequence; candidate moves are evaluated against O(1) snapshots.
//!
//! 3. **The core validates, the frontend prompts**: every hand index
//!    is checked before any mutation, and rejected moves leave the
//!    state untouched. Rendering, input, and pacing live outside this
//!    crate.
//!
//! ## Modules
//!
//! - `core`: cards, colours, deck, players, configuration, RNG
//! - `parade`: the shared sequence and its removal rule
//! - `game`: turn/phase state machine, scoring, auto-play driver
//! - `ai`: the three strategy tiers

pub mod ai;
pub mod core;
pub mod game;
pub mod parade;

// Re-export commonly used types
pub use crate::core::{Card, Colour, Deck, GameConfig, GameRng, Player, PlayerId};

pub use crate::parade::{Collected, Parade};

pub use crate::game::{
    AutoGame, DiscardOutcome, GameError, GameReport, GameState, Phase, PlayerScore, Scoreboard,
    TurnOutcome,
};

pub use crate::ai::{
    Difficulty, EasyStrategy, HardStrategy, MediumStrategy, ParseDifficultyError, Strategy,
};
