//! Game state: players, deck, parade, and the turn/phase machine.
//!
//! ## Phases
//!
//! `NormalPlay -> LastRoundPending -> DiscardPhase -> Scored`.
//!
//! The last round triggers when the acting player has collected all
//! six colours or the deck is down to its final card. From then on the
//! trigger re-fires on every completed turn, counting up; replacement
//! draws stop after each player has drawn exactly once more, hands
//! shrink, and the discard phase begins once the current hand is down
//! to 3 or 4 cards. After every player discards, scoring flips
//! majorities and the game is done.
//!
//! ## Orchestration
//!
//! [`GameState::play_turn`] performs one complete play for the current
//! player: remove from hand, append to parade, run the removal rule,
//! bank the collected cards, re-evaluate the last-round trigger, and
//! (conditionally) draw a replacement. The caller advances the turn
//! with [`GameState::next_turn`]; during the discard phase it calls
//! [`GameState::apply_discards`] instead. Move choice is the caller's
//! job (a prompt for humans, a [`crate::ai::Strategy`] for bots); the
//! state validates every index before mutating anything.

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Colour, Deck, GameConfig, GameRng, Player, PlayerId};
use crate::parade::Parade;

/// A rejected request against the game state.
///
/// None of these leave the state modified; the caller re-prompts or
/// fixes its driving logic.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A hand index outside the current hand.
    #[error("hand index {index} out of bounds for a hand of {hand_size}")]
    InvalidHandIndex { index: usize, hand_size: usize },

    /// The two discard indices refer to the same card.
    #[error("discard indices must be distinct (both were {index})")]
    DuplicateDiscard { index: usize },

    /// A play was attempted after the game ended.
    #[error("the game is already over")]
    GameOver,

    /// A discard was attempted outside the discard phase.
    #[error("the current player is not in the discard phase")]
    NotInDiscardPhase,

    /// Scores were already calculated for this game.
    #[error("scores have already been calculated")]
    AlreadyScored,
}

/// Coarse game phase, derived from the underlying counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Regular turns; every play draws a replacement.
    NormalPlay,
    /// The end trigger fired; turns continue, draws wind down.
    LastRoundPending,
    /// The current player must discard down to two cards.
    DiscardPhase,
    /// Scores are final.
    Scored,
}

/// What a single play did, in display copies.
///
/// The real cards have already moved (hand to parade, parade to the
/// collected pile, deck to hand); this record exists for renderers and
/// logs.
#[derive(Clone, Debug)]
pub struct TurnOutcome {
    /// Who played.
    pub player: PlayerId,
    /// The card played onto the parade.
    pub played: Card,
    /// Cards the play collected, in scan order.
    pub collected: Vec<Card>,
    /// The replacement draw, if one happened.
    pub drawn: Option<Card>,
}

/// What a discard-phase turn did.
#[derive(Clone, Debug)]
pub struct DiscardOutcome {
    /// Who discarded.
    pub player: PlayerId,
    /// The two cards removed from the game, in removal order.
    pub discarded: [Card; 2],
    /// Display copies of the cards moved into the collected pile.
    pub kept: Vec<Card>,
}

/// Complete state of one game.
pub struct GameState {
    players: Vec<Player>,
    deck: Deck,
    parade: Parade,
    current_player: usize,
    last_round: bool,
    last_round_counter: u32,
    scored: bool,
}

impl GameState {
    /// Set up a game: build and shuffle the deck, seed the parade,
    /// deal every hand, and give the first seat the turn.
    ///
    /// Player count must be 2..=6: the two-player scoring rule and
    /// the six-colour deck bound the range.
    pub fn new<I, S>(names: I, config: &GameConfig, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u8), name))
            .collect();

        assert!(
            (2..=6).contains(&players.len()),
            "Must have 2-6 players, got {}",
            players.len()
        );

        let mut rng = GameRng::new(seed);
        let mut deck = Deck::new(config.cards_per_color, &mut rng);

        let mut parade = Parade::new();
        for _ in 0..config.parade_size {
            if let Some(card) = deck.draw() {
                parade.add_card(card);
            }
        }

        for player in &mut players {
            for _ in 0..config.hand_size {
                if let Some(card) = deck.draw() {
                    player.add_to_hand(card);
                }
            }
        }

        debug!(
            "new game: {} players, {} cards in deck, seed {}",
            players.len(),
            deck.remaining(),
            rng.seed()
        );

        Self {
            players,
            deck,
            parade,
            current_player: 0,
            last_round: false,
            last_round_counter: 0,
            scored: false,
        }
    }

    // === Accessors ===

    /// All players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Index of the current player.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_player
    }

    /// The draw deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The parade.
    #[must_use]
    pub fn parade(&self) -> &Parade {
        &self.parade
    }

    /// Has the last round been triggered?
    #[must_use]
    pub fn is_last_round(&self) -> bool {
        self.last_round
    }

    /// Turns elapsed since (and including) the trigger turn.
    #[must_use]
    pub fn last_round_counter(&self) -> u32 {
        self.last_round_counter
    }

    /// The derived coarse phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.scored {
            Phase::Scored
        } else if self.is_discard_phase() {
            Phase::DiscardPhase
        } else if self.last_round {
            Phase::LastRoundPending
        } else {
            Phase::NormalPlay
        }
    }

    /// True exactly when the current player's hand is 3 or 4 cards.
    ///
    /// The window exists because the final round removes the
    /// replacement draw, shrinking hands one card per turn until the
    /// discard rule (drop to exactly 2) applies.
    #[must_use]
    pub fn is_discard_phase(&self) -> bool {
        let hand_size = self.current_player().hand().len();
        hand_size > 2 && hand_size <= 4
    }

    /// True once every player has had their final turn.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.last_round_counter == self.players.len() as u32 + 1
    }

    /// Advance to the next seat. No skip logic, ever.
    pub fn next_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
    }

    // === Turn orchestration ===

    /// Play the card at `hand_index` for the current player.
    ///
    /// Validates the index, moves the card onto the parade, runs the
    /// removal rule, banks whatever it collected, re-evaluates the
    /// last-round trigger, and draws a replacement unless the final
    /// round has switched draws off. Does not advance the turn.
    pub fn play_turn(&mut self, hand_index: usize) -> Result<TurnOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let hand_size = self.current_player().hand().len();
        if hand_index >= hand_size {
            return Err(GameError::InvalidHandIndex {
                index: hand_index,
                hand_size,
            });
        }

        let actor = self.current_player;
        let played = self.players[actor].remove_from_hand(hand_index);

        self.parade.add_card(played.clone());
        let collected = self.parade.apply_play(&played);
        debug!(
            "{} played {}, collected {} card(s)",
            self.players[actor].id(),
            played,
            collected.len()
        );

        self.players[actor].add_collected(collected.iter().cloned());

        self.check_last_round();

        // One replacement per player after the trigger, then none.
        let drawn = if !self.last_round || (self.last_round_counter == 1 && !self.deck.is_empty())
        {
            let card = self.deck.draw();
            if let Some(card) = &card {
                self.players[actor].add_to_hand(card.clone());
            }
            card
        } else {
            None
        };

        Ok(TurnOutcome {
            player: self.players[actor].id(),
            played,
            collected: collected.into_vec(),
            drawn,
        })
    }

    /// Re-evaluate the last-round trigger against the player who just
    /// acted.
    ///
    /// Once active, the trigger re-fires on every evaluation, so the
    /// counter advances once per remaining turn, including the turn
    /// that first triggered it.
    fn check_last_round(&mut self) {
        let all_colours =
            self.players[self.current_player].collected_colour_count() >= Colour::COUNT;

        if all_colours || self.deck.remaining() <= 1 || self.last_round_counter > 0 {
            self.last_round_counter += 1;
            if !self.last_round {
                debug!(
                    "last round triggered by {} ({})",
                    self.players[self.current_player].id(),
                    if all_colours { "all colours" } else { "deck" },
                );
            }
            self.last_round = true;
        }
    }

    /// Discard two cards for the current player and bank the rest.
    ///
    /// Both indices are interpreted against the hand as it stands at
    /// the call; the higher one is physically removed first so the
    /// lower stays valid. The two discards leave the game entirely;
    /// the remaining hand moves into the collected pile.
    pub fn apply_discards(&mut self, indices: [usize; 2]) -> Result<DiscardOutcome, GameError> {
        if !self.is_discard_phase() {
            return Err(GameError::NotInDiscardPhase);
        }

        let hand_size = self.current_player().hand().len();
        let [a, b] = indices;
        for index in [a, b] {
            if index >= hand_size {
                return Err(GameError::InvalidHandIndex { index, hand_size });
            }
        }
        if a == b {
            return Err(GameError::DuplicateDiscard { index: a });
        }

        let actor = self.current_player;
        let first = self.players[actor].remove_from_hand(a.max(b));
        let second = self.players[actor].remove_from_hand(a.min(b));

        let kept = self.players[actor].take_hand();
        let outcome = DiscardOutcome {
            player: self.players[actor].id(),
            discarded: [first, second],
            kept: kept.clone(),
        };
        self.players[actor].add_collected(kept);

        debug!(
            "{} discarded {} and {}, banked {} card(s)",
            outcome.player,
            outcome.discarded[0],
            outcome.discarded[1],
            outcome.kept.len()
        );

        Ok(outcome)
    }

    /// Deep copy of every collected pile, for display continuity
    /// across the discard phase. Gameplay never reads this.
    #[must_use]
    pub fn snapshot_collected(&self) -> FxHashMap<PlayerId, Vec<Card>> {
        self.players
            .iter()
            .map(|p| (p.id(), p.collected().to_vec()))
            .collect()
    }

    /// Flip colour majorities and tally final scores.
    ///
    /// Mutates collected cards in place (the flip rule) and marks the
    /// game scored; calling it twice is an error.
    pub fn calculate_scores(&mut self) -> Result<super::scoring::Scoreboard, GameError> {
        if self.scored {
            return Err(GameError::AlreadyScored);
        }
        let board = super::scoring::score_players(&mut self.players);
        self.scored = true;
        Ok(board)
    }
}
