//! Headless AI-vs-AI game driver.
//!
//! Seats a table of strategies and plays a whole game to completion:
//! the play loop until the end trigger runs out, the discard phase,
//! then scoring. Deterministic per seed; the integration tests and
//! any embedding frontend that wants a bot table are built on this.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::ai::{Difficulty, Strategy};
use crate::core::{Card, GameConfig, PlayerId};

use super::scoring::Scoreboard;
use super::state::{GameError, GameState};

/// Everything a finished game leaves behind.
#[derive(Debug)]
pub struct GameReport {
    /// Final standings.
    pub scoreboard: Scoreboard,
    /// Collected piles as they stood before the discard phase, for
    /// display continuity.
    pub pre_discard_collected: FxHashMap<PlayerId, Vec<Card>>,
    /// Number of play turns taken (discard turns excluded).
    pub turns: u32,
}

/// A fully automated game.
pub struct AutoGame {
    state: GameState,
    strategies: Vec<Box<dyn Strategy>>,
}

impl AutoGame {
    /// Seat the given players and deal.
    pub fn new<S>(seats: Vec<(S, Difficulty)>, config: &GameConfig, seed: u64) -> Self
    where
        S: Into<String>,
    {
        let mut names = Vec::with_capacity(seats.len());
        let mut strategies = Vec::with_capacity(seats.len());
        for (name, difficulty) in seats {
            names.push(name.into());
            strategies.push(difficulty.strategy());
        }

        Self {
            state: GameState::new(names, config, seed),
            strategies,
        }
    }

    /// The game state, for inspection.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play the game out and score it.
    pub fn run(&mut self) -> Result<GameReport, GameError> {
        let mut turns = 0;

        while !self.state.is_game_over() && !self.state.is_discard_phase() {
            let index = {
                let player = self.state.current_player();
                self.strategies[self.state.current_index()]
                    .choose_card(player.hand(), self.state.parade())
            };

            let outcome = self.state.play_turn(index)?;
            trace!(
                "turn {}: {} played {}, collected {}",
                turns,
                outcome.player,
                outcome.played,
                outcome.collected.len()
            );

            turns += 1;
            self.state.next_turn();
        }

        let pre_discard_collected = self.state.snapshot_collected();

        while self.state.is_discard_phase() {
            let indices = {
                let player = self.state.current_player();
                self.strategies[self.state.current_index()].choose_discards(
                    player.hand(),
                    self.state.players(),
                    player.id(),
                )
            };

            let outcome = self.state.apply_discards(indices)?;
            trace!(
                "{} discarded {} and {}",
                outcome.player,
                outcome.discarded[0],
                outcome.discarded[1]
            );

            self.state.next_turn();
        }

        let scoreboard = self.state.calculate_scores()?;
        debug!("game finished after {} turns, winner {}", turns, scoreboard.winner());

        Ok(GameReport {
            scoreboard,
            pre_discard_collected,
            turns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(difficulty: Difficulty, count: usize) -> Vec<(String, Difficulty)> {
        (0..count)
            .map(|i| (format!("Bot {}", i), difficulty))
            .collect()
    }

    #[test]
    fn test_full_game_reaches_scoring() {
        let mut game = AutoGame::new(table(Difficulty::Medium, 3), &GameConfig::default(), 42);
        let report = game.run().unwrap();

        assert_eq!(report.scoreboard.entries().len(), 3);
        assert!(report.turns > 0);
        assert_eq!(game.state().phase(), crate::game::Phase::Scored);
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = GameConfig::default();

        let report1 = AutoGame::new(table(Difficulty::Hard, 4), &config, 7)
            .run()
            .unwrap();
        let report2 = AutoGame::new(table(Difficulty::Hard, 4), &config, 7)
            .run()
            .unwrap();

        assert_eq!(report1.scoreboard, report2.scoreboard);
        assert_eq!(report1.turns, report2.turns);
    }

    #[test]
    fn test_hands_are_empty_after_the_game() {
        let mut game = AutoGame::new(table(Difficulty::Easy, 2), &GameConfig::default(), 3);
        game.run().unwrap();

        for player in game.state().players() {
            assert!(player.hand().is_empty());
            assert!(!player.collected().is_empty());
        }
    }
}
