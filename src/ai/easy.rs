//! Easy strategy: count-based play, value-based discards.

use crate::core::{Card, Player, PlayerId};
use crate::parade::Parade;

use super::Strategy;

/// The easiest tier.
///
/// Plays are ranked by how many cards they would collect (stable,
/// ascending), and the *third*-smallest is chosen: deliberately not
/// the best, so the easy AI leaks value. With two cards it takes the
/// second-smallest, with one the only option. Discards are simply the
/// two highest values in hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct EasyStrategy;

impl Strategy for EasyStrategy {
    fn choose_card(&self, hand: &[Card], parade: &Parade) -> usize {
        debug_assert!(!hand.is_empty(), "choose_card needs a non-empty hand");

        let counts: Vec<usize> = hand
            .iter()
            .map(|card| parade.simulate_play(card).len())
            .collect();

        let mut order: Vec<usize> = (0..hand.len()).collect();
        order.sort_by_key(|&i| counts[i]);

        match hand.len() {
            1 => order[0],
            2 => order[1],
            _ => order[2],
        }
    }

    fn choose_discards(&self, hand: &[Card], _players: &[Player], _me: PlayerId) -> [usize; 2] {
        debug_assert!(hand.len() >= 2, "discards need at least two cards");

        // Top two by value, one linear pass; earlier indices win ties.
        let mut first = 0;
        let mut second = 1;
        if hand[second].value() > hand[first].value() {
            std::mem::swap(&mut first, &mut second);
        }

        for (i, card) in hand.iter().enumerate().skip(2) {
            if card.value() > hand[first].value() {
                second = first;
                first = i;
            } else if card.value() > hand[second].value() {
                second = i;
            }
        }

        [first, second]
    }
}
