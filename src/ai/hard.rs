//! Hard strategy: greedy minimum-value play, pessimistic discards.

use crate::core::{Card, Player, PlayerId};
use crate::parade::Parade;

use super::{best_discard_pair, simulated_value, Strategy};

/// Opponents are assumed to still collect this many cards of every
/// colour before scoring.
const OPPONENT_ESTIMATE: usize = 2;

/// The strongest tier.
///
/// `choose_card` is a full greedy scan: it plays the single card whose
/// simulated collection is worth the least, first minimum winning
/// ties. Discards run the shared pair search with each opponent's
/// colour counts inflated by [`OPPONENT_ESTIMATE`], a pessimistic
/// guess of what they might still take before scoring.
#[derive(Clone, Copy, Debug, Default)]
pub struct HardStrategy;

impl Strategy for HardStrategy {
    fn choose_card(&self, hand: &[Card], parade: &Parade) -> usize {
        debug_assert!(!hand.is_empty(), "choose_card needs a non-empty hand");

        let mut best = 0;
        let mut min_value = u32::MAX;
        for (i, card) in hand.iter().enumerate() {
            let value = simulated_value(parade, card);
            if value < min_value {
                min_value = value;
                best = i;
            }
        }
        best
    }

    fn choose_discards(&self, hand: &[Card], players: &[Player], me: PlayerId) -> [usize; 2] {
        best_discard_pair(hand, players, me, OPPONENT_ESTIMATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour;

    fn parade_of(cards: &[(Colour, u8)]) -> Parade {
        let mut parade = Parade::new();
        for &(colour, value) in cards {
            parade.add_card(Card::new(colour, value));
        }
        parade
    }

    #[test]
    fn test_picks_the_outright_cheapest_play() {
        let parade = parade_of(&[
            (Colour::Red, 9),
            (Colour::Red, 10),
            (Colour::Blue, 1),
            (Colour::Green, 2),
        ]);

        let hand = vec![
            Card::new(Colour::Red, 0),   // collects Red-9 + Red-10: 19
            Card::new(Colour::Blue, 3),  // examines only Red-9: 0
            Card::new(Colour::Grey, 10), // safe zone covers all: 0
        ];

        // Values [19, 0, 0]: the first zero wins.
        assert_eq!(HardStrategy.choose_card(&hand, &parade), 1);
    }

    #[test]
    fn test_beats_the_second_best_rule_of_medium() {
        // Where Medium deliberately plays its second-best card, Hard
        // takes the best one.
        let parade = parade_of(&[(Colour::Purple, 10), (Colour::Grey, 3)]);

        let hand = vec![
            Card::new(Colour::Purple, 0), // collects Purple-10: 10
            Card::new(Colour::Grey, 4),   // nothing: 0
        ];

        assert_eq!(HardStrategy.choose_card(&hand, &parade), 1);

        use super::super::MediumStrategy;
        assert_eq!(MediumStrategy.choose_card(&hand, &parade), 0);
    }

    #[test]
    fn test_single_card_hand() {
        let parade = parade_of(&[(Colour::Red, 1)]);
        let hand = vec![Card::new(Colour::Blue, 5)];
        assert_eq!(HardStrategy.choose_card(&hand, &parade), 0);
    }

    #[test]
    fn test_discards_assume_opponents_keep_collecting() {
        // Identical position to the shared-search test: the +2
        // estimate makes the search give up on a colour the plain
        // model would fight for.
        let mut me = Player::new(PlayerId::new(0), "Me");
        me.add_collected([Card::new(Colour::Green, 7)]);
        let mut opponent = Player::new(PlayerId::new(1), "Them");
        opponent.add_collected([
            Card::new(Colour::Green, 1),
            Card::new(Colour::Blue, 0),
            Card::new(Colour::Blue, 2),
            Card::new(Colour::Blue, 3),
            Card::new(Colour::Grey, 1),
            Card::new(Colour::Grey, 2),
            Card::new(Colour::Grey, 3),
        ]);
        let players = vec![me, opponent];

        let hand = vec![
            Card::new(Colour::Green, 9),
            Card::new(Colour::Blue, 4),
            Card::new(Colour::Grey, 5),
            Card::new(Colour::Grey, 6),
        ];

        let pair = HardStrategy.choose_discards(&hand, &players, PlayerId::new(0));
        assert_eq!(pair, [0, 3]);
    }
}
