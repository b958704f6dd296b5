//! Medium strategy: value-based play, as-they-stand discard search.

use crate::core::{Card, Player, PlayerId};
use crate::parade::Parade;

use super::{best_discard_pair, simulated_value, Strategy};

/// The middle tier.
///
/// Plays are ranked by the total *value* they would collect (stable,
/// ascending) and the second-smallest is chosen, keeping the best play
/// in reserve. Discards run the exhaustive pair search against every
/// player's collected pile as it actually stands; opponents' hands
/// are not modelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediumStrategy;

impl Strategy for MediumStrategy {
    fn choose_card(&self, hand: &[Card], parade: &Parade) -> usize {
        debug_assert!(!hand.is_empty(), "choose_card needs a non-empty hand");

        let values: Vec<u32> = hand
            .iter()
            .map(|card| simulated_value(parade, card))
            .collect();

        let mut order: Vec<usize> = (0..hand.len()).collect();
        order.sort_by_key(|&i| values[i]);

        if hand.len() > 1 {
            order[1]
        } else {
            order[0]
        }
    }

    fn choose_discards(&self, hand: &[Card], players: &[Player], me: PlayerId) -> [usize; 2] {
        best_discard_pair(hand, players, me, 0)
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
    fn test_picks_second_smallest_collected_value() {
        let parade = parade_of(&[
            (Colour::Red, 9),
            (Colour::Red, 10),
            (Colour::Blue, 1),
            (Colour::Green, 2),
        ]);

        let hand = vec![
            Card::new(Colour::Red, 0),   // sweeps both high Reds: 19
            Card::new(Colour::Grey, 10), // safe zone covers all: 0
            Card::new(Colour::Blue, 3),  // nothing examined matches: 0
        ];

        // Simulated values: Red-0 collects Red-9 and Red-10 (19);
        // Grey-10 collects nothing (0); Blue-3 examines only position
        // 0, where Red-9 exceeds 3 and is not Blue, so also 0.
        // Stable order: [1, 2, 0]; second-smallest is index 2.
        assert_eq!(MediumStrategy.choose_card(&hand, &parade), 2);
    }

    #[test]
    fn test_single_card_hand() {
        let parade = parade_of(&[(Colour::Red, 1)]);
        let hand = vec![Card::new(Colour::Blue, 5)];
        assert_eq!(MediumStrategy.choose_card(&hand, &parade), 0);
    }

    #[test]
    fn test_prefers_low_value_collections_over_low_counts() {
        // Collecting two cheap cards beats collecting one expensive
        // one: Medium looks at value, not count.
        let parade = parade_of(&[
            (Colour::Grey, 0),
            (Colour::Grey, 1),
            (Colour::Purple, 10),
            (Colour::Orange, 8),
            (Colour::Orange, 9),
        ]);

        let hand = vec![
            Card::new(Colour::Purple, 1), // Grey-0, Grey-1, Purple-10: 11
            Card::new(Colour::Grey, 2),   // Grey-0, Grey-1: 1
            Card::new(Colour::Orange, 10), // nothing: 0
        ];

        // Values [11, 1, 0] -> order [2, 1, 0]; second pick is index 1,
        // the two-card, one-point collection.
        assert_eq!(MediumStrategy.choose_card(&hand, &parade), 1);
    }

    #[test]
    fn test_discards_delegate_to_plain_search() {
        let mut me = Player::new(PlayerId::new(0), "Me");
        me.add_collected([Card::new(Colour::Red, 2), Card::new(Colour::Red, 3)]);
        let mut opponent = Player::new(PlayerId::new(1), "Them");
        opponent.add_collected([
            Card::new(Colour::Blue, 5),
            Card::new(Colour::Blue, 6),
            Card::new(Colour::Blue, 7),
            Card::new(Colour::Green, 1),
            Card::new(Colour::Green, 2),
        ]);
        let players = vec![me, opponent];

        let hand = vec![
            Card::new(Colour::Blue, 9),
            Card::new(Colour::Red, 8),
            Card::new(Colour::Green, 0),
        ];

        // The opponent holds Blue and Green, so neither flips for us;
        // our Reds always do. Keeping Green-0 at face value costs 0,
        // keeping Red-8 costs 1 flipped, keeping Blue-9 costs 9: the
        // search discards Blue-9 and Red-8.
        let pair = MediumStrategy.choose_discards(&hand, &players, PlayerId::new(0));
        assert_eq!(pair, [0, 1]);
    }
}
