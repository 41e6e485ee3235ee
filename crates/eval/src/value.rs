// Copyright (C) 2025 The showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Canonical hand values.
use showdown_cards::Card;
use std::fmt;

/// Mask selecting the 13 rank lanes of a hand value.
const RANK_LANES_MASK: u64 = 0xFF_FFFF_FFFF;

/// The canonical value of a 5-cards hand.
///
/// The value is computed from the five card signatures with pure integer
/// arithmetic:
///
/// ```text
///   +------+------+-----+------+------+---+
///   | lane | lane | ... | lane | lane | f |
///   |  12  |  11  |     |   1  |   0  |   |
///   +------+------+-----+------+------+---+
///   f = indicator bit whether the hand is a flush
///   lane g = 2 x number of cards of rank grade g
/// ```
///
/// The lanes jointly encode the hand rank-count histogram and the low bit
/// the flush-ness, and nothing else: two hands with the same rank counts and
/// the same flush-ness collapse to the same value no matter which suits or
/// card instances they hold. This collapses the 2,598,960 possible 5-cards
/// hands into 7,462 distinct values.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue(u64);

impl HandValue {
    /// Computes the canonical value of a 5-cards hand.
    ///
    /// Panics if the hand does not have exactly 5 distinct cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert_eq!(cards.len(), 5, "a hand must have exactly 5 cards");
        for (pos, card) in cards.iter().enumerate() {
            assert!(
                !cards[pos + 1..].contains(card),
                "duplicate card {card} in hand"
            );
        }

        // The suit field of the AND of all signatures is nonzero only if the
        // five one-hot suit bits coincide.
        let flush = cards.iter().fold(u64::MAX, |acc, c| acc & c.signature()) >> 40;

        // Summing the signatures accumulates each rank lane to 2x the number
        // of cards of that rank.
        let lanes = cards.iter().map(Card::signature).sum::<u64>() & RANK_LANES_MASK;

        Self(lanes | u64::from(flush != 0))
    }

    /// The canonical value as an integer.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whether the five cards share a suit.
    pub fn is_flush(&self) -> bool {
        self.0 & 1 == 1
    }
}

impl fmt::Debug for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandValue(0x{:x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::{Rank, Suit};

    fn hand(cards: &[(Rank, Suit)]) -> Vec<Card> {
        cards.iter().map(|&(r, s)| Card::new(r, s)).collect()
    }

    #[test]
    fn permutation_invariance() {
        use Rank::*;
        use Suit::*;

        let mut cards = hand(&[
            (Ace, Spades),
            (King, Hearts),
            (Queen, Diamonds),
            (Jack, Clubs),
            (Nine, Spades),
        ]);

        let value = HandValue::eval(&cards);
        cards.reverse();
        assert_eq!(HandValue::eval(&cards), value);
        cards.swap(0, 3);
        cards.swap(1, 4);
        assert_eq!(HandValue::eval(&cards), value);
    }

    #[test]
    fn lanes_hold_rank_counts() {
        use Rank::*;
        use Suit::*;

        // Aces full of fives: lane 12 = 2*3, lane 3 = 2*2.
        let cards = hand(&[
            (Ace, Spades),
            (Ace, Hearts),
            (Ace, Diamonds),
            (Five, Clubs),
            (Five, Spades),
        ]);

        let value = HandValue::eval(&cards).value();
        assert_eq!(value, (6 << 36) | (6 << 9));
        assert!(!HandValue::eval(&cards).is_flush());
    }

    #[test]
    fn flush_bit() {
        use Rank::*;
        use Suit::*;

        let flush = hand(&[
            (Ace, Hearts),
            (Jack, Hearts),
            (Nine, Hearts),
            (Six, Hearts),
            (Trey, Hearts),
        ]);
        assert!(HandValue::eval(&flush).is_flush());

        let mut mixed = flush.clone();
        mixed[4] = Card::new(Trey, Spades);
        assert!(!HandValue::eval(&mixed).is_flush());

        // Same ranks, different flush-ness, different values.
        assert_ne!(HandValue::eval(&flush), HandValue::eval(&mixed));
        assert_eq!(
            HandValue::eval(&flush).value() & !1,
            HandValue::eval(&mixed).value() & !1
        );
    }

    #[test]
    fn suit_identity_collapses() {
        use Rank::*;
        use Suit::*;

        // Four aces with a deuce kicker, the kicker suit is irrelevant.
        let quads = |kicker| {
            hand(&[
                (Ace, Clubs),
                (Ace, Diamonds),
                (Ace, Hearts),
                (Ace, Spades),
                (Deuce, kicker),
            ])
        };

        assert_eq!(
            HandValue::eval(&quads(Clubs)),
            HandValue::eval(&quads(Diamonds))
        );

        // Same rank histogram on different suits, both unsuited.
        let h1 = hand(&[
            (Ace, Spades),
            (Ace, Diamonds),
            (Five, Hearts),
            (Trey, Diamonds),
            (Deuce, Clubs),
        ]);
        let h2 = hand(&[
            (Ace, Hearts),
            (Ace, Clubs),
            (Five, Hearts),
            (Trey, Diamonds),
            (Deuce, Clubs),
        ]);
        assert_eq!(HandValue::eval(&h1), HandValue::eval(&h2));
    }

    #[test]
    #[should_panic(expected = "exactly 5 cards")]
    fn rejects_short_hand() {
        let cards = hand(&[(Rank::Ace, Suit::Spades), (Rank::King, Suit::Spades)]);
        HandValue::eval(&cards);
    }

    #[test]
    #[should_panic(expected = "duplicate card")]
    fn rejects_duplicate_card() {
        use Rank::*;
        use Suit::*;

        let cards = hand(&[
            (Ace, Spades),
            (Ace, Spades),
            (Queen, Diamonds),
            (Jack, Clubs),
            (Nine, Spades),
        ]);
        HandValue::eval(&cards);
    }
}
