// Copyright (C) 2025 The showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation entry point.
use log::{info, warn};
use std::path::Path;

use showdown_cards::Card;

use crate::{
    store,
    table::{HandRank, RankTable},
    value::HandValue,
};

/// Scores 5-cards hands against the precomputed rank table.
///
/// The table is immutable after construction so an evaluator can be shared
/// by reference across any number of concurrent calls.
#[derive(Debug)]
pub struct Evaluator {
    table: RankTable,
}

impl Evaluator {
    /// Creates an evaluator with a freshly built rank table.
    pub fn new() -> Self {
        Self {
            table: RankTable::build(),
        }
    }

    /// Creates an evaluator loading the rank table from a file.
    ///
    /// If the file is missing or unreadable the table is rebuilt and
    /// persisted back for future runs; a persist failure leaves the in
    /// memory table untouched.
    pub fn with_store<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let table = match store::load(path) {
            Ok(table) => {
                info!("Loaded rank table from {}", path.display());
                table
            }
            Err(e) => {
                warn!("Cannot load rank table from {}: {e:#}", path.display());

                let table = RankTable::build();
                info!("Rebuilt rank table with {} entries", table.len());

                if let Err(e) = store::save(&table, path) {
                    warn!("Cannot persist rank table to {}: {e:#}", path.display());
                }

                table
            }
        };

        Self { table }
    }

    /// Returns the strength rank of a 5-cards hand.
    ///
    /// Panics if the hand does not have exactly 5 distinct cards.
    pub fn rank(&self, hand: &[Card]) -> HandRank {
        let value = HandValue::eval(hand);
        self.table.rank(value).unwrap_or_else(|| {
            panic!(
                "Hand value 0x{:x} missing from the rank table for hand {hand:?}",
                value.value()
            )
        })
    }

    /// Returns the indices of the strongest of the given hands.
    ///
    /// Hands tied for the strongest rank are all returned, in input order,
    /// to support split pots. Panics if `hands` is empty or any hand does
    /// not have exactly 5 distinct cards.
    pub fn evaluate_hands<H: AsRef<[Card]>>(&self, hands: &[H]) -> Vec<usize> {
        assert!(!hands.is_empty(), "no hands to evaluate");

        let mut winners = Vec::with_capacity(1);
        let mut best: Option<HandRank> = None;

        for (index, hand) in hands.iter().enumerate() {
            let rank = self.rank(hand.as_ref());
            if best.is_none_or(|b| rank > b) {
                best = Some(rank);
                winners.clear();
                winners.push(index);
            } else if best == Some(rank) {
                winners.push(index);
            }
        }

        winners
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::HandClass;
    use showdown_cards::{Deck, Rank, Suit};

    fn hand(cards: &[(Rank, Suit)]) -> Vec<Card> {
        cards.iter().map(|&(r, s)| Card::new(r, s)).collect()
    }

    #[test]
    fn royal_flush_beats_two_pair() {
        use Rank::*;
        use Suit::*;

        let evaluator = Evaluator::new();
        let royal = hand(&[
            (Ace, Spades),
            (King, Spades),
            (Queen, Spades),
            (Jack, Spades),
            (Ten, Spades),
        ]);
        let two_pair = hand(&[
            (Deuce, Clubs),
            (Deuce, Diamonds),
            (Trey, Hearts),
            (Trey, Spades),
            (Four, Diamonds),
        ]);

        assert_eq!(evaluator.evaluate_hands(&[royal, two_pair]), vec![0]);
    }

    #[test]
    fn suit_permuted_full_houses_tie() {
        use Rank::*;
        use Suit::*;

        let evaluator = Evaluator::new();
        let h1 = hand(&[
            (Ace, Clubs),
            (Ace, Diamonds),
            (Five, Hearts),
            (Five, Spades),
            (Five, Diamonds),
        ]);
        let h2 = hand(&[
            (Ace, Spades),
            (Ace, Hearts),
            (Five, Clubs),
            (Five, Diamonds),
            (Five, Spades),
        ]);

        assert_eq!(evaluator.evaluate_hands(&[h1, h2]), vec![0, 1]);
    }

    #[test]
    fn four_aces_kicker_suit_is_irrelevant() {
        use Rank::*;
        use Suit::*;

        let evaluator = Evaluator::new();
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
            evaluator.rank(&quads(Clubs)),
            evaluator.rank(&quads(Diamonds))
        );
    }

    #[test]
    fn winner_order_is_input_order() {
        use Rank::*;
        use Suit::*;

        let evaluator = Evaluator::new();
        let pair = hand(&[
            (Ten, Clubs),
            (Ten, Diamonds),
            (Ace, Hearts),
            (Seven, Spades),
            (Deuce, Clubs),
        ]);
        let same_pair = hand(&[
            (Ten, Hearts),
            (Ten, Spades),
            (Ace, Diamonds),
            (Seven, Clubs),
            (Deuce, Hearts),
        ]);
        let weaker = hand(&[
            (Nine, Clubs),
            (Seven, Diamonds),
            (Five, Hearts),
            (Four, Spades),
            (Deuce, Spades),
        ]);

        assert_eq!(
            evaluator.evaluate_hands(&[weaker.clone(), pair.clone(), same_pair.clone()]),
            vec![1, 2]
        );
        assert_eq!(
            evaluator.evaluate_hands(&[pair, weaker.clone(), same_pair]),
            vec![0, 2]
        );
        assert_eq!(evaluator.evaluate_hands(&[weaker]), vec![0]);
    }

    #[test]
    fn evaluator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Evaluator>();
    }

    #[test]
    #[should_panic(expected = "no hands")]
    fn rejects_empty_hands() {
        let evaluator = Evaluator::new();
        evaluator.evaluate_hands::<Vec<Card>>(&[]);
    }

    #[test]
    fn with_store_missing_file_rebuilds_and_persists() {
        let path =
            std::env::temp_dir().join(format!("showdown-rebuild-{}.bin", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let evaluator = Evaluator::with_store(&path);
        assert_eq!(evaluator.table.len(), RankTable::NUM_RANKS);

        // The rebuilt table has been persisted and loads back equal.
        let loaded = Evaluator::with_store(&path);
        assert_eq!(evaluator.table, loaded.table);

        std::fs::remove_file(&path).unwrap();
    }

    // Evaluates all 2,598,960 hands, run with --release --ignored.
    #[test]
    #[ignore]
    fn all_hands_collapse_to_the_table() {
        use ahash::AHashMap;

        let evaluator = Evaluator::new();
        let mut class_counts = [0u64; 9];
        let mut value_counts: AHashMap<u16, u64> = AHashMap::default();

        Deck::default().for_each_hand(|cards| {
            let rank = evaluator.rank(cards);
            class_counts[rank.class() as usize] += 1;
            *value_counts.entry(rank.index()).or_default() += 1;
        });

        // Every one of the 7,462 ranks is hit by at least one hand.
        assert_eq!(value_counts.len(), RankTable::NUM_RANKS);

        // Known category counts over all 5-cards hands.
        assert_eq!(class_counts[HandClass::StraightFlush as usize], 40);
        assert_eq!(class_counts[HandClass::FourOfAKind as usize], 624);
        assert_eq!(class_counts[HandClass::FullHouse as usize], 3_744);
        assert_eq!(class_counts[HandClass::Flush as usize], 5_108);
        assert_eq!(class_counts[HandClass::Straight as usize], 10_200);
        assert_eq!(class_counts[HandClass::ThreeOfAKind as usize], 54_912);
        assert_eq!(class_counts[HandClass::TwoPair as usize], 123_552);
        assert_eq!(class_counts[HandClass::OnePair as usize], 1_098_240);
        assert_eq!(class_counts[HandClass::HighCard as usize], 1_302_540);
        assert_eq!(class_counts.iter().sum::<u64>(), 2_598_960);
    }
}
