// Copyright (C) 2025 The showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Hand strength rank table.
//!
//! The table maps every canonical [HandValue] to a dense [HandRank] in
//! `0..7462`, rank 0 being the royal flush and rank 7,461 the weakest high
//! card. It is built with closed-form generators, one per hand class, that
//! enumerate a canonical representative for each distinct hand value without
//! walking the 2,598,960 possible 5-cards hands.
use ahash::{AHashMap, AHashSet};
use anyhow::{Result, ensure};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank, Suit};

use crate::value::HandValue;

/// Suit used for representative hands, and for all cards of a flush.
const FILLER: Suit = Suit::Clubs;

/// Suit replacing one filler card where a representative must not be a flush.
const BREAKER: Suit = Suit::Spades;

/// A class of 5-cards Poker hands.
///
/// The discriminant orders classes by strength, weakest first, so the derived
/// `Ord` compares by strength and the discriminant can index class arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandClass {
    /// Unpaired, unsuited, no straight.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks, Ace playing high or low.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and a pair of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
}

impl HandClass {
    /// Number of distinct hand values in this class.
    pub const fn size(self) -> usize {
        match self {
            HandClass::HighCard => 1277,
            HandClass::OnePair => 2860,
            HandClass::TwoPair => 858,
            HandClass::ThreeOfAKind => 858,
            HandClass::Straight => 10,
            HandClass::Flush => 1277,
            HandClass::FullHouse => 156,
            HandClass::FourOfAKind => 156,
            HandClass::StraightFlush => 10,
        }
    }

    /// Returns all classes from the strongest to the weakest.
    pub fn classes() -> impl DoubleEndedIterator<Item = HandClass> {
        use HandClass::*;
        [
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandClass::HighCard => "High Card",
            HandClass::OnePair => "One Pair",
            HandClass::TwoPair => "Two Pair",
            HandClass::ThreeOfAKind => "Three of a Kind",
            HandClass::Straight => "Straight",
            HandClass::Flush => "Flush",
            HandClass::FullHouse => "Full House",
            HandClass::FourOfAKind => "Four of a Kind",
            HandClass::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The strength rank of a hand.
///
/// Ranks are dense indices in `0..7462` with 0 the strongest hand (royal
/// flush) and 7,461 the weakest. The ordering compares by strength, so the
/// greater rank wins the pot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandRank(u16);

impl HandRank {
    pub(crate) fn new(index: u16) -> HandRank {
        Self(index)
    }

    /// The rank index, 0 is the strongest hand.
    pub fn index(&self) -> u16 {
        self.0
    }

    /// The class this rank belongs to.
    ///
    /// The class is derived from the fixed class size partition of the
    /// table, not from any enumeration order.
    pub fn class(&self) -> HandClass {
        let mut end = 0;
        for class in HandClass::classes() {
            end += class.size();
            if (self.0 as usize) < end {
                return class;
            }
        }

        panic!("Invalid hand rank {}", self.0)
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower index means stronger hand.
        other.0.cmp(&self.0)
    }
}

impl fmt::Debug for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandRank({}, {})", self.0, self.class())
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

/// The mapping from canonical hand value to strength rank.
///
/// Built once and immutable afterwards, the table can be shared by reference
/// across any number of concurrent lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    ranks: AHashMap<u64, u16>,
}

impl RankTable {
    /// The number of distinct hand values.
    pub const NUM_RANKS: usize = 7462;

    /// Builds the complete rank table.
    ///
    /// Generation is deterministic, two builds yield identical mappings.
    /// Panics if the generated classes do not form an exact partition: wrong
    /// per-class cardinality, a value in two classes, or a total other than
    /// 7,462 all indicate an encoding defect and abort the build.
    pub fn build() -> RankTable {
        let (straight_flushes, straights) = straights();
        let (flushes, high_cards) = flushes_and_high_cards(&straight_flushes, &straights);
        let four_of_a_kinds = four_of_a_kinds();
        let (three_of_a_kinds, full_houses) = three_of_a_kinds_and_full_houses();
        let (one_pairs, two_pairs) = one_pairs_and_two_pairs();

        let classes = [
            (HandClass::StraightFlush, straight_flushes),
            (HandClass::FourOfAKind, four_of_a_kinds),
            (HandClass::FullHouse, full_houses),
            (HandClass::Flush, flushes),
            (HandClass::Straight, straights),
            (HandClass::ThreeOfAKind, three_of_a_kinds),
            (HandClass::TwoPair, two_pairs),
            (HandClass::OnePair, one_pairs),
            (HandClass::HighCard, high_cards),
        ];

        let mut ranks = AHashMap::with_capacity(Self::NUM_RANKS);
        let mut index = 0u16;

        for (class, values) in classes {
            assert_eq!(
                values.len(),
                class.size(),
                "wrong number of {class} values"
            );

            for value in values {
                let prev = ranks.insert(value.value(), index);
                assert!(
                    prev.is_none(),
                    "hand value 0x{:x} generated in more than one class",
                    value.value()
                );
                index += 1;
            }
        }

        assert_eq!(ranks.len(), Self::NUM_RANKS);
        RankTable { ranks }
    }

    /// Looks up the rank of a hand value.
    pub fn rank(&self, value: HandValue) -> Option<HandRank> {
        self.ranks.get(&value.value()).map(|&r| HandRank::new(r))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Checks if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Returns the `(value, rank)` records in rank order.
    pub fn records(&self) -> Vec<(u64, u16)> {
        let mut records = self.ranks.iter().map(|(&v, &r)| (v, r)).collect::<Vec<_>>();
        records.sort_unstable_by_key(|&(_, rank)| rank);
        records
    }

    /// Rebuilds a table from persisted records.
    ///
    /// Fails if the records are not an injective mapping of exactly
    /// [RankTable::NUM_RANKS] values onto the full rank range.
    pub fn from_records(records: Vec<(u64, u16)>) -> Result<RankTable> {
        ensure!(
            records.len() == Self::NUM_RANKS,
            "expected {} records, got {}",
            Self::NUM_RANKS,
            records.len()
        );

        let mut seen = vec![false; Self::NUM_RANKS];
        let mut ranks = AHashMap::with_capacity(Self::NUM_RANKS);

        for (value, rank) in records {
            ensure!(
                (rank as usize) < Self::NUM_RANKS,
                "rank {rank} out of range"
            );
            ensure!(
                !std::mem::replace(&mut seen[rank as usize], true),
                "duplicate rank {rank}"
            );
            ensure!(
                ranks.insert(value, rank).is_none(),
                "duplicate hand value 0x{value:x}"
            );
        }

        Ok(RankTable { ranks })
    }
}

/// Appends a value the class has not recorded yet.
///
/// Generators enumerate representatives in descending strength order with
/// many suit and kicker permutations collapsing to the same value, the first
/// occurrence wins.
fn push_new(seen: &mut AHashSet<u64>, values: &mut Vec<HandValue>, value: HandValue) {
    if seen.insert(value.value()) {
        values.push(value);
    }
}

/// Generates the straight flush and straight values, strongest first.
fn straights() -> (Vec<HandValue>, Vec<HandValue>) {
    // Ranks bounded by an Ace on both ends so the windows cover the wheel.
    let mut bounded = vec![Rank::Ace];
    bounded.extend(Rank::ranks());

    let mut straight_flushes = Vec::with_capacity(10);
    let mut straights = Vec::with_capacity(10);

    // From the royal flush window down to the wheel.
    for low in (0..10).rev() {
        let mut hand = bounded[low..low + 5]
            .iter()
            .map(|&r| Card::new(r, FILLER))
            .collect::<Vec<_>>();
        straight_flushes.push(HandValue::eval(&hand));

        hand[0] = Card::new(bounded[low], BREAKER);
        straights.push(HandValue::eval(&hand));
    }

    (straight_flushes, straights)
}

/// Generates the flush and high card values, strongest first.
///
/// Both classes enumerate the 1,287 combinations of 5 distinct ranks, minus
/// the 10 combinations that form a straight.
fn flushes_and_high_cards(
    straight_flushes: &[HandValue],
    straights: &[HandValue],
) -> (Vec<HandValue>, Vec<HandValue>) {
    let desc = Rank::ranks().rev().collect::<Vec<_>>();
    let straight_flushes = straight_flushes
        .iter()
        .map(|v| v.value())
        .collect::<AHashSet<_>>();
    let straights = straights.iter().map(|v| v.value()).collect::<AHashSet<_>>();

    let mut flushes = Vec::with_capacity(HandClass::Flush.size());
    let mut high_cards = Vec::with_capacity(HandClass::HighCard.size());

    let n = desc.len();
    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let mut hand = [desc[c1], desc[c2], desc[c3], desc[c4], desc[c5]]
                            .map(|r| Card::new(r, FILLER));
                        let suited = HandValue::eval(&hand);

                        hand[0] = Card::new(desc[c1], BREAKER);
                        let unsuited = HandValue::eval(&hand);

                        if !straight_flushes.contains(&suited.value()) {
                            flushes.push(suited);
                        }
                        if !straights.contains(&unsuited.value()) {
                            high_cards.push(unsuited);
                        }
                    }
                }
            }
        }
    }

    (flushes, high_cards)
}

/// Generates the four of a kind values, strongest first.
fn four_of_a_kinds() -> Vec<HandValue> {
    let mut values = Vec::with_capacity(HandClass::FourOfAKind.size());

    for quad in Rank::ranks().rev() {
        let quads = Suit::suits().map(|s| Card::new(quad, s)).collect::<Vec<_>>();

        // Every quad and kicker rank pair yields a distinct value.
        for kicker in Rank::ranks().rev().filter(|&r| r != quad) {
            let mut hand = quads.clone();
            hand.push(Card::new(kicker, FILLER));
            values.push(HandValue::eval(&hand));
        }
    }

    values
}

/// Generates the three of a kind and full house values, strongest first.
///
/// Both classes hold three suits of the trip rank and vary two kickers over
/// the other ranks; equal kicker ranks make a full house.
fn three_of_a_kinds_and_full_houses() -> (Vec<HandValue>, Vec<HandValue>) {
    let mut trips_seen = AHashSet::with_capacity(HandClass::ThreeOfAKind.size());
    let mut trips = Vec::with_capacity(HandClass::ThreeOfAKind.size());
    let mut full_houses = Vec::with_capacity(HandClass::FullHouse.size());

    for trip in Rank::ranks().rev() {
        let template = [
            Card::new(trip, Suit::Clubs),
            Card::new(trip, Suit::Diamonds),
            Card::new(trip, Suit::Hearts),
        ];

        for k1 in Rank::ranks().rev().filter(|&r| r != trip) {
            for k2 in Rank::ranks().rev().filter(|&r| r != trip) {
                let mut hand = template.to_vec();
                hand.push(Card::new(k1, FILLER));
                hand.push(Card::new(k2, Suit::Hearts));
                let value = HandValue::eval(&hand);

                if k1 == k2 {
                    // Each trip and pair rank yields a distinct full house.
                    full_houses.push(value);
                } else {
                    push_new(&mut trips_seen, &mut trips, value);
                }
            }
        }
    }

    (trips, full_houses)
}

/// Generates the one pair and two pair values, strongest first.
///
/// Both classes hold two suits of the pair rank and vary three kickers over
/// the other ranks; a repeated kicker rank makes a second pair.
fn one_pairs_and_two_pairs() -> (Vec<HandValue>, Vec<HandValue>) {
    let mut pairs_seen = AHashSet::with_capacity(HandClass::OnePair.size());
    let mut pairs = Vec::with_capacity(HandClass::OnePair.size());
    let mut two_pairs_seen = AHashSet::with_capacity(HandClass::TwoPair.size());
    let mut two_pairs = Vec::with_capacity(HandClass::TwoPair.size());

    for pair in Rank::ranks().rev() {
        let template = [
            Card::new(pair, Suit::Clubs),
            Card::new(pair, Suit::Diamonds),
        ];

        for k1 in Rank::ranks().rev().filter(|&r| r != pair) {
            for k2 in Rank::ranks().rev().filter(|&r| r != pair) {
                for k3 in Rank::ranks().rev().filter(|&r| r != pair) {
                    let kickers = [
                        Card::new(k1, FILLER),
                        Card::new(k2, Suit::Hearts),
                        Card::new(k3, Suit::Spades),
                    ];

                    if k1 != k2 && k1 != k3 && k2 != k3 {
                        let mut hand = template.to_vec();
                        hand.extend(kickers);
                        let value = HandValue::eval(&hand);
                        push_new(&mut pairs_seen, &mut pairs, value);
                    } else if k1 == k2 && k1 != k3 {
                        let mut hand = template.to_vec();
                        hand.extend(kickers);
                        let value = HandValue::eval(&hand);
                        push_new(&mut two_pairs_seen, &mut two_pairs, value);
                    }
                }
            }
        }
    }

    (pairs, two_pairs)
}
