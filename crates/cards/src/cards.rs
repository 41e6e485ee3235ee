// Copyright (C) 2025 The showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mask selecting the 13 rank lanes of a signature.
const RANK_LANES_MASK: u64 = 0xFF_FFFF_FFFF;

/// A Poker card.
///
/// A card is represented by a 48-bit signature with a one-hot suit field and
/// 13 three-bit rank lanes, one lane per rank:
///
/// ```text
///   +------+------+------+-----+------+------+
///   | cdhs | lane | lane | ... | lane | lane |
///   | 4bit |  12  |  11  |     |   1  |   0  |
///   +------+------+------+-----+------+------+
///   cdhs = suit bit (spades=0,hearts=1,diamonds=2,clubs=3), bits 40..=43
///   lane g = 3 bits at offset 3g, holding the value 2 for rank grade g
/// ```
///
/// The lane value 2 lets signatures of cards that share a rank be added
/// together: four copies of a rank sum to 8, which still fits in the lane
/// without carrying into its neighbor. This is what lets five signatures be
/// summed into a rank-count histogram with plain integer arithmetic.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u64);

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let (grade, suit) = (rank as u64, suit as u64);
        Self(1 << (40 + suit) | 1 << (3 * grade + 1))
    }

    /// This card signature.
    pub fn signature(&self) -> u64 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        let suit_bits = self.0 >> 40;
        match suit_bits {
            0x1 => Suit::Spades,
            0x2 => Suit::Hearts,
            0x4 => Suit::Diamonds,
            0x8 => Suit::Clubs,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        let lane_bit = (self.0 & RANK_LANES_MASK).trailing_zeros();
        let grade = lane_bit.wrapping_sub(1) / 3;
        match grade {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank 0x{:x}", self.0),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks in ascending grade order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// The discriminant is the suit bit position inside the signature suit field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each 5-cards hand in the deck.
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        if self.cards.len() < 5 {
            return;
        }

        let n = self.cards.len();
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 5];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
