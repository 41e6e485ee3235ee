// Copyright (C) 2025 The showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.deal().expect("a full deck");
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
//!
//! Dealing from an exhausted deck returns `None`.
//!
//! Each card carries a 48-bit [signature](Card::signature) with a one-hot
//! suit field and one 3-bit lane per rank, designed so that five signatures
//! can be combined with pure integer arithmetic into a canonical hand value,
//! see the `showdown-eval` crate.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, Rank, Suit};
