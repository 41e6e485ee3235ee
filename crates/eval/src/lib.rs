// Copyright (C) 2025 The showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! This crate scores 5-cards Poker hands with a rank table that collapses
//! the 2,598,960 possible hands into 7,462 distinct strength classes. Each
//! card carries a bit-packed signature (see `showdown-cards`) from which the
//! five cards of a hand combine, with pure integer arithmetic, into a
//! canonical [HandValue] keying the table; the [RankTable] itself is derived
//! per hand class with closed-form generators rather than by enumerating all
//! hands.
//!
//! To compare hands create an [Evaluator] and ask for the winners:
//!
//! ```
//! # use showdown_eval::*;
//! let evaluator = Evaluator::new();
//!
//! let trips = [
//!     Card::new(Rank::Nine, Suit::Clubs),
//!     Card::new(Rank::Nine, Suit::Diamonds),
//!     Card::new(Rank::Nine, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Four, Suit::Clubs),
//! ];
//! let pair = [
//!     Card::new(Rank::Ace, Suit::Clubs),
//!     Card::new(Rank::Ace, Suit::Diamonds),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Four, Suit::Hearts),
//! ];
//!
//! assert_eq!(evaluator.evaluate_hands(&[trips, pair]), vec![0]);
//! assert_eq!(evaluator.rank(&trips).class(), HandClass::ThreeOfAKind);
//! ```
//!
//! [Evaluator::with_store] loads a previously persisted table, falling back
//! to a full rebuild when the file is missing or corrupt.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod evaluator;
pub mod store;
mod table;
mod value;

pub use evaluator::Evaluator;
pub use table::{HandClass, HandRank, RankTable};
pub use value::HandValue;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
