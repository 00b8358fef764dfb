// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!("aH".parse::<Card>(), Ok(ah));
//! ```
//!
//! and a [Deck] type for shuffling and iterating cards in the deck. The
//! default deck is the canonical 52 cards deck ordered by rank, from deuce to
//! ace, and then by suit in hearts, diamonds, clubs, spades order.
//!
//! For example to iterate through all the turn and river cards given a flop
//! and the players cards:
//!
//! ```
//! # use holdem_cards::{Deck, parse_cards};
//! let dead = parse_cards(&["Ah", "Ks", "8d", "8s", "As", "7d", "2h"]).unwrap();
//! let mut counter = 0;
//! Deck::without(&dead).for_each(2, |cards| {
//!     assert_eq!(cards.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 990);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, Rank, Suit, parse_cards};
