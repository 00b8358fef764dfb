// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em hands evaluator and equity calculator.
//!
//! The evaluator ranks 5, 6 and 7 cards hands with a [HandValue], a packed
//! integer where a higher value is a stronger hand:
//!
//! ```
//! # use holdem_eval::*;
//! let cards = parse_cards(&["As", "Ks", "Ah", "Kh", "Qh", "Jh", "9s"]).unwrap();
//! let v1 = HandValue::eval(&cards);
//! assert_eq!(v1.rank(), HandRank::TwoPair);
//!
//! let cards = parse_cards(&["5h", "6h", "Ah", "Kh", "Qh", "Jh", "9s"]).unwrap();
//! let v2 = HandValue::eval(&cards);
//! assert_eq!(v2.rank(), HandRank::Flush);
//! assert!(v2 > v1);
//! ```
//!
//! The equity calculator completes the known board in every possible way on
//! the flop and turn, or with 10,000 random boards preflop, and counts how
//! many boards each player wins or ties:
//!
//! ```
//! # use holdem_eval::*;
//! let wins = poker_eval_str(&[("Ah", "Ks"), ("8d", "8s")], &["As", "7d", "2h"]).unwrap();
//! assert_eq!(wins, [903, 87]);
//! ```
//!
//! The **`parallel`** feature adds [Equity::par_run] that tallies the boards
//! with a given number of tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod board;
pub use board::{Board, PREFLOP_SAMPLES, PocketHand, Street, candidate_boards};

pub mod equity;
pub use equity::{
    Equity, EquityConfig, WinTally, poker_eval, poker_eval_str, poker_eval_with_rng,
};

mod error;
pub use error::EvalError;

pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use holdem_cards::{Card, CardError, Deck, Rank, Suit, parse_cards};
