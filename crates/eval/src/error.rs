// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use holdem_cards::CardError;

/// Errors returned by the board generator and the equity calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card token could not be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The known board has a number of cards that no street has.
    #[error("Invalid board with {0} cards, expected 0, 3, 4 or 5 cards")]
    InvalidBoard(usize),
    /// The deck has fewer cards than needed to complete a board.
    #[error("Deck exhausted, {needed} cards needed but only {left} left")]
    DeckExhausted {
        /// Cards needed.
        needed: usize,
        /// Cards left in the deck.
        left: usize,
    },
}
