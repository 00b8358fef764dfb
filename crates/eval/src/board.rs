// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Boards generation.
//!
//! Given the players hole cards and the known board, generates the complete
//! boards the remaining deck can deal:
//!
//! - river: the known board itself.
//! - turn: one board for each card left in the deck.
//! - flop: one board for each two cards combination left in the deck.
//! - preflop: random boards, each one the first five cards of an independently
//!   shuffled deck.
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::{Card, CardError, Deck};

use crate::EvalError;

/// Number of random boards generated preflop.
pub const PREFLOP_SAMPLES: usize = 10_000;

/// A complete five cards board.
pub type Board = [Card; 5];

/// A player hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PocketHand([Card; 2]);

impl PocketHand {
    /// Creates a hand from two cards.
    pub fn new(c1: Card, c2: Card) -> Self {
        Self([c1, c2])
    }

    /// Parses a hand from two card tokens.
    pub fn parse(c1: &str, c2: &str) -> Result<Self, CardError> {
        Ok(Self::new(c1.parse()?, c2.parse()?))
    }

    /// The hand cards.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
}

impl fmt::Display for PocketHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// The betting round, given by the number of known board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Street {
    /// No board cards.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// Returns the street for the given known board.
    pub fn from_board(board: &[Card]) -> Result<Street, EvalError> {
        match board.len() {
            0 => Ok(Street::Preflop),
            3 => Ok(Street::Flop),
            4 => Ok(Street::Turn),
            5 => Ok(Street::River),
            n => Err(EvalError::InvalidBoard(n)),
        }
    }

    /// Number of cards that complete the board on this street.
    pub fn missing_cards(self) -> usize {
        match self {
            Street::Preflop => 5,
            Street::Flop => 2,
            Street::Turn => 1,
            Street::River => 0,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{s}")
    }
}

/// Generates the candidate boards for the given hands and known board.
///
/// Preflop the boards are `samples` random boards drawn with `rng`, for the
/// other streets the boards are enumerated in deck order and `rng` is unused.
/// The hands and board cards must be distinct, this is not checked.
pub fn candidate_boards<R>(
    hands: &[PocketHand],
    board: &[Card],
    samples: usize,
    rng: &mut R,
) -> Result<Vec<Board>, EvalError>
where
    R: Rng + ?Sized,
{
    let street = Street::from_board(board)?;

    let dead = hands
        .iter()
        .flat_map(|h| h.cards())
        .chain(board.iter().copied())
        .collect::<Vec<_>>();
    let deck = Deck::without(&dead);

    let needed = street.missing_cards();
    if deck.count() < needed {
        return Err(EvalError::DeckExhausted {
            needed,
            left: deck.count(),
        });
    }

    let boards = match street {
        Street::River => vec![complete(board, &[])],
        Street::Turn => deck
            .cards()
            .iter()
            .map(|&c| complete(board, &[c]))
            .collect(),
        Street::Flop => {
            let mut boards = Vec::with_capacity(deck.count() * (deck.count() - 1) / 2);
            deck.for_each(2, |cards| boards.push(complete(board, cards)));
            boards
        }
        Street::Preflop => (0..samples)
            .map(|_| complete(board, &deck.shuffled(rng).cards()[..needed]))
            .collect(),
    };

    debug!(
        "Generated {} {street} boards from {} deck cards",
        boards.len(),
        deck.count()
    );

    Ok(boards)
}

/// Completes the known board with the given cards.
fn complete(known: &[Card], cards: &[Card]) -> Board {
    assert_eq!(known.len() + cards.len(), 5);

    let mut board = [Card::default(); 5];
    board[..known.len()].copy_from_slice(known);
    board[known.len()..].copy_from_slice(cards);
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use holdem_cards::parse_cards;
    use rand::rngs::StdRng;

    fn make_hands(tokens: &[(&str, &str)]) -> Vec<PocketHand> {
        tokens
            .iter()
            .map(|(c1, c2)| PocketHand::parse(c1, c2).unwrap())
            .collect()
    }

    fn generate(hands: &[PocketHand], board: &[&str]) -> Result<Vec<Board>, EvalError> {
        let board = parse_cards(board).unwrap();
        candidate_boards(hands, &board, PREFLOP_SAMPLES, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn river_boards() {
        let hands = make_hands(&[("As", "Ks"), ("2d", "3d")]);
        let board = ["Ah", "Kh", "Qh", "Jh", "Th"];

        let boards = generate(&hands, &board).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].to_vec(), parse_cards(&board).unwrap());
    }

    #[test]
    fn turn_boards() {
        let hands = make_hands(&[("As", "Ks"), ("2d", "3d")]);
        let board = parse_cards(&["Ah", "Kh", "Qh", "Jh"]).unwrap();

        let boards = generate(&hands, &["ah", "KH", "Qh", "jH"]).unwrap();
        assert_eq!(boards.len(), 44);

        let mut rivers = HashSet::default();
        for b in &boards {
            assert_eq!(&b[..4], &board[..]);
            assert!(!board.contains(&b[4]));
            assert!(hands.iter().all(|h| !h.cards().contains(&b[4])));
            rivers.insert(b[4]);
        }
        assert_eq!(rivers.len(), 44);

        // Rivers are dealt in deck order.
        assert!(boards.windows(2).all(|w| w[0][4] < w[1][4]));
    }

    #[test]
    fn flop_boards() {
        let hands = make_hands(&[("As", "Ks"), ("2d", "3d")]);
        let board = parse_cards(&["Ah", "Kh", "Qh"]).unwrap();

        let boards = generate(&hands, &["Ah", "Kh", "Qh"]).unwrap();
        assert_eq!(boards.len(), 45 * 44 / 2);

        let mut pairs = HashSet::default();
        for b in &boards {
            assert_eq!(&b[..3], &board[..]);
            assert_ne!(b[3], b[4]);

            let mut pair = [b[3], b[4]];
            pair.sort();
            pairs.insert(pair);
        }
        assert_eq!(pairs.len(), boards.len());

        let hands = make_hands(&[("Ah", "Ks"), ("8d", "8s")]);
        let boards = generate(&hands, &["As", "7d", "2h"]).unwrap();
        assert_eq!(boards.len(), 990);
    }

    #[test]
    fn preflop_boards() {
        let hands = make_hands(&[("As", "Ks"), ("2d", "3d")]);
        let dead = hands.iter().flat_map(|h| h.cards()).collect::<Vec<_>>();

        let boards = generate(&hands, &[]).unwrap();
        assert_eq!(boards.len(), PREFLOP_SAMPLES);

        for b in &boards {
            let distinct = b.iter().collect::<HashSet<_>>();
            assert_eq!(distinct.len(), 5);
            assert!(b.iter().all(|c| !dead.contains(c)));
        }

        // Samples are independent, boards repeat only by chance.
        let distinct = boards.iter().collect::<HashSet<_>>();
        assert!(distinct.len() > PREFLOP_SAMPLES - 10);

        // Same seed same boards.
        assert_eq!(generate(&hands, &[]).unwrap(), boards);

        let mut rng = StdRng::seed_from_u64(1);
        let boards = candidate_boards(&hands, &[], 25, &mut rng).unwrap();
        assert_eq!(boards.len(), 25);
    }

    #[test]
    fn invalid_boards() {
        let hands = make_hands(&[("As", "Ks"), ("2d", "3d")]);
        assert_eq!(generate(&hands, &["Ah"]), Err(EvalError::InvalidBoard(1)));
        assert_eq!(
            generate(&hands, &["Ah", "Kh"]),
            Err(EvalError::InvalidBoard(2))
        );
        assert_eq!(
            generate(&hands, &["Ah", "Kh", "Qh", "Jh", "Th", "9h"]),
            Err(EvalError::InvalidBoard(6))
        );
    }

    #[test]
    fn deck_exhausted() {
        // 23 players hold 46 cards, the flop leaves 3 cards.
        let deck = Deck::default();
        let cards = deck.cards();
        let players = cards[..46]
            .chunks(2)
            .map(|c| PocketHand::new(c[0], c[1]))
            .collect::<Vec<_>>();

        let mut rng = StdRng::seed_from_u64(1);
        let boards = candidate_boards(&players, &cards[46..49], 1, &mut rng).unwrap();
        assert_eq!(boards.len(), 3);

        // Preflop needs 5 cards but only 6 are left, so it still works.
        assert_eq!(candidate_boards(&players, &[], 3, &mut rng).unwrap().len(), 3);

        // 25 players leave 2 cards for a preflop board.
        let players = cards[..50]
            .chunks(2)
            .map(|c| PocketHand::new(c[0], c[1]))
            .collect::<Vec<_>>();
        assert_eq!(
            candidate_boards(&players, &[], 3, &mut rng),
            Err(EvalError::DeckExhausted { needed: 5, left: 2 })
        );

        // No card left for the river.
        assert_eq!(
            candidate_boards(&players[..24], &cards[48..52], 1, &mut rng),
            Err(EvalError::DeckExhausted { needed: 1, left: 0 })
        );
    }

    #[test]
    fn street_from_board() {
        let board = parse_cards(&["Ah", "Kh", "Qh", "Jh", "Th"]).unwrap();
        assert_eq!(Street::from_board(&board[..0]), Ok(Street::Preflop));
        assert_eq!(Street::from_board(&board[..3]), Ok(Street::Flop));
        assert_eq!(Street::from_board(&board[..4]), Ok(Street::Turn));
        assert_eq!(Street::from_board(&board), Ok(Street::River));
        assert_eq!(Street::River.to_string(), "river");
    }
}
