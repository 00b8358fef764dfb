// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands equity.
//!
//! Evaluates each player hand against every candidate board and credits a
//! win to every player with the best hand for that board, ties are not split
//! so each tied player gets a full win.
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use holdem_cards::{Card, parse_cards};

use crate::{
    EvalError, HandValue,
    board::{Board, PREFLOP_SAMPLES, PocketHand, candidate_boards},
};

#[cfg(feature = "parallel")]
mod parallel;

/// Per player wins over a set of boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    wins: Vec<u32>,
    boards: u32,
}

impl WinTally {
    /// Creates a zeroed tally for the given number of players.
    pub fn new(players: usize) -> Self {
        Self {
            wins: vec![0; players],
            boards: 0,
        }
    }

    /// Wins for each player, in the players order.
    pub fn wins(&self) -> &[u32] {
        &self.wins
    }

    /// Number of boards evaluated.
    pub fn boards(&self) -> u32 {
        self.boards
    }

    /// The player equity as a percentage of the boards won or tied.
    pub fn equity(&self, player: usize) -> f64 {
        if self.boards == 0 {
            return 0.0;
        }

        self.wins[player] as f64 / self.boards as f64 * 100.0
    }

    /// Adds the counts from another tally for the same players.
    pub fn merge(&mut self, other: &WinTally) {
        assert_eq!(self.wins.len(), other.wins.len());

        for (w, o) in self.wins.iter_mut().zip(&other.wins) {
            *w += o;
        }

        self.boards += other.boards;
    }

    /// Consumes the tally returning the players wins.
    pub fn into_wins(self) -> Vec<u32> {
        self.wins
    }
}

/// Equity calculation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquityConfig {
    /// Number of random boards evaluated preflop.
    pub samples: usize,
    /// Number of parallel tasks used by `Equity::par_run`.
    pub tasks: usize,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            samples: PREFLOP_SAMPLES,
            tasks: 1,
        }
    }
}

/// Equity calculator.
#[derive(Debug, Default)]
pub struct Equity {
    config: EquityConfig,
}

impl Equity {
    /// Creates a calculator with the given config.
    pub fn new(config: EquityConfig) -> Self {
        Self { config }
    }

    /// The calculator config.
    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// Generates the candidate boards and tallies the players wins.
    pub fn run<R>(
        &self,
        hands: &[PocketHand],
        board: &[Card],
        rng: &mut R,
    ) -> Result<WinTally, EvalError>
    where
        R: Rng + ?Sized,
    {
        let boards = candidate_boards(hands, board, self.config.samples, rng)?;
        let tally = tally_boards(hands, &boards);
        debug!("Tallied {} boards: {:?}", tally.boards, tally.wins);
        Ok(tally)
    }
}

/// Tallies the players wins over the given boards.
fn tally_boards(hands: &[PocketHand], boards: &[Board]) -> WinTally {
    let mut tally = WinTally::new(hands.len());
    let mut values = Vec::with_capacity(hands.len());
    let mut cards = [Card::default(); 7];

    for board in boards {
        cards[2..].copy_from_slice(board);

        values.clear();
        for hand in hands {
            cards[..2].copy_from_slice(&hand.cards());
            values.push(HandValue::eval(&cards));
        }

        if let Some(&best) = values.iter().max() {
            for (w, v) in tally.wins.iter_mut().zip(&values) {
                if *v == best {
                    *w += 1;
                }
            }
        }

        tally.boards += 1;
    }

    tally
}

/// Returns the wins for each hand over the candidate boards for the known
/// board, using the thread local random generator for preflop boards.
pub fn poker_eval(hands: &[PocketHand], board: &[Card]) -> Result<Vec<u32>, EvalError> {
    poker_eval_with_rng(hands, board, &mut rand::rng())
}

/// Returns the wins for each hand using the given random generator.
pub fn poker_eval_with_rng<R>(
    hands: &[PocketHand],
    board: &[Card],
    rng: &mut R,
) -> Result<Vec<u32>, EvalError>
where
    R: Rng + ?Sized,
{
    Equity::default()
        .run(hands, board, rng)
        .map(WinTally::into_wins)
}

/// Parses the hands and board tokens and returns the wins for each hand.
///
/// ```
/// # use holdem_eval::poker_eval_str;
/// let wins = poker_eval_str(&[("As", "Ks"), ("Ad", "Kd")], &["Ah", "Kh", "Qh", "Jh", "Th"]);
/// assert_eq!(wins, Ok(vec![1, 1]));
/// ```
pub fn poker_eval_str(hands: &[(&str, &str)], board: &[&str]) -> Result<Vec<u32>, EvalError> {
    let hands = hands
        .iter()
        .map(|(c1, c2)| PocketHand::parse(c1, c2))
        .collect::<Result<Vec<_>, _>>()?;
    let board = parse_cards(board)?;
    poker_eval(&hands, &board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::CardError;
    use rand::rngs::StdRng;

    #[test]
    fn river_wins() {
        let board = ["Ah", "Kh", "Qh", "Jh", "9s"];

        let wins = poker_eval_str(&[("As", "Ks"), ("2d", "3d")], &board);
        assert_eq!(wins, Ok(vec![1, 0]));

        let wins = poker_eval_str(&[("As", "Ks"), ("2d", "3d"), ("5h", "6h")], &board);
        assert_eq!(wins, Ok(vec![0, 0, 1]));

        let wins = poker_eval_str(&[("As", "Ks"), ("Ad", "Kd"), ("2d", "3d")], &board);
        assert_eq!(wins, Ok(vec![1, 1, 0]));
    }

    #[test]
    fn river_ties() {
        let board = ["Ah", "Kh", "Qh", "Jh", "Th"];

        let wins = poker_eval_str(&[("As", "Ks"), ("Ad", "Kd")], &board);
        assert_eq!(wins, Ok(vec![1, 1]));

        let wins = poker_eval_str(&[("As", "Ks"), ("Ad", "Kd"), ("Ac", "Kc")], &board);
        assert_eq!(wins, Ok(vec![1, 1, 1]));
    }

    #[test]
    fn flop_wins() {
        let wins = poker_eval_str(&[("Ah", "Ks"), ("8d", "8s")], &["As", "7d", "2h"]);
        assert_eq!(wins, Ok(vec![903, 87]));
    }

    #[test]
    fn turn_wins() {
        let hands = [
            PocketHand::parse("Ah", "Ks").unwrap(),
            PocketHand::parse("8d", "8s").unwrap(),
        ];
        let board = parse_cards(&["As", "7d", "2h", "Kc"]).unwrap();

        // Two pair aces and kings lose only to the two eights left.
        let tally = Equity::default()
            .run(&hands, &board, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(tally.boards(), 44);
        assert_eq!(tally.wins(), &[42, 2]);
    }

    #[test]
    fn preflop_equity() {
        let hands = [
            PocketHand::parse("Ah", "Ks").unwrap(),
            PocketHand::parse("8d", "8s").unwrap(),
        ];

        // Average a few seeded runs.
        const RUNS: u64 = 4;
        let mut tally = WinTally::new(hands.len());
        for seed in 0..RUNS {
            let run = Equity::default()
                .run(&hands, &[], &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert_eq!(run.boards() as usize, PREFLOP_SAMPLES);
            tally.merge(&run);
        }

        for (wins, expected) in tally.wins().iter().zip([4641.0, 5398.0]) {
            let avg = *wins as f64 / RUNS as f64;
            assert!(
                (avg - expected).abs() < expected * 0.05,
                "{avg} not within 5% of {expected}"
            );
        }
    }

    #[test]
    fn equity_percentages() {
        let hands = [
            PocketHand::parse("As", "Ks").unwrap(),
            PocketHand::parse("Ad", "Kd").unwrap(),
        ];
        let board = parse_cards(&["Ah", "Kh", "Qh", "Jh", "Th"]).unwrap();
        let tally = Equity::default()
            .run(&hands, &board, &mut rand::rng())
            .unwrap();
        assert_eq!(tally.equity(0), 100.0);
        assert_eq!(tally.equity(1), 100.0);

        let empty = WinTally::new(2);
        assert_eq!(empty.equity(0), 0.0);
    }

    #[test]
    fn configured_samples() {
        let hands = [
            PocketHand::parse("Ah", "Ks").unwrap(),
            PocketHand::parse("8d", "8s").unwrap(),
        ];
        let equity = Equity::new(EquityConfig {
            samples: 100,
            tasks: 1,
        });
        let tally = equity
            .run(&hands, &[], &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(tally.boards(), 100);
        assert!(tally.wins().iter().sum::<u32>() >= 100);
    }

    #[test]
    fn invalid_input() {
        let wins = poker_eval_str(&[("As", "Ks"), ("2d", "3x")], &[]);
        assert_eq!(wins, Err(EvalError::Card(CardError::InvalidSuit('x'))));

        let wins = poker_eval_str(&[("As", "Ks"), ("2d", "3d")], &["Zh", "Kh", "Qh"]);
        assert_eq!(wins, Err(EvalError::Card(CardError::InvalidRank('Z'))));

        let wins = poker_eval_str(&[("As", "Ks"), ("2d", "3d")], &["Ah", "Kh"]);
        assert_eq!(wins, Err(EvalError::InvalidBoard(2)));
    }
}
