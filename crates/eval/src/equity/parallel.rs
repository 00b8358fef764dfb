// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel equity evaluation.
use log::debug;
use rand::prelude::*;
use std::{panic, thread};

use holdem_cards::Card;

use super::{Equity, WinTally, tally_boards};
use crate::{EvalError, board::PocketHand, candidate_boards};

impl Equity {
    /// Like [Equity::run] but tallies the boards using `tasks` parallel tasks.
    ///
    /// Boards are generated upfront with `rng` so that a seeded generator
    /// gives the same result as [Equity::run] for any number of tasks.
    pub fn par_run<R>(
        &self,
        hands: &[PocketHand],
        board: &[Card],
        rng: &mut R,
    ) -> Result<WinTally, EvalError>
    where
        R: Rng + ?Sized,
    {
        let boards = candidate_boards(hands, board, self.config.samples, rng)?;

        let num_tasks = self.config.tasks.max(1);
        let boards_per_task = boards.len().div_ceil(num_tasks).max(1);

        // Each task tallies its own boards, the tallies are added at the end.
        let tally = thread::scope(|s| {
            let tasks = boards
                .chunks(boards_per_task)
                .map(|chunk| s.spawn(move || tally_boards(hands, chunk)))
                .collect::<Vec<_>>();

            tasks
                .into_iter()
                .map(|t| t.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .fold(WinTally::new(hands.len()), |mut acc, t| {
                    acc.merge(&t);
                    acc
                })
        });

        debug!(
            "Tallied {} boards with {num_tasks} tasks: {:?}",
            tally.boards, tally.wins
        );

        Ok(tally)
    }
}
