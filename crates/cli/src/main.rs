// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em equity calculator CLI.
//!
//! ```bash
//! $ holdem-cli -H AhKs -H 8d8s -b As7d2h
//! AHKS  wins:      903  equity:  91.21%
//! 8D8S  wins:       87  equity:   8.79%
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, value_parser};
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use holdem_eval::{Card, Equity, EquityConfig, PREFLOP_SAMPLES, PocketHand, parse_cards};

#[derive(Debug, Parser)]
struct Cli {
    /// A player hole cards like AhKs, repeat for each player.
    #[clap(long = "hand", short = 'H', required = true)]
    hands: Vec<String>,
    /// The known board cards like As7d2h, empty for preflop.
    #[clap(long, short, default_value = "")]
    board: String,
    /// Number of random boards evaluated preflop.
    #[clap(long, short, default_value_t = PREFLOP_SAMPLES)]
    samples: usize,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for reproducible preflop boards.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let hands = cli
        .hands
        .iter()
        .map(|h| parse_hand(h))
        .collect::<Result<Vec<_>>>()?;
    let board = parse_cards(&split_tokens(&cli.board)?)?;
    check_distinct(&hands, &board)?;

    let equity = Equity::new(EquityConfig {
        samples: cli.samples,
        tasks: cli.tasks as usize,
    });

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let now = Instant::now();
    let tally = equity.par_run(&hands, &board, &mut rng)?;
    info!(
        "Evaluated {} boards with {} tasks in {:.3}s",
        tally.boards(),
        equity.config().tasks,
        now.elapsed().as_secs_f64()
    );

    for (idx, hand) in hands.iter().enumerate() {
        println!(
            "{hand}  wins: {:>8}  equity: {:>6.2}%",
            tally.wins()[idx],
            tally.equity(idx)
        );
    }

    Ok(())
}

/// Splits a string of concatenated cards like "As7d2h" into card tokens,
/// spaces and commas are ignored.
fn split_tokens(s: &str) -> Result<Vec<String>> {
    let chars = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<Vec<_>>();

    if chars.len() % 2 != 0 {
        bail!("Invalid cards {s:?}, expected <rank><suit> pairs like As7d2h");
    }

    Ok(chars.chunks(2).map(|c| c.iter().collect()).collect())
}

fn parse_hand(s: &str) -> Result<PocketHand> {
    let tokens = split_tokens(s)?;
    let [c1, c2] = tokens.as_slice() else {
        bail!("Invalid hand {s:?}, expected two cards like AhKs");
    };

    Ok(PocketHand::parse(c1, c2)?)
}

/// The evaluator expects each card to be dealt only once.
fn check_distinct(hands: &[PocketHand], board: &[Card]) -> Result<()> {
    let mut seen = Vec::with_capacity(hands.len() * 2 + board.len());
    for card in hands.iter().flat_map(|h| h.cards()).chain(board.iter().copied()) {
        if seen.contains(&card) {
            bail!("Card {card} is dealt more than once");
        }

        seen.push(card);
    }

    Ok(())
}
