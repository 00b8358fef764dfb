// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Evaluates all 7 cards hands and checks the hand ranks frequencies.
//
// ```bash
// $ cargo r --release --example eval_all7
// ```
use std::time::Instant;

use holdem_eval::*;

/// Number of 7 cards hands for each hand rank.
const EXPECTED: [(HandRank, usize); 9] = [
    (HandRank::HighCard, 23_294_460),
    (HandRank::OnePair, 58_627_800),
    (HandRank::TwoPair, 31_433_400),
    (HandRank::ThreeOfAKind, 6_461_620),
    (HandRank::Straight, 6_180_020),
    (HandRank::Flush, 4_047_644),
    (HandRank::FullHouse, 3_473_184),
    (HandRank::FourOfAKind, 224_848),
    (HandRank::StraightFlush, 41_584),
];

fn main() {
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(7, |hand| {
        counts[HandValue::eval(hand).rank() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!(
        "Evaluated {total} hands in {elapsed:.3}s ({:.0} hands/sec)\n",
        total as f64 / elapsed
    );

    for (rank, expected) in EXPECTED {
        let count = counts[rank as usize];
        let check = if count == expected { "ok" } else { "MISMATCH" };
        println!("{:<16} {count:>10}  {check}", rank.to_string());
    }
}
