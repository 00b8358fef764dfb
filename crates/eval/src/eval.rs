// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A hand value is a 32 bits integer made of 8 hexadecimal digits, from the
//! most significant:
//!
//! ```text
//!   +------+------+------+------+------+------+------+------+
//!   | rank |  p1  |  p2  |  k1  |  k2  |  k3  |  k4  |  k5  |
//!   +------+------+------+------+------+------+------+------+
//!   rank  = hand rank from 0 (high card) to 8 (straight flush)
//!   p1,p2 = ranks of the cards that make the hand, the pair, the trips or
//!           the quads rank in p1, the two pair or the full house ranks in
//!           p1 and p2, zero when not used
//!   k1-k5 = kickers ranks in descending order, zero padded
//! ```
//!
//! so that comparing two values compares the two hands strength, a higher
//! value is a stronger hand and equal values are a tie.
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::{Card, Suit};

/// The hand rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card
    HighCard = 0,
    /// One pair
    OnePair,
    /// Two pair
    TwoPair,
    /// Three of a kind
    ThreeOfAKind,
    /// Straight
    Straight,
    /// Flush
    Flush,
    /// Full house
    FullHouse,
    /// Four of a kind
    FourOfAKind,
    /// Straight flush
    StraightFlush,
}

impl HandRank {
    /// Number of kicker digits used to break ties between hands of this rank.
    ///
    /// For straights and flushes the kickers are the five cards that make
    /// the hand.
    pub const fn kickers(self) -> usize {
        match self {
            HandRank::HighCard => 5,
            HandRank::OnePair => 3,
            HandRank::TwoPair => 1,
            HandRank::ThreeOfAKind => 2,
            HandRank::Straight => 5,
            HandRank::Flush => 5,
            HandRank::FullHouse => 0,
            HandRank::FourOfAKind => 1,
            HandRank::StraightFlush => 5,
        }
    }

    fn from_digit(digit: u32) -> HandRank {
        match digit {
            0 => HandRank::HighCard,
            1 => HandRank::OnePair,
            2 => HandRank::TwoPair,
            3 => HandRank::ThreeOfAKind,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::FourOfAKind,
            8 => HandRank::StraightFlush,
            _ => panic!("Invalid hand rank {digit}"),
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{s}")
    }
}

/// A hand value used to compare hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates a 5, 6 or 7 cards hand.
    ///
    /// The cards must be distinct, panics if the number of cards is not
    /// 5 <= cards <= 7.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert!((5..=7).contains(&cards.len()), "5 <= cards <= 7");

        let ranks = SortedRanks::new(cards.iter());

        // With at most 7 cards there can only be one flush suit, and a hand
        // with a flush cannot make quads or a full house.
        let flush_suit =
            Suit::suits().find(|&s| cards.iter().filter(|c| c.suit() == s).count() >= 5);
        if let Some(suit) = flush_suit {
            let suited = SortedRanks::new(cards.iter().filter(|c| c.suit() == suit));
            return match find_straight(suited.as_slice()) {
                Some(run) => pack(HandRank::StraightFlush, [0, 0], run),
                None => pack(HandRank::Flush, [0, 0], suited.as_slice().iter().copied()),
            };
        }

        if let Some(run) = find_straight(ranks.as_slice()) {
            return pack(HandRank::Straight, [0, 0], run);
        }

        let counts = ranks.counts();
        let highest_with = |count: u8, skip: u8| {
            (2..=14u8)
                .rev()
                .find(|&r| r != skip && counts[r as usize] == count)
        };

        if let Some(quads) = highest_with(4, 0) {
            return pack(HandRank::FourOfAKind, [quads, 0], ranks.excluding(&[quads]));
        }

        if let Some(trips) = highest_with(3, 0) {
            // A second trips plays as the full house pair.
            let pair = (2..=14u8)
                .rev()
                .find(|&r| r != trips && counts[r as usize] >= 2);

            return match pair {
                Some(pair) => pack(HandRank::FullHouse, [trips, pair], [0u8; 0]),
                None => pack(HandRank::ThreeOfAKind, [trips, 0], ranks.excluding(&[trips])),
            };
        }

        if let Some(high_pair) = highest_with(2, 0) {
            return match highest_with(2, high_pair) {
                Some(low_pair) => pack(
                    HandRank::TwoPair,
                    [high_pair, low_pair],
                    ranks.excluding(&[high_pair, low_pair]),
                ),
                None => pack(HandRank::OnePair, [high_pair, 0], ranks.excluding(&[high_pair])),
            };
        }

        pack(HandRank::HighCard, [0, 0], ranks.as_slice().iter().copied())
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        HandRank::from_digit(self.0 >> 28)
    }

    /// The ranks values of the cards that make the hand, zero when unused.
    pub fn primary(&self) -> [u8; 2] {
        [self.digit(1), self.digit(2)]
    }

    /// The kickers ranks values, zero padded.
    pub fn kickers(&self) -> [u8; 5] {
        [
            self.digit(3),
            self.digit(4),
            self.digit(5),
            self.digit(6),
            self.digit(7),
        ]
    }

    /// The packed integer value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the nth hex digit starting from the most significant.
    fn digit(&self, n: u32) -> u8 {
        ((self.0 >> (28 - 4 * n)) & 0xF) as u8
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Packs the hand rank, the primary ranks and the first [HandRank::kickers]
/// kickers into a hand value.
fn pack<I>(rank: HandRank, primary: [u8; 2], kickers: I) -> HandValue
where
    I: IntoIterator<Item = u8>,
{
    let mut digits = [0u8; 7];
    digits[..2].copy_from_slice(&primary);
    for (d, k) in digits[2..].iter_mut().zip(kickers.into_iter().take(rank.kickers())) {
        *d = k;
    }

    HandValue(digits.iter().fold(rank as u32, |acc, &d| push_nibble(acc, d)))
}

/// Appends a 4 bits digit to the accumulator.
#[inline]
fn push_nibble(acc: u32, digit: u8) -> u32 {
    assert!(digit <= 0xF, "Digit 0x{digit:x} overflows a nibble");

    match acc.checked_mul(16).and_then(|v| v.checked_add(digit as u32)) {
        Some(v) => v,
        None => panic!("Hand value overflow 0x{acc:x}"),
    }
}

/// Returns the highest five ranks run in ranks sorted in descending order,
/// the ace also plays low in the 5-4-3-2-A wheel where it counts as 1.
fn find_straight(ranks: &[u8]) -> Option<[u8; 5]> {
    let mut mask = ranks.iter().fold(0u16, |m, &r| m | (1 << r));
    if mask & (1 << 14) != 0 {
        mask |= 1 << 1;
    }

    (5..=14u8)
        .rev()
        .find(|&high| (0..5).all(|i| mask & (1 << (high - i)) != 0))
        .map(|high| [high, high - 1, high - 2, high - 3, high - 4])
}

/// Up to 7 ranks values sorted from highest to lowest.
struct SortedRanks {
    values: [u8; 7],
    len: usize,
}

impl SortedRanks {
    fn new<'a>(cards: impl Iterator<Item = &'a Card>) -> Self {
        let mut values = [0u8; 7];
        let mut len = 0;
        for card in cards {
            values[len] = card.rank().value();
            len += 1;
        }

        values[..len].sort_unstable_by(|a, b| b.cmp(a));
        Self { values, len }
    }

    fn as_slice(&self) -> &[u8] {
        &self.values[..self.len]
    }

    /// Number of cards for each rank value.
    fn counts(&self) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &r in self.as_slice() {
            counts[r as usize] += 1;
        }

        counts
    }

    /// Ranks in descending order that are not in `skip`.
    fn excluding<'a>(&'a self, skip: &'a [u8]) -> impl Iterator<Item = u8> + 'a {
        self.as_slice().iter().copied().filter(move |r| !skip.contains(r))
    }
}
