// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use ahash::AHashSet;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors returned when parsing card tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is not made of exactly two characters.
    #[error("Invalid card token {0:?}, expected <rank><suit> like \"As\"")]
    InvalidToken(String),
    /// The rank character is not one of 23456789TJQKA.
    #[error("Invalid card rank {0:?}")]
    InvalidRank(char),
    /// The suit character is not one of HDCS.
    #[error("Invalid card suit {0:?}")]
    InvalidSuit(char),
}

/// A Poker card.
///
/// Cards are ordered by rank and then by suit, this is the same order used by
/// the canonical [Deck].
#[derive(
    Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Parses a two characters token like "As" or "th", case insensitive.
    pub fn parse(token: &str) -> Result<Card, CardError> {
        let mut chars = token.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidToken(token.to_string()));
        };

        let rank = Rank::from_char(r).ok_or(CardError::InvalidRank(r))?;
        let suit = Suit::from_char(s).ok_or(CardError::InvalidSuit(s))?;
        Ok(Card::new(rank, suit))
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Parses a list of card tokens.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, CardError> {
    tokens.iter().map(|t| Card::parse(t.as_ref())).collect()
}

/// Card rank.
///
/// The discriminant is the rank value used to compare hands, with the ace
/// ranking high.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rank {
    /// Deuce
    #[default]
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    pub const fn value(self) -> u8 {
        self as u8
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Suit {
    /// Hearts suit.
    #[default]
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits in deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a canonical deck without the `dead` cards.
    pub fn without(dead: &[Card]) -> Self {
        let dead = dead.iter().collect::<AHashSet<_>>();
        let cards = Deck::default()
            .cards
            .into_iter()
            .filter(|c| !dead.contains(c))
            .collect();
        Self { cards }
    }

    /// Returns a shuffled copy of this deck.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The deck cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards combination.
    ///
    /// Combinations are visited in lexicographic deck order, each one exactly
    /// once. Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; 7];
        for (i, p) in pos.iter_mut().enumerate() {
            *p = i;
        }

        let mut h = [Card::default(); 7];
        loop {
            for (c, &p) in h.iter_mut().zip(&pos[..k]) {
                *c = self.cards[p];
            }

            f(&h[..k]);

            // Advance the rightmost position that has room to move.
            let Some(i) = (0..k).rev().find(|&i| pos[i] != i + n - k) else {
                break;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
