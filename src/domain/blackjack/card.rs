//! Playing cards and a single shuffled deck.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

/// Ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Card suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    const fn glyph(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

/// A playing card. Rank is 1-based: 1 is Ace, 11-13 are Jack, Queen, King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == 1
    }

    /// Blackjack points with aces counted as 11.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self.rank {
            1 => 11,
            r if r >= 10 => 10,
            r => r,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            r => r.to_string(),
        };
        write!(f, "{rank}{}", self.suit.glyph())
    }
}

/// Cards remaining to be dealt, drawn from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    // Stored reversed so drawing pops from the end.
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh shuffled 52-card deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = standard_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    /// A deck that deals `cards` in the given order.
    #[must_use]
    pub fn stacked(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    /// Deal the next card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

fn standard_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=RANKS_PER_SUIT).map(move |rank| Card::new(rank, suit)))
        .collect()
}
