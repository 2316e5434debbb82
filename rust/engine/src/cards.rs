use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Declaration order is the canonical deck order used by [`full_deck`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Looks up a suit by its glyph or its ASCII letter (`s`, `h`, `d`, `c`).
    pub fn from_symbol(s: &str) -> Result<Suit, GameError> {
        match s {
            "♠" | "s" | "S" => Ok(Suit::Spades),
            "♥" | "h" | "H" => Ok(Suit::Hearts),
            "♦" | "d" | "D" => Ok(Suit::Diamonds),
            "♣" | "c" | "C" => Ok(Suit::Clubs),
            other => Err(GameError::InvalidCard(format!("unknown suit {:?}", other))),
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the rank's numeric value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Result<Rank, GameError> {
        all_ranks()
            .into_iter()
            .find(|r| r.value() == v)
            .ok_or_else(|| GameError::InvalidCard(format!("rank value {} out of range", v)))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn from_symbol(s: &str) -> Result<Rank, GameError> {
        let upper = s.to_ascii_uppercase();
        // "T" is the common single-character spelling of ten
        if upper == "T" {
            return Ok(Rank::Ten);
        }
        if let Ok(v) = upper.parse::<u8>() {
            return Rank::from_value(v);
        }
        all_ranks()
            .into_iter()
            .find(|r| r.symbol() == upper)
            .ok_or_else(|| GameError::InvalidCard(format!("unknown rank {:?}", s)))
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; hands, the board and the deck all hold copies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Builds a card from untyped suit and rank symbols, rejecting anything
    /// outside the 4 suits and 13 ranks.
    pub fn parse(suit: &str, rank: &str) -> Result<Card, GameError> {
        Ok(Card {
            suit: Suit::from_symbol(suit)?,
            rank: Rank::from_symbol(rank)?,
        })
    }

    /// Numeric rank value: 2..10 for pips, 11..14 for J, Q, K, A.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Parses a `<rank><suit>` label such as `A♠`, `10♥` or `Td`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_start = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .filter(|&i| i > 0)
            .ok_or_else(|| GameError::InvalidCard(format!("malformed card label {:?}", s)))?;
        let (rank, suit) = s.split_at(suit_start);
        Card::parse(suit, rank)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The canonical 52-card sequence, suit-major and rank-minor.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
