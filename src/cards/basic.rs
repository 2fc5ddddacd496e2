use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Invalid rank: {0:?}")]
    InvalidRank(String),
    #[error("Invalid suit: {0:?}")]
    InvalidSuit(String),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
}

/// Card suit, only used to detect flushes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    EnumIter,
)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Spades => "S",
                Suit::Clubs => "C",
                Suit::Hearts => "H",
                Suit::Diamonds => "D",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "S" => Ok(Suit::Spades),
            "C" => Ok(Suit::Clubs),
            "H" => Ok(Suit::Hearts),
            "D" => Ok(Suit::Diamonds),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

/// Card rank, the discriminant is the rank value with the ace high.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    EnumIter,
)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// The numeric value of this rank, 2 to 14.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

impl TryFrom<&str> for Rank {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(CardError::InvalidRank(s.to_string())),
        }
    }
}

/// A playing card.
///
/// Cards are ordered by rank, cards with the same rank are ordered by suit so
/// that the ordering agrees with equality. The suit order carries no meaning
/// when ranking hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            other => other,
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from separate rank ("A", "2".."10", "T", "J", "Q", "K")
    /// and suit ("S", "C", "H", "D") tokens.
    pub fn from_tokens(rank: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    /// Parses a card token like "KS", "TD" or "10H", the last character is
    /// the suit.
    pub fn from_string(s: &str) -> Result<Self, CardError> {
        match s.char_indices().last() {
            Some((split, _)) if split > 0 => Self::from_tokens(&s[..split], &s[split..]),
            _ => Err(CardError::InvalidCard(s.to_string())),
        }
    }

    /// The 52 cards of a standard deck.
    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
