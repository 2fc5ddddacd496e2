use std::collections::HashMap;
use std::fmt;

use strum_macros::EnumIter;
use thiserror::Error;

use super::basic::{Card, Rank};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid hand size: expected 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Duplicate card in hand: {0}")]
    DuplicateCard(Card),
}

/// Hand categories from the weakest to the strongest.
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
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Get the category name for display
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The category of a hand and the ranks that break ties within it, most
/// significant first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Classification {
    pub category: Category,
    pub tiebreak: Vec<Rank>,
}

impl Classification {
    fn new(category: Category, tiebreak: Vec<Rank>) -> Self {
        Self { category, tiebreak }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if !self.tiebreak.is_empty() {
            let ranks: Vec<String> = self.tiebreak.iter().map(|r| r.to_string()).collect();
            write!(f, " [{}]", ranks.join(" "))?;
        }
        Ok(())
    }
}

/// Five distinct cards.
///
/// Deserializes from a list of cards through [Hand::new], so a deserialized
/// hand is validated like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    pub const SIZE: usize = 5;

    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards = <[Card; 5]>::try_from(cards)
            .map_err(|_| HandError::InvalidHandSize(cards.len()))?;

        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    /// Builds a hand from cards dealt from a single deck, which are distinct.
    pub(crate) fn from_dealt(cards: [Card; 5]) -> Self {
        debug_assert!(Self::new(&cards).is_ok(), "Dealt duplicate cards: {cards:?}");
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    /// Returns the high card of the run if the ranks form a straight.
    ///
    /// A-2-3-4-5 is the only run where the ace counts low, its high card is
    /// the five.
    pub fn straight_high(&self) -> Option<Rank> {
        let mut ranks: Vec<Rank> = self.cards.iter().map(|c| c.rank).collect();
        ranks.sort();

        if ranks == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
            return Some(Rank::Five);
        }

        let consecutive = ranks
            .windows(2)
            .all(|pair| pair[1].value() == pair[0].value() + 1);

        consecutive.then_some(ranks[4])
    }

    fn count_ranks(&self) -> HashMap<Rank, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts
    }

    /// Rank groups as (count, rank), largest group first and higher rank
    /// first among groups of the same size.
    fn rank_groups(&self) -> Vec<(usize, Rank)> {
        let mut groups: Vec<(usize, Rank)> = self
            .count_ranks()
            .into_iter()
            .map(|(rank, count)| (count, rank))
            .collect();
        groups.sort_by(|a, b| b.cmp(a));
        groups
    }

    /// Classifies the hand, stronger categories are checked first.
    pub fn classify(&self) -> Classification {
        let mut ranks_desc: Vec<Rank> = self.cards.iter().map(|c| c.rank).collect();
        ranks_desc.sort_by(|a, b| b.cmp(a));

        let groups = self.rank_groups();
        let counts: Vec<usize> = groups.iter().map(|(count, _)| *count).collect();
        let grouped_ranks: Vec<Rank> = groups.iter().map(|(_, rank)| *rank).collect();

        let is_flush = self.is_flush();
        let straight_high = self.straight_high();

        if let (true, Some(high)) = (is_flush, straight_high) {
            if ranks_desc == [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten] {
                return Classification::new(Category::RoyalFlush, vec![]);
            }
            return Classification::new(Category::StraightFlush, vec![high]);
        }

        if counts == [4, 1] {
            return Classification::new(Category::FourKind, grouped_ranks);
        }

        if counts == [3, 2] {
            return Classification::new(Category::FullHouse, grouped_ranks);
        }

        if is_flush {
            return Classification::new(Category::Flush, ranks_desc);
        }

        if let Some(high) = straight_high {
            return Classification::new(Category::Straight, vec![high]);
        }

        if counts == [3, 1, 1] {
            return Classification::new(Category::ThreeKind, grouped_ranks);
        }

        if counts == [2, 2, 1] {
            return Classification::new(Category::TwoPair, grouped_ranks);
        }

        if counts == [2, 1, 1, 1] {
            return Classification::new(Category::OnePair, grouped_ranks);
        }

        Classification::new(Category::HighCard, ranks_desc)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        f.write_str(&cards.join(" "))
    }
}

/// Validates and classifies a five cards hand.
pub fn classify(cards: &[Card]) -> Result<Classification, HandError> {
    Ok(Hand::new(cards)?.classify())
}
