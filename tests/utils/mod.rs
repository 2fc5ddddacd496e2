//! Shared helpers for the integration tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use pokerhands::{Card, Classification, Hand};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(pokerhands::Card::new(pokerhands::Rank::$rank, pokerhands::Suit::$suit)),*]
    };
}

// ============================================================================
// Hand Utilities
// ============================================================================

/// Parses space separated card tokens into a hand.
pub fn hand(tokens: &str) -> Hand {
    let cards: Vec<Card> = tokens
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();
    Hand::new(&cards).unwrap()
}

pub fn classified(tokens: &str) -> Classification {
    hand(tokens).classify()
}
