// Five cards poker hands evaluator
// This file exposes the public API for callers and integration tests

pub mod cards;
pub mod game;

// Re-export commonly used types
pub use cards::{
    classify, compare, compare_hands, Card, CardError, Category, Classification, Hand, HandError,
    Outcome, Rank, Suit,
};
pub use game::{deal_game, parse_games, Game, GameError, MatchRunner, MatchSummary};
