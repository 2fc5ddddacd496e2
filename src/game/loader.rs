use std::str::FromStr;

use thiserror::Error;

use crate::cards::{classify, compare, Card, CardError, Classification, Hand, HandError, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("Expected {expected} cards, found {found}")]
    TokenCount { expected: usize, found: usize },
    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<GameError>,
    },
}

/// A game between hand A and hand B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Game {
    pub a: Hand,
    pub b: Hand,
}

impl Game {
    /// Number of card tokens on a game line.
    pub const CARDS: usize = 2 * Hand::SIZE;

    pub fn new(a: Hand, b: Hand) -> Self {
        Self { a, b }
    }

    /// Parses a line of ten card tokens, the first five are hand A.
    pub fn from_line(line: &str) -> Result<Self, GameError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != Self::CARDS {
            return Err(GameError::TokenCount {
                expected: Self::CARDS,
                found: tokens.len(),
            });
        }

        let cards = tokens
            .into_iter()
            .map(Card::from_string)
            .collect::<Result<Vec<_>, _>>()?;

        let (a, b) = cards.split_at(Hand::SIZE);
        Ok(Self::new(Hand::new(a)?, Hand::new(b)?))
    }

    /// Both hands classifications, for reporting.
    pub fn classify(&self) -> (Classification, Classification) {
        (self.a.classify(), self.b.classify())
    }

    pub fn outcome(&self) -> Outcome {
        let (a, b) = self.classify();
        compare(&a, &b)
    }
}

impl FromStr for Game {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

/// Parses each non blank line of `input` into a game, paired with its 1-based
/// line number.
pub fn parse_lines(input: &str) -> impl Iterator<Item = (usize, Result<Game, GameError>)> + '_ {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, Game::from_line(line)))
}

/// Parses all games in `input`, failing on the first malformed line.
pub fn parse_games(input: &str) -> Result<Vec<Game>, GameError> {
    parse_lines(input)
        .map(|(line, game)| {
            game.map_err(|err| GameError::Line {
                line,
                source: Box::new(err),
            })
        })
        .collect()
}

/// Classifies a hand given as card tokens, e.g. "5H 5C 6S 7S KD".
pub fn classify_tokens(tokens: &str) -> Result<Classification, GameError> {
    let cards = tokens
        .split_whitespace()
        .map(Card::from_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(classify(&cards)?)
}
