use std::fmt;

use tracing::{debug, info, warn};

use super::loader::{parse_lines, Game, GameError};
use crate::cards::{compare, Outcome};

/// Win and draw counts over a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchSummary {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::AWins => self.first_wins += 1,
            Outcome::BWins => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.first_wins + self.second_wins + self.draws
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player 1 wins: {}, Player 2 wins: {}, Draws: {}",
            self.first_wins, self.second_wins, self.draws
        )
    }
}

/// Plays every game of a match and counts the results.
#[derive(Debug, Clone, Default)]
pub struct MatchRunner {
    skip_malformed: bool,
}

impl MatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip malformed game lines instead of failing the whole match.
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = skip;
        self
    }

    pub fn run(&self, games: &[Game]) -> MatchSummary {
        let mut summary = MatchSummary::default();

        for (idx, game) in games.iter().enumerate() {
            let (a, b) = game.classify();
            let outcome = compare(&a, &b);
            debug!(
                game = idx + 1,
                hand_a = %game.a,
                hand_b = %game.b,
                class_a = %a,
                class_b = %b,
                outcome = ?outcome,
                "Compared hands"
            );
            summary.record(outcome);
        }

        info!(
            games = summary.total(),
            first_wins = summary.first_wins,
            second_wins = summary.second_wins,
            draws = summary.draws,
            "Match finished"
        );
        summary
    }

    /// Parses and runs a match given as text, one game per line.
    pub fn run_input(&self, input: &str) -> Result<MatchSummary, GameError> {
        let mut games = Vec::new();

        for (line, game) in parse_lines(input) {
            match game {
                Ok(game) => games.push(game),
                Err(err) if self.skip_malformed => {
                    warn!(line, error = %err, "Skipping malformed game");
                }
                Err(err) => {
                    return Err(GameError::Line {
                        line,
                        source: Box::new(err),
                    })
                }
            }
        }

        Ok(self.run(&games))
    }
}
