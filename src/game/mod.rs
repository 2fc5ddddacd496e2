use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{Card, Hand};

pub use loader::{classify_tokens, parse_games, parse_lines, Game, GameError};
pub use runner::{MatchRunner, MatchSummary};

mod loader;
mod runner;

/// Shuffles a deck and deals two hands from it.
pub fn deal_game<R: Rng + ?Sized>(rng: &mut R) -> Game {
    let mut deck = Card::all_cards();
    deck.shuffle(rng);

    let a = Hand::from_dealt(std::array::from_fn(|idx| deck[idx]));
    let b = Hand::from_dealt(std::array::from_fn(|idx| deck[Hand::SIZE + idx]));
    Game::new(a, b)
}
