pub mod basic;
pub mod compare;
pub mod hands;

pub use basic::{Card, CardError, Rank, Suit};
pub use compare::{compare, compare_hands, Outcome};
pub use hands::{classify, Category, Classification, Hand, HandError};
