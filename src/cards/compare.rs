use std::cmp::Ordering;

use super::basic::Card;
use super::hands::{classify, Classification, HandError};

/// The result of comparing hand A against hand B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    AWins,
    BWins,
    Draw,
}

impl Outcome {
    /// The outcome seen from the other side.
    pub fn reverse(self) -> Self {
        match self {
            Outcome::AWins => Outcome::BWins,
            Outcome::BWins => Outcome::AWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Outcome::AWins,
            Ordering::Less => Outcome::BWins,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Compares two classified hands, by category and then by tie-break ranks.
///
/// Panics if both hands have the same category but tie-break keys of
/// different lengths, the classifier never produces them.
pub fn compare(a: &Classification, b: &Classification) -> Outcome {
    let ordering = match a.category.cmp(&b.category) {
        Ordering::Equal => {
            assert_eq!(
                a.tiebreak.len(),
                b.tiebreak.len(),
                "Tie-break length mismatch for {}: {a} vs {b}",
                a.category
            );
            a.tiebreak.cmp(&b.tiebreak)
        }
        other => other,
    };

    Outcome::from(ordering)
}

/// Classifies and compares two five cards hands.
pub fn compare_hands(a: &[Card], b: &[Card]) -> Result<Outcome, HandError> {
    let a = classify(a)?;
    let b = classify(b)?;
    Ok(compare(&a, &b))
}
