//! Card ranks.

use serde::{Deserialize, Serialize};

/// Highest value a single card can contribute to a score.
pub const MAX_CARD_VALUE: u32 = 10;

/// A card is just its rank; 0 is the King and ranks above 10 score as 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Scored value: the rank capped at [`MAX_CARD_VALUE`].
    #[must_use]
    pub fn value(self) -> u32 {
        (self.0 as u32).min(MAX_CARD_VALUE)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
