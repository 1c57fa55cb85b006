//! Round configuration types.
//!
//! - `DeckSpec`: deck composition (ranks × copies)
//! - `RoundConfig`: everything the round engine needs besides its players
//!
//! Both are plain data with builder-style setters and serde support.

use serde::{Deserialize, Serialize};

use super::error::{GolfError, Result};
use crate::cards::Card;

/// Deck composition: every rank `0..ranks` appears `copies` times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    pub ranks: u8,
    pub copies: u8,
}

impl Default for DeckSpec {
    fn default() -> Self {
        Self {
            ranks: 13,
            copies: 4,
        }
    }
}

impl DeckSpec {
    /// Number of cards in a full deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.ranks as usize * self.copies as usize
    }

    /// Sum of scored (capped) values across the full deck.
    ///
    /// ```
    /// use golf_rl::core::DeckSpec;
    ///
    /// assert_eq!(DeckSpec::default().total_value(), 300);
    /// ```
    #[must_use]
    pub fn total_value(&self) -> u32 {
        (0..self.ranks)
            .map(|r| Card::new(r).value() * self.copies as u32)
            .sum()
    }

    /// The unshuffled deck, rank-major.
    #[must_use]
    pub fn full_deck(&self) -> Vec<Card> {
        (0..self.ranks)
            .flat_map(|r| std::iter::repeat(Card::new(r)).take(self.copies as usize))
            .collect()
    }
}

/// Configuration for one round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Columns per hand; each hand holds `2 * num_cols` cards.
    pub num_cols: usize,

    /// Narrate turns at `info` level instead of `debug`.
    pub verbose: bool,

    pub deck: DeckSpec,

    /// End the round after this many turns even if nobody knocked.
    pub turn_limit: Option<usize>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            num_cols: 2,
            verbose: false,
            deck: DeckSpec::default(),
            turn_limit: None,
        }
    }
}

impl RoundConfig {
    pub fn new(num_cols: usize) -> Self {
        Self {
            num_cols,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: DeckSpec) -> Self {
        self.deck = deck;
        self
    }

    #[must_use]
    pub fn with_turn_limit(mut self, turns: usize) -> Self {
        self.turn_limit = Some(turns);
        self
    }

    /// Cards dealt to each hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.num_cols * 2
    }

    /// Check that a round with `player_count` seats can be dealt.
    ///
    /// The deck must cover every hand plus the initial face-up card.
    pub fn validate(&self, player_count: usize) -> Result<()> {
        if player_count < 2 {
            return Err(GolfError::InvalidConfiguration(format!(
                "a round needs at least 2 players, got {player_count}"
            )));
        }
        if self.num_cols == 0 {
            return Err(GolfError::InvalidConfiguration(
                "hands need at least one column".into(),
            ));
        }
        let needed = player_count * self.hand_size() + 1;
        if self.deck.size() < needed {
            return Err(GolfError::InvalidConfiguration(format!(
                "deck of {} cards cannot deal {} hands of {} plus a face-up card",
                self.deck.size(),
                player_count,
                self.hand_size()
            )));
        }
        Ok(())
    }
}
