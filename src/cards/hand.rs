//! A player's in-play cards.
//!
//! Cards live in one flat sequence of `2 * num_cols` slots. Slot `i` sits in
//! row `i % 2` and column `i / 2`, so the two cards of a column are adjacent.
//! Row 0 (the even slots) starts revealed to the owner.
//!
//! Two parallel flag vectors track who has seen each slot: the owner
//! (`self_revealed`) and the opponents (`opp_revealed`).

use crate::core::error::{GolfError, Result};
use crate::core::state::HandView;

use super::card::Card;

/// Rows per hand.
pub const NUM_ROWS: usize = 2;

/// `(row, col)` of slot `index` in any hand.
///
/// ```
/// use golf_rl::cards::slot_coords;
///
/// assert_eq!(slot_coords(1), (1, 0));
/// assert_eq!(slot_coords(4), (0, 2));
/// ```
#[must_use]
pub const fn slot_coords(index: usize) -> (usize, usize) {
    (index % NUM_ROWS, index / NUM_ROWS)
}

/// Whose eyes a projection is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewpoint {
    Owner,
    Opponent,
}

/// Score a card sequence whose slots may be unknown.
///
/// The sequence is split into column pairs. A pair of equal known cards
/// scores 0; otherwise every known card scores its capped value and unknown
/// cards score nothing. Works on any substituted sequence, not just a hand's
/// own cards.
///
/// ```
/// use golf_rl::cards::{score_cards, Card};
///
/// let c = |r| Some(Card::new(r));
/// assert_eq!(score_cards(&[c(2), c(2), c(2), c(2)]), 0);
/// assert_eq!(score_cards(&[c(1), c(2), c(3), c(4)]), 10);
/// assert_eq!(score_cards(&[None, c(3), c(4), None]), 7);
/// ```
#[must_use]
pub fn score_cards(cards: &[Option<Card>]) -> u32 {
    cards
        .chunks(NUM_ROWS)
        .map(|column| match column {
            [Some(a), Some(b)] if a == b => 0,
            _ => column.iter().flatten().map(|c| c.value()).sum(),
        })
        .sum()
}

/// One player's cards and who has seen them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    self_revealed: Vec<bool>,
    opp_revealed: Vec<bool>,
}

impl Hand {
    /// Create a hand from dealt cards, bottom row revealed to the owner.
    ///
    /// Fails with `InvalidConfiguration` for an empty or odd-sized deal.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        if cards.is_empty() || cards.len() % NUM_ROWS != 0 {
            return Err(GolfError::InvalidConfiguration(format!(
                "a hand needs a positive, even number of cards, got {}",
                cards.len()
            )));
        }

        let len = cards.len();
        Ok(Self {
            cards,
            self_revealed: (0..len).map(|i| i % NUM_ROWS == 0).collect(),
            opp_revealed: vec![false; len],
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.cards.len() / NUM_ROWS
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (NUM_ROWS, self.num_cols())
    }

    /// True cards, in slot order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn self_revealed(&self) -> &[bool] {
        &self.self_revealed
    }

    #[must_use]
    pub fn opp_revealed(&self) -> &[bool] {
        &self.opp_revealed
    }

    /// Map `(row, col)` to a slot index.
    pub fn coords_to_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= NUM_ROWS || col >= self.num_cols() {
            return Err(GolfError::OutOfRange {
                row,
                col,
                rows: NUM_ROWS,
                cols: self.num_cols(),
            });
        }
        Ok(col * NUM_ROWS + row)
    }

    /// Map a slot index to `(row, col)`.
    pub fn index_to_coords(&self, index: usize) -> Result<(usize, usize)> {
        if index >= self.cards.len() {
            return Err(GolfError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(slot_coords(index))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Card> {
        let index = self.coords_to_index(row, col)?;
        Ok(self.cards[index])
    }

    /// Score of the true hand, every slot known.
    #[must_use]
    pub fn score(&self) -> u32 {
        let known: Vec<Option<Card>> = self.cards.iter().copied().map(Some).collect();
        score_cards(&known)
    }

    /// Per-slot cards as seen from `viewpoint`, `None` where hidden.
    #[must_use]
    pub fn visible(&self, viewpoint: Viewpoint) -> Vec<Option<Card>> {
        let flags = self.flags(viewpoint);
        self.cards
            .iter()
            .zip(flags)
            .map(|(&card, &seen)| seen.then_some(card))
            .collect()
    }

    /// Projection of this hand for `viewpoint`.
    #[must_use]
    pub fn view(&self, viewpoint: Viewpoint) -> HandView {
        let raw_cards = self.visible(viewpoint);
        HandView {
            score: score_cards(&raw_cards),
            visible: self.flags(viewpoint).to_vec(),
            raw_cards,
            num_rows: NUM_ROWS,
            num_cols: self.num_cols(),
        }
    }

    /// Put `new_card` at `(row, col)` and return the card it replaces.
    ///
    /// The owner always sees the new card. Opponents see it only when it came
    /// from the face-up pile (`source_revealed`).
    pub fn swap(&mut self, row: usize, col: usize, new_card: Card, source_revealed: bool) -> Result<Card> {
        let index = self.coords_to_index(row, col)?;
        let old = std::mem::replace(&mut self.cards[index], new_card);
        self.self_revealed[index] = true;
        self.opp_revealed[index] = source_revealed;
        Ok(old)
    }

    fn flags(&self, viewpoint: Viewpoint) -> &[bool] {
        match viewpoint {
            Viewpoint::Owner => &self.self_revealed,
            Viewpoint::Opponent => &self.opp_revealed,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..NUM_ROWS).rev() {
            let line: Vec<String> = self
                .cards
                .iter()
                .skip(row)
                .step_by(NUM_ROWS)
                .map(Card::to_string)
                .collect();
            writeln!(f, "[{}]", line.join(", "))?;
        }
        Ok(())
    }
}
