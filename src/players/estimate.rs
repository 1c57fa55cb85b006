//! Stateless estimates shared by the rule-based and learning players.
//!
//! Everything here is a pure function of a [`GameView`]: the distribution of
//! cards the viewer has not seen, score estimates that value hidden slots at
//! a substitute value, and hypothetical scores after placing a card.
//!
//! All values use the capped convention (`min(rank, 10)`).

use crate::cards::{score_cards, Card, MAX_CARD_VALUE};
use crate::core::{GameView, HandView};

/// Mean and spread of the scored values of unseen cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnseenStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

/// Scored values of every card the viewer has not seen.
///
/// `in_hand` is a drawn card the viewer holds but that is in neither the
/// hand nor the discard pile yet.
#[must_use]
pub fn unseen_values(view: &GameView, in_hand: Option<Card>) -> Vec<u32> {
    let mut seen = vec![0usize; view.deck.ranks as usize];
    for card in view.seen_cards().chain(in_hand) {
        if let Some(count) = seen.get_mut(card.rank() as usize) {
            *count += 1;
        }
    }

    seen.iter()
        .enumerate()
        .flat_map(|(rank, &count)| {
            let left = (view.deck.copies as usize).saturating_sub(count);
            std::iter::repeat(Card::new(rank as u8).value()).take(left)
        })
        .collect()
}

/// Mean and population standard deviation of the unseen values.
///
/// The mean equals `(deck value - seen value) / (deck size - seen count)`.
/// With nothing unseen both are 0.
#[must_use]
pub fn unseen_stats(view: &GameView, in_hand: Option<Card>) -> UnseenStats {
    let values = unseen_values(view, in_hand);
    if values.is_empty() {
        return UnseenStats {
            count: 0,
            mean: 0.0,
            std_dev: 0.0,
        };
    }

    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;

    UnseenStats {
        count: values.len(),
        mean,
        std_dev: variance.sqrt(),
    }
}

/// Mean scored value of the unseen cards.
#[must_use]
pub fn average_unseen(view: &GameView, in_hand: Option<Card>) -> f64 {
    unseen_stats(view, in_hand).mean
}

/// Value a hidden slot is assumed to score, clamped to a card's range.
#[must_use]
pub fn slot_value(unknown_value: f64) -> f64 {
    unknown_value.clamp(0.0, MAX_CARD_VALUE as f64)
}

/// A hand's visible score plus every hidden slot valued at `unknown_value`.
#[must_use]
pub fn estimated_score(hand: &HandView, unknown_value: f64) -> f64 {
    hand.score as f64 + hand.unknown_count() as f64 * slot_value(unknown_value)
}

/// Lowest estimated opponent score, or 0 with no opponents.
#[must_use]
pub fn best_opponent_estimate(view: &GameView, unknown_value: f64) -> f64 {
    view.opponents
        .iter()
        .map(|hand| estimated_score(hand, unknown_value))
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Where a hypothetical card goes before scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Leave the hand as it is.
    Keep,
    /// Put a known card at a slot.
    Known { index: usize, card: Card },
    /// Put a card of unknown value at a slot.
    Unknown { index: usize },
}

/// Score of `raw` after applying `placement`, hidden slots valued at
/// `unknown_value`. Placements outside the hand are ignored.
#[must_use]
pub fn hypothetical_score(raw: &[Option<Card>], placement: Placement, unknown_value: f64) -> f64 {
    let mut cards = raw.to_vec();
    match placement {
        Placement::Keep => {}
        Placement::Known { index, card } => {
            if let Some(slot) = cards.get_mut(index) {
                *slot = Some(card);
            }
        }
        Placement::Unknown { index } => {
            if let Some(slot) = cards.get_mut(index) {
                *slot = None;
            }
        }
    }

    let unknown = cards.iter().filter(|c| c.is_none()).count();
    score_cards(&cards) as f64 + unknown as f64 * slot_value(unknown_value)
}
