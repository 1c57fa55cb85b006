//! Draw and discard piles.
//!
//! The draw pile is face down and drawn from the front. The discard pile is
//! face up and used from the back: its last card is the one on top.
//!
//! When the draw pile runs out, [`Deck::reshuffle_if_empty`] keeps the top
//! discard where it is and shuffles everything beneath it into a new draw
//! pile.

use std::collections::VecDeque;

use im::Vector;

use crate::core::config::DeckSpec;
use crate::core::rng::GameRng;

use super::card::Card;

/// The cards of a round that are not in any hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    draw: VecDeque<Card>,
    discard: Vector<Card>,
}

impl Deck {
    /// A full deck, shuffled, with an empty discard pile.
    #[must_use]
    pub fn shuffled(spec: &DeckSpec, rng: &mut GameRng) -> Self {
        let mut cards = spec.full_deck();
        rng.shuffle(&mut cards);
        Self {
            draw: cards.into(),
            discard: Vector::new(),
        }
    }

    /// Build a deck from explicit piles. `draw[0]` is drawn first and the
    /// last element of `discard` is face up.
    #[must_use]
    pub fn from_piles(draw: Vec<Card>, discard: Vec<Card>) -> Self {
        Self {
            draw: draw.into(),
            discard: discard.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards across both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw pile in draw order.
    pub fn draw_pile(&self) -> impl Iterator<Item = Card> + '_ {
        self.draw.iter().copied()
    }

    /// Discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard
    }

    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// Take `count` cards off the draw pile in draw order.
    ///
    /// Returns `None`, leaving the pile untouched, if there are not enough.
    pub fn deal(&mut self, count: usize) -> Option<Vec<Card>> {
        if self.draw.len() < count {
            return None;
        }
        Some(self.draw.drain(..count).collect())
    }

    /// Take the top face-down card.
    pub fn draw_face_down(&mut self) -> Option<Card> {
        self.draw.pop_front()
    }

    /// Take the face-up card.
    pub fn take_face_up(&mut self) -> Option<Card> {
        self.discard.pop_back()
    }

    /// Place a card face up on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push_back(card);
    }

    /// Turn the top draw card face up. Used once when a round starts.
    pub fn turn_up(&mut self) -> Option<Card> {
        let card = self.draw.pop_front()?;
        self.discard.push_back(card);
        Some(card)
    }

    /// Rebuild an empty draw pile from the discard pile.
    ///
    /// The current top discard stays face up on its own; the cards beneath it
    /// are shuffled into the new draw pile. Returns whether a reshuffle
    /// happened.
    pub fn reshuffle_if_empty(&mut self, rng: &mut GameRng) -> bool {
        if !self.draw.is_empty() || self.discard.len() < 2 {
            return false;
        }

        let top = self.discard.pop_back();
        let mut rest: Vec<Card> = std::mem::take(&mut self.discard).into_iter().collect();
        rng.shuffle(&mut rest);
        self.draw = rest.into();
        self.discard = top.into_iter().collect();
        true
    }
}
