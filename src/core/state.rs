//! Per-player projections of the round state.
//!
//! ## HandView
//!
//! One hand as seen from a viewpoint: the owner sees slots they have
//! revealed, an opponent sees only slots revealed to opponents. Hidden slots
//! are `None`.
//!
//! ## GameView
//!
//! Everything a player receives for a decision: their own hand, each
//! opponent's hand, the discard pile and whether anyone has knocked.
//!
//! Views are built fresh by the engine for every call and own their data.
//! The discard pile is an `im` persistent vector, so copying it into each
//! view is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::DeckSpec;
use crate::cards::Card;

/// One hand from a single viewpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    /// Score of the slots visible from this viewpoint (unknowns count 0).
    pub score: u32,

    /// Per-slot revealed flags for this viewpoint.
    pub visible: Vec<bool>,

    /// Per-slot card if revealed, else `None`.
    pub raw_cards: Vec<Option<Card>>,

    pub num_rows: usize,
    pub num_cols: usize,
}

impl HandView {
    /// Number of slots hidden from this viewpoint.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.raw_cards.iter().filter(|c| c.is_none()).count()
    }

    /// Iterate over the revealed cards.
    pub fn known_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.raw_cards.iter().flatten().copied()
    }
}

/// A player's projection of the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The requesting player's own hand.
    pub own: HandView,

    /// Every other hand, in seat order starting after the requester.
    pub opponents: Vec<HandView>,

    /// Discard pile; the last element is the face-up card.
    pub deck_up: Vector<Card>,

    pub has_knocked: bool,

    /// Composition of the deck in play.
    pub deck: DeckSpec,
}

impl GameView {
    /// The card currently face up, if any.
    #[must_use]
    pub fn face_up(&self) -> Option<Card> {
        self.deck_up.last().copied()
    }

    /// Every card the requester can currently see: own revealed slots,
    /// opponents' revealed slots and the discard pile.
    pub fn seen_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.own
            .known_cards()
            .chain(self.opponents.iter().flat_map(HandView::known_cards))
            .chain(self.deck_up.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(raw: &[Option<u8>]) -> HandView {
        let raw_cards: Vec<Option<Card>> = raw.iter().map(|c| c.map(Card::new)).collect();
        HandView {
            score: 0,
            visible: raw_cards.iter().map(Option::is_some).collect(),
            raw_cards,
            num_rows: 2,
            num_cols: raw.len() / 2,
        }
    }

    #[test]
    fn test_unknown_count() {
        let hand = view(&[Some(1), None, Some(3), None]);
        assert_eq!(hand.unknown_count(), 2);
        assert_eq!(hand.known_cards().map(Card::rank).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_seen_cards_and_face_up() {
        let game = GameView {
            own: view(&[Some(1), None, Some(3), None]),
            opponents: vec![view(&[None, Some(12), None, None])],
            deck_up: Vector::from(vec![Card::new(5), Card::new(7)]),
            has_knocked: false,
            deck: DeckSpec::default(),
        };

        assert_eq!(game.face_up(), Some(Card::new(7)));
        let seen: Vec<u8> = game.seen_cards().map(Card::rank).collect();
        assert_eq!(seen, vec![1, 3, 12, 5, 7]);
    }
}
