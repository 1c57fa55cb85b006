//! Move representation for the two turn phases.
//!
//! A turn is a phase-1 choice (take the face-up card, draw face-down, or
//! knock) optionally followed by a phase-2 choice for the drawn card (swap it
//! into the hand, or return it to the discard pile).
//!
//! The engine hands players a `LegalMoves`-style set for each phase and
//! rejects any answer outside it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Phase-1 decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase1Move {
    /// Take the top card of the discard pile.
    FaceUpCard,
    /// Draw the top card of the draw pile.
    FaceDownCard,
    /// Stop exchanging; every other player gets one more turn.
    Knock,
}

/// Kind of a phase-2 decision, as offered in the legal set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase2Kind {
    Swap,
    ReturnToDeck,
}

/// Phase-2 decision for the card drawn in phase 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase2Move {
    /// Replace the hand slot at `(row, col)` with the drawn card.
    Swap { row: usize, col: usize },
    /// Put the drawn card straight onto the discard pile.
    ReturnToDeck,
}

impl Phase2Move {
    #[must_use]
    pub fn kind(self) -> Phase2Kind {
        match self {
            Phase2Move::Swap { .. } => Phase2Kind::Swap,
            Phase2Move::ReturnToDeck => Phase2Kind::ReturnToDeck,
        }
    }
}

/// Legal phase-1 set (at most three moves).
pub type Phase1Set = SmallVec<[Phase1Move; 3]>;

/// Legal phase-2 set (at most two kinds).
pub type Phase2Set = SmallVec<[Phase2Kind; 2]>;

/// The legal set that accompanies a decision or a weight update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LegalMoves {
    Phase1(Phase1Set),
    Phase2(Phase2Set),
    /// The round is over; there is no next decision.
    Terminal,
}

impl LegalMoves {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, LegalMoves::Terminal)
    }
}

/// A decision of either phase, as recorded by learning players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Phase1(Phase1Move),
    Phase2(Phase2Move),
}

impl From<Phase1Move> for Action {
    fn from(mv: Phase1Move) -> Self {
        Action::Phase1(mv)
    }
}

impl From<Phase2Move> for Action {
    fn from(mv: Phase2Move) -> Self {
        Action::Phase2(mv)
    }
}
