//! Rule-based player driven by the expected value of unseen cards.
//!
//! Every hidden slot, in any hand, is assumed to hold a card worth the mean
//! scored value of the cards this player has not seen.
//!
//! Phase 1:
//! 1. Knock when the best opponent's estimate is at least `min_distance`
//!    worse than ours, or when either estimate is already at or below
//!    `min_distance`.
//! 2. Otherwise take the face-up card when it beats the unseen mean by more
//!    than `card_margin` and it would replace a known card worse than it.
//! 3. Otherwise draw face down.
//!
//! Phase 2: try the drawn card in every slot (and returning it, when legal)
//! and keep the option with the lowest estimated score.

use serde::{Deserialize, Serialize};

use crate::cards::{slot_coords, Card};
use crate::core::{GameView, Phase1Move, Phase2Kind, Phase2Move};

use super::estimate::{
    average_unseen, best_opponent_estimate, estimated_score, hypothetical_score, Placement,
};
use super::Player;

/// Thresholds for [`ProbabilisticPlayer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbabilisticConfig {
    /// Score lead (or absolute score) at which to knock.
    pub min_distance: f64,

    /// How much better than the unseen mean the face-up card must be.
    pub card_margin: f64,
}

impl Default for ProbabilisticConfig {
    fn default() -> Self {
        Self {
            min_distance: 8.0,
            card_margin: 1.0,
        }
    }
}

impl ProbabilisticConfig {
    #[must_use]
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    #[must_use]
    pub fn with_card_margin(mut self, card_margin: f64) -> Self {
        self.card_margin = card_margin;
        self
    }
}

/// Score estimates behind a phase-1 decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outlook {
    pub average_card: f64,
    pub own_estimate: f64,
    pub best_opponent: f64,
}

impl Outlook {
    /// How far the best opponent trails us (positive = we lead).
    #[must_use]
    pub fn score_diff(&self) -> f64 {
        self.best_opponent - self.own_estimate
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProbabilisticPlayer {
    config: ProbabilisticConfig,
}

impl ProbabilisticPlayer {
    #[must_use]
    pub fn new(config: ProbabilisticConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ProbabilisticConfig {
        &self.config
    }

    /// Estimate both sides with hidden slots valued at `average_card`.
    #[must_use]
    pub fn outlook(view: &GameView, average_card: f64) -> Outlook {
        Outlook {
            average_card,
            own_estimate: estimated_score(&view.own, average_card),
            best_opponent: best_opponent_estimate(view, average_card),
        }
    }

    fn should_knock(&self, outlook: &Outlook) -> bool {
        let threshold = self.config.min_distance;
        outlook.score_diff() >= threshold
            || outlook.own_estimate <= threshold
            || outlook.best_opponent <= threshold
    }

    fn wants_face_up(&self, view: &GameView, average_card: f64) -> bool {
        let Some(top) = view.face_up() else {
            return false;
        };
        let face_up = top.value() as f64;
        let margin = self.config.card_margin;

        average_card - margin > face_up
            && view
                .own
                .known_cards()
                .any(|card| card.value() as f64 > face_up - margin)
    }
}

impl Player for ProbabilisticPlayer {
    fn name(&self) -> &str {
        "Probabilistic Player"
    }

    fn turn_phase_1(&mut self, view: &GameView, legal: &[Phase1Move]) -> Phase1Move {
        let outlook = Self::outlook(view, average_unseen(view, None));

        if legal.contains(&Phase1Move::Knock) && self.should_knock(&outlook) {
            return Phase1Move::Knock;
        }

        let preferred = if self.wants_face_up(view, outlook.average_card) {
            Phase1Move::FaceUpCard
        } else {
            Phase1Move::FaceDownCard
        };

        if legal.contains(&preferred) {
            return preferred;
        }
        [Phase1Move::FaceUpCard, Phase1Move::FaceDownCard, Phase1Move::Knock]
            .into_iter()
            .find(|mv| legal.contains(mv))
            .unwrap_or(preferred)
    }

    fn turn_phase_2(&mut self, card: Card, view: &GameView, legal: &[Phase2Kind]) -> Phase2Move {
        let average_card = average_unseen(view, Some(card));
        let raw = &view.own.raw_cards;

        let mut options: Vec<(Phase2Move, f64)> = Vec::with_capacity(raw.len() + 1);
        if legal.contains(&Phase2Kind::Swap) {
            for index in 0..raw.len() {
                let (row, col) = slot_coords(index);
                let score = hypothetical_score(raw, Placement::Known { index, card }, average_card);
                options.push((Phase2Move::Swap { row, col }, score));
            }
        }
        if legal.contains(&Phase2Kind::ReturnToDeck) {
            let score = hypothetical_score(raw, Placement::Keep, average_card);
            options.push((Phase2Move::ReturnToDeck, score));
        }

        // Strict comparison keeps the first of equal options
        let mut best: Option<(Phase2Move, f64)> = None;
        for (mv, score) in options {
            if best.map_or(true, |(_, lowest)| score < lowest) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv)
            .unwrap_or(Phase2Move::Swap { row: 0, col: 0 })
    }
}
