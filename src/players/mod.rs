//! Decision protocol and the built-in players.
//!
//! The round engine talks to players only through [`Player`]. Players that
//! can learn also implement [`Trainable`], and are handed to the engine as
//! [`Seat::Trainable`] so the engine knows to feed them weight updates.
//!
//! ## Players
//!
//! - [`RandomPlayer`]: uniform over legal moves and swap positions
//! - [`ProbabilisticPlayer`]: rule-based, values unseen cards at their mean
//! - [`crate::learning::QLearner`]: linear Q-learning over estimate features

pub mod estimate;
pub mod probabilistic;
pub mod random;

use std::path::PathBuf;

use crate::cards::Card;
use crate::core::{GameView, LegalMoves, Phase1Move, Phase2Kind, Phase2Move, Result};
use crate::learning::TrainerConfig;

pub use probabilistic::{ProbabilisticConfig, ProbabilisticPlayer};
pub use random::RandomPlayer;

/// A decision maker the round engine can seat.
///
/// Both calls must answer with a move from the supplied legal set; the
/// engine rejects anything else.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Choose between taking the face-up card, drawing face down, or knocking.
    fn turn_phase_1(&mut self, view: &GameView, legal: &[Phase1Move]) -> Phase1Move;

    /// Decide what to do with `card`, drawn in phase 1.
    fn turn_phase_2(&mut self, card: Card, view: &GameView, legal: &[Phase2Kind]) -> Phase2Move;
}

/// A player that learns from play.
pub trait Trainable: Player {
    fn is_trainable(&self) -> bool;

    /// Switch learning on or off. Turning it off keeps the weights and
    /// stops exploration until it is switched back on.
    fn set_trainable(&mut self, trainable: bool);

    /// Configure learning and switch it on.
    fn setup_trainer(&mut self, config: TrainerConfig);

    /// Observe the state ahead of the next decision (or the end of the
    /// round, with `LegalMoves::Terminal`) together with the reward earned
    /// since the previous decision.
    fn update_weights(&mut self, view: &GameView, card: Option<Card>, reward: f64, legal: &LegalMoves);

    /// Persist the current model, stamped with `epoch`. Returns where it was
    /// written.
    fn save_checkpoint(&mut self, epoch: u64) -> Result<PathBuf>;

    /// Drop anything held over from the current round. The engine calls
    /// this when a round aborts, so the next round starts without a pending
    /// decision.
    fn reset_round(&mut self) {}

    /// Hook for learning-rate schedules; `results` are the latest benchmark
    /// win counts.
    fn update_learning_rate(&mut self, _epoch: u64, _results: &[u32]) {}
}

/// A player borrowed into one round, tagged with its capabilities.
pub enum Seat<'a> {
    Basic(&'a mut dyn Player),
    Trainable(&'a mut dyn Trainable),
}

impl<'a> Seat<'a> {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Seat::Basic(p) => p.name(),
            Seat::Trainable(p) => p.name(),
        }
    }

    pub fn turn_phase_1(&mut self, view: &GameView, legal: &[Phase1Move]) -> Phase1Move {
        match self {
            Seat::Basic(p) => p.turn_phase_1(view, legal),
            Seat::Trainable(p) => p.turn_phase_1(view, legal),
        }
    }

    pub fn turn_phase_2(&mut self, card: Card, view: &GameView, legal: &[Phase2Kind]) -> Phase2Move {
        match self {
            Seat::Basic(p) => p.turn_phase_2(card, view, legal),
            Seat::Trainable(p) => p.turn_phase_2(card, view, legal),
        }
    }

    /// The learning capability, if this seat has one.
    pub fn as_trainable(&mut self) -> Option<&mut (dyn Trainable + 'a)> {
        match self {
            Seat::Basic(_) => None,
            Seat::Trainable(p) => Some(&mut **p),
        }
    }
}

/// An owned player, for drivers that seat the same players round after
/// round.
pub enum Contestant {
    Basic(Box<dyn Player>),
    Trainable(Box<dyn Trainable>),
}

impl Contestant {
    pub fn basic(player: impl Player + 'static) -> Self {
        Contestant::Basic(Box::new(player))
    }

    pub fn trainable(player: impl Trainable + 'static) -> Self {
        Contestant::Trainable(Box::new(player))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Contestant::Basic(p) => p.name(),
            Contestant::Trainable(p) => p.name(),
        }
    }

    /// Borrow this contestant as a seat for one round.
    pub fn seat(&mut self) -> Seat<'_> {
        match self {
            Contestant::Basic(p) => Seat::Basic(p.as_mut()),
            Contestant::Trainable(p) => Seat::Trainable(p.as_mut()),
        }
    }

    pub fn as_trainable(&mut self) -> Option<&mut dyn Trainable> {
        match self {
            Contestant::Basic(_) => None,
            Contestant::Trainable(p) => Some(p.as_mut()),
        }
    }
}

impl std::fmt::Debug for Contestant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Contestant::Basic(p) => f.debug_tuple("Basic").field(&p.name()).finish(),
            Contestant::Trainable(p) => f.debug_tuple("Trainable").field(&p.name()).finish(),
        }
    }
}
