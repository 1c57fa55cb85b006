//! # golf-rl
//!
//! A round engine for the two-row card game Golf, a decision protocol for
//! pluggable players, and a linear Q-learning player trained by TD(0).
//!
//! ## Design Principles
//!
//! 1. **Imperfect information**: players only ever receive a [`GameView`]
//!    built for them. Hidden cards are `None`.
//!
//! 2. **Explicit capabilities**: a seat is either [`Seat::Basic`] or
//!    [`Seat::Trainable`]; the engine only feeds learning updates to the
//!    latter.
//!
//! 3. **Injected randomness**: every shuffle and every random choice comes
//!    from a seeded [`GameRng`], so rounds are reproducible.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, moves, configuration, projections, errors
//! - `cards`: cards, draw/discard piles, hands and scoring
//! - `rules`: the round engine (`Board`)
//! - `players`: the decision protocol and the built-in players
//! - `learning`: features, the Q-learning player, checkpoints
//! - `training`: matches, benchmarks and the training loop
//!
//! ## Example
//!
//! ```
//! use golf_rl::{Board, GameRng, ProbabilisticPlayer, RandomPlayer, RoundConfig, Seat};
//!
//! let mut random = RandomPlayer::with_seed(1);
//! let mut heuristic = ProbabilisticPlayer::default();
//! let seats = vec![Seat::Basic(&mut random), Seat::Basic(&mut heuristic)];
//!
//! let mut board = Board::new(seats, RoundConfig::default(), GameRng::new(42))?;
//! let scores = board.play_game()?;
//! assert_eq!(scores.len(), 2);
//! # Ok::<(), golf_rl::GolfError>(())
//! ```

pub mod cards;
pub mod core;
pub mod learning;
pub mod players;
pub mod rules;
pub mod training;

// Re-export commonly used types
pub use crate::core::{
    Action, DeckSpec, GameRng, GameView, GolfError, HandView, LegalMoves, Phase1Move, Phase2Kind,
    Phase2Move, PlayerId, PlayerMap, Result, RoundConfig,
};

pub use crate::cards::{score_cards, Card, Deck, Hand, Viewpoint};

pub use crate::rules::{Board, RoundPhase};

pub use crate::players::{
    Contestant, Player, ProbabilisticConfig, ProbabilisticPlayer, RandomPlayer, Seat, Trainable,
};

pub use crate::learning::{Checkpoint, QLearner, QLearnerConfig, QState, TrainerConfig};

pub use crate::training::{Match, MatchConfig, MatchResult, Trainer, TrainingConfig};
