//! Drivers that sit above single rounds.
//!
//! - **Match**: two contestants over several holes, alternating who leads
//! - **Benchmark**: a fixed number of matches, counting wins
//! - **Trainer**: training matches for a learning contestant with periodic
//!   benchmark-and-checkpoint
//!
//! ## Usage
//!
//! ```rust,no_run
//! use golf_rl::learning::{QLearner, QLearnerConfig, TrainerConfig};
//! use golf_rl::players::{Contestant, ProbabilisticPlayer, Trainable};
//! use golf_rl::training::{Match, MatchConfig, Trainer, TrainingConfig};
//!
//! let mut learner = QLearner::new(QLearnerConfig::default().with_seed(7));
//! learner.setup_trainer(TrainerConfig::new("checkpoints"));
//!
//! let arena = Match::new(
//!     Contestant::basic(ProbabilisticPlayer::default()),
//!     Contestant::trainable(learner),
//!     MatchConfig::default(),
//! );
//! let config = TrainingConfig::default().with_epochs(1000).with_checkpoint_every(100);
//! let mut trainer = Trainer::new(arena, 1, config)?;
//! trainer.train()?;
//! # Ok::<(), golf_rl::core::GolfError>(())
//! ```

pub mod benchmark;
pub mod match_play;
pub mod trainer;

pub use benchmark::{benchmark, BENCHMARK_MATCHES};
pub use match_play::{Match, MatchConfig, MatchResult};
pub use trainer::{Evaluation, Trainer, TrainingConfig};
