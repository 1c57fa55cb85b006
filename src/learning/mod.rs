//! Linear Q-learning.
//!
//! - `features`: five scenario features per candidate action
//! - `qlearner`: the learning player and its TD(0) update
//! - `checkpoint`: bincode weight files
//! - `config`: trainer hyperparameters and learner construction options

pub mod checkpoint;
pub mod config;
pub mod features;
pub mod qlearner;

pub use checkpoint::Checkpoint;
pub use config::{QLearnerConfig, TrainerConfig};
pub use features::{FeatureContext, Features, FEATURE_COUNT};
pub use qlearner::{QLearner, QState};
