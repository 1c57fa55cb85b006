//! Learning configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Hyperparameters and checkpoint location for training a learning player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Directory checkpoints are written to.
    pub checkpoint_dir: PathBuf,

    /// Step size for weight updates.
    pub learning_rate: f64,

    /// Probability of a uniformly random action while training.
    pub epsilon: f64,

    /// Weight of the next state's value in the TD target.
    pub discount: f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            checkpoint_dir: PathBuf::from("checkpoints"),
            learning_rate: 0.1,
            epsilon: 0.1,
            discount: 0.9,
        }
    }
}

impl TrainerConfig {
    pub fn new(checkpoint_dir: impl Into<PathBuf>) -> Self {
        Self {
            checkpoint_dir: checkpoint_dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }
}

/// Construction options for [`super::QLearner`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QLearnerConfig {
    /// Checkpoint to start from; zero weights when absent or unreadable.
    pub model_path: Option<PathBuf>,

    /// Seed for exploration.
    pub seed: u64,
}

impl QLearnerConfig {
    #[must_use]
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
