//! Training loop for a learning contestant.
//!
//! Each epoch is one match with learning on. Epochs are counted over the
//! life of the trainer, so calling [`Trainer::train`] again carries on from
//! where the previous run stopped. At every checkpoint the
//! trainee's learning is switched off, both contestants are benchmarked, the
//! result is recorded and passed to the learning-rate hook, learning is
//! switched back on and the model is saved stamped with the epoch.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GolfError, Result};

use super::benchmark::{benchmark, BENCHMARK_MATCHES};
use super::match_play::{Match, MatchResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Training matches to play.
    pub epochs: u64,

    /// Checkpoint every this many epochs; `None` checkpoints only at the end.
    pub checkpoint_every: Option<u64>,

    /// Matches per benchmark evaluation.
    pub eval_matches: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 1,
            checkpoint_every: None,
            eval_matches: BENCHMARK_MATCHES,
        }
    }
}

impl TrainingConfig {
    #[must_use]
    pub fn with_epochs(mut self, epochs: u64) -> Self {
        self.epochs = epochs;
        self
    }

    #[must_use]
    pub fn with_checkpoint_every(mut self, every: u64) -> Self {
        self.checkpoint_every = Some(every);
        self
    }

    #[must_use]
    pub fn with_eval_matches(mut self, matches: usize) -> Self {
        self.eval_matches = matches;
        self
    }

    fn is_checkpoint(&self, completed: u64) -> bool {
        self.checkpoint_every
            .is_some_and(|every| every > 0 && completed % every == 0)
    }
}

/// Outcome of one checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Epochs completed when the checkpoint was taken.
    pub epoch: u64,
    /// Benchmark wins per contestant.
    pub wins: [u32; 2],
    pub checkpoint: PathBuf,
}

#[derive(Debug)]
pub struct Trainer {
    arena: Match,
    trainee: usize,
    config: TrainingConfig,
    /// Epochs played across every `train` call.
    completed: u64,
    history: Vec<Evaluation>,
}

impl Trainer {
    /// Train contestant `trainee` (0 or 1) of `arena`.
    ///
    /// Fails with `InvalidConfiguration` if that contestant cannot learn.
    pub fn new(mut arena: Match, trainee: usize, config: TrainingConfig) -> Result<Self> {
        let learns = trainee < 2 && arena.contestant_mut(trainee).as_trainable().is_some();
        if !learns {
            return Err(GolfError::InvalidConfiguration(format!(
                "contestant {trainee} is not trainable"
            )));
        }
        Ok(Self {
            arena,
            trainee,
            config,
            completed: 0,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn history(&self) -> &[Evaluation] {
        &self.history
    }

    #[must_use]
    pub fn completed(&self) -> u64 {
        self.completed
    }

    #[must_use]
    pub fn arena(&self) -> &Match {
        &self.arena
    }

    #[must_use]
    pub fn into_match(self) -> Match {
        self.arena
    }

    /// Run `epochs` more epochs, checkpointing as configured and once at the
    /// end.
    pub fn train(&mut self) -> Result<&[Evaluation]> {
        let start = self.completed;
        let mut last_checkpoint = None;

        for epoch in start..start + self.config.epochs {
            let MatchResult { totals } = self.arena.play_match(epoch)?;
            info!(epoch, ?totals, "training match");

            self.completed = epoch + 1;
            if self.config.is_checkpoint(self.completed - start) {
                self.checkpoint(self.completed)?;
                last_checkpoint = Some(self.completed);
            }
        }

        if last_checkpoint != Some(self.completed) {
            self.checkpoint(self.completed)?;
        }
        Ok(&self.history)
    }

    /// Benchmark with learning off, then save the trainee stamped `epoch`.
    pub fn checkpoint(&mut self, epoch: u64) -> Result<&Evaluation> {
        self.set_learning(false);
        let wins = benchmark(&mut self.arena, self.config.eval_matches);
        self.set_learning(true);
        let wins = wins?;

        let trainee = self.trainee_mut()?;
        trainee.update_learning_rate(epoch, &wins);
        let checkpoint = trainee.save_checkpoint(epoch)?;

        info!(epoch, ?wins, path = %checkpoint.display(), "checkpoint");
        self.history.push(Evaluation {
            epoch,
            wins,
            checkpoint,
        });
        Ok(&self.history[self.history.len() - 1])
    }

    fn set_learning(&mut self, on: bool) {
        if let Ok(trainee) = self.trainee_mut() {
            trainee.set_trainable(on);
        }
    }

    fn trainee_mut(&mut self) -> Result<&mut dyn crate::players::Trainable> {
        let index = self.trainee;
        self.arena
            .contestant_mut(index)
            .as_trainable()
            .ok_or_else(|| GolfError::InvalidConfiguration(format!("contestant {index} is not trainable")))
    }
}
