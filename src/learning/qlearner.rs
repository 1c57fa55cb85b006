//! Linear Q-learning player.
//!
//! The action value is a dot product of learned weights with the five
//! [`features`](super::features) of the candidate action. Decisions are
//! epsilon-greedy while training and greedy otherwise. Each decision caches
//! a [`QState`]; the next `update_weights` call consumes it with a TD(0)
//! step towards `reward + discount * max Q(next)`.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::cards::{slot_coords, Card};
use crate::core::{
    Action, GameRng, GameView, GolfError, LegalMoves, Phase1Move, Phase2Kind, Phase2Move, Result,
};
use crate::players::estimate::Placement;
use crate::players::{Player, Trainable};

use super::checkpoint::{self, Checkpoint};
use super::config::{QLearnerConfig, TrainerConfig};
use super::features::{dot, FeatureContext, Features, FEATURE_COUNT};

/// The features, value and action of one decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QState {
    pub features: Features,
    pub value: f64,
    pub action: Action,
}

/// A scored candidate move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate<M> {
    pub mv: M,
    pub features: Features,
    pub value: f64,
}

pub struct QLearner {
    weights: Features,
    trainer: Option<TrainerConfig>,
    trainable: bool,
    epsilon: f64,
    archived_epsilon: Option<f64>,
    cached: Option<QState>,
    /// Epoch the current training run counts from.
    epoch_base: u64,
    last_epoch: Option<u64>,
    rng: GameRng,
}

impl QLearner {
    /// Create a learner, starting from `config.model_path` when it can be
    /// read and from zero weights otherwise.
    #[must_use]
    pub fn new(config: QLearnerConfig) -> Self {
        let mut learner = Self::with_weights([0.0; FEATURE_COUNT], config.seed);

        if let Some(path) = &config.model_path {
            match checkpoint::load(path) {
                Ok(loaded) => {
                    info!(path = %path.display(), epoch = loaded.epoch, "loaded model");
                    learner.weights = loaded.weights;
                    learner.epoch_base = loaded.epoch;
                    learner.last_epoch = Some(loaded.epoch);
                }
                Err(err) => {
                    warn!(%err, "starting from zero weights");
                }
            }
        }

        learner
    }

    /// Create a learner with explicit weights and no trainer.
    #[must_use]
    pub fn with_weights(weights: Features, seed: u64) -> Self {
        Self {
            weights,
            trainer: None,
            trainable: false,
            epsilon: 0.0,
            archived_epsilon: None,
            cached: None,
            epoch_base: 0,
            last_epoch: None,
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn weights(&self) -> &Features {
        &self.weights
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn trainer(&self) -> Option<&TrainerConfig> {
        self.trainer.as_ref()
    }

    #[must_use]
    pub fn epoch_base(&self) -> u64 {
        self.epoch_base
    }

    /// The Q-state of the latest decision not yet consumed by an update.
    #[must_use]
    pub fn cached_state(&self) -> Option<&QState> {
        self.cached.as_ref()
    }

    #[must_use]
    pub fn action_value(&self, features: &Features) -> f64 {
        dot(&self.weights, features)
    }

    fn candidate<M>(&self, mv: M, features: Features) -> Candidate<M> {
        Candidate {
            mv,
            value: self.action_value(&features),
            features,
        }
    }

    /// Best-valued placement over every hand slot; first slot wins ties.
    fn best_placement<M: Copy>(
        &self,
        ctx: &FeatureContext,
        view: &GameView,
        mv: M,
        placement: impl Fn(usize) -> Placement,
    ) -> Candidate<M> {
        let raw = &view.own.raw_cards;
        (0..raw.len())
            .map(|index| self.candidate(mv, ctx.features(raw, placement(index))))
            .reduce(|best, c| if c.value > best.value { c } else { best })
            .unwrap_or_else(|| self.candidate(mv, ctx.features(raw, Placement::Keep)))
    }

    /// Score every legal phase-1 move. Drawing is valued as the best swap
    /// the drawn card could make.
    #[must_use]
    pub fn phase1_candidates(&self, view: &GameView, legal: &[Phase1Move]) -> Vec<Candidate<Phase1Move>> {
        let ctx = FeatureContext::new(view, None);
        let raw = &view.own.raw_cards;

        legal
            .iter()
            .map(|&mv| match mv {
                Phase1Move::Knock => self.candidate(mv, ctx.features(raw, Placement::Keep)),
                Phase1Move::FaceUpCard => match view.face_up() {
                    Some(card) => self.best_placement(&ctx, view, mv, |index| Placement::Known { index, card }),
                    None => self.candidate(mv, ctx.features(raw, Placement::Keep)),
                },
                Phase1Move::FaceDownCard => {
                    self.best_placement(&ctx, view, mv, |index| Placement::Unknown { index })
                }
            })
            .collect()
    }

    /// Score every legal phase-2 move, fanning swaps out over every slot.
    #[must_use]
    pub fn phase2_candidates(
        &self,
        view: &GameView,
        card: Option<Card>,
        legal: &[Phase2Kind],
    ) -> Vec<Candidate<Phase2Move>> {
        let ctx = FeatureContext::new(view, card);
        let raw = &view.own.raw_cards;
        let mut candidates = Vec::with_capacity(raw.len() + 1);

        for &kind in legal {
            match kind {
                Phase2Kind::Swap => {
                    for index in 0..raw.len() {
                        let (row, col) = slot_coords(index);
                        let placement = match card {
                            Some(card) => Placement::Known { index, card },
                            None => Placement::Unknown { index },
                        };
                        candidates.push(self.candidate(Phase2Move::Swap { row, col }, ctx.features(raw, placement)));
                    }
                }
                Phase2Kind::ReturnToDeck => {
                    candidates.push(self.candidate(Phase2Move::ReturnToDeck, ctx.features(raw, Placement::Keep)));
                }
            }
        }
        candidates
    }

    /// Value of the greedy action in a state; 0 once the round is over.
    #[must_use]
    pub fn best_value(&self, view: &GameView, card: Option<Card>, legal: &LegalMoves) -> f64 {
        let values: Vec<f64> = match legal {
            LegalMoves::Terminal => return 0.0,
            LegalMoves::Phase1(moves) => self.phase1_candidates(view, moves).iter().map(|c| c.value).collect(),
            LegalMoves::Phase2(kinds) => self
                .phase2_candidates(view, card, kinds)
                .iter()
                .map(|c| c.value)
                .collect(),
        };
        values.into_iter().reduce(f64::max).unwrap_or(0.0)
    }

    /// Epsilon-greedy choice; caches the chosen Q-state.
    fn choose<M: Copy + Into<Action>>(&mut self, candidates: &[Candidate<M>]) -> Option<M> {
        if candidates.is_empty() {
            return None;
        }

        let explore = self.trainable && self.epsilon > 0.0 && self.rng.gen_bool(self.epsilon);
        let index = if explore {
            self.rng.gen_range_usize(0..candidates.len())
        } else {
            greedy_index(candidates)
        };

        let chosen = candidates[index];
        self.cached = Some(QState {
            features: chosen.features,
            value: chosen.value,
            action: chosen.mv.into(),
        });
        Some(chosen.mv)
    }

    /// One TD(0) step on `previous`. Returns the TD error, or `None` when
    /// no trainer is configured.
    pub fn td_update(&mut self, previous: &QState, next_value: f64, reward: f64) -> Option<f64> {
        let trainer = self.trainer.as_ref()?;
        let delta = reward + trainer.discount * next_value - previous.value;
        let step = trainer.learning_rate * delta;

        for (w, f) in self.weights.iter_mut().zip(previous.features) {
            *w += step * f;
        }
        debug!(delta, reward, next_value, weights = ?self.weights, "td update");
        Some(delta)
    }
}

/// Index of the first maximum value.
fn greedy_index<M>(candidates: &[Candidate<M>]) -> usize {
    let mut best = 0;
    for (i, c) in candidates.iter().enumerate().skip(1) {
        if c.value > candidates[best].value {
            best = i;
        }
    }
    best
}

impl Player for QLearner {
    fn name(&self) -> &str {
        "Q-Learning Player"
    }

    fn turn_phase_1(&mut self, view: &GameView, legal: &[Phase1Move]) -> Phase1Move {
        let candidates = self.phase1_candidates(view, legal);
        self.choose(&candidates)
            .expect("engine always offers at least one phase-1 move")
    }

    fn turn_phase_2(&mut self, card: Card, view: &GameView, legal: &[Phase2Kind]) -> Phase2Move {
        let candidates = self.phase2_candidates(view, Some(card), legal);
        self.choose(&candidates)
            .expect("engine always offers at least one phase-2 move")
    }
}

impl Trainable for QLearner {
    fn is_trainable(&self) -> bool {
        self.trainable
    }

    fn set_trainable(&mut self, trainable: bool) {
        if trainable == self.trainable {
            return;
        }
        if trainable {
            if let Some(epsilon) = self.archived_epsilon.take() {
                self.epsilon = epsilon;
            }
        } else {
            self.archived_epsilon = Some(self.epsilon);
            self.epsilon = 0.0;
        }
        self.trainable = trainable;
    }

    fn setup_trainer(&mut self, config: TrainerConfig) {
        self.epsilon = config.epsilon;
        self.archived_epsilon = None;
        self.trainer = Some(config);
        self.trainable = true;
        // A new training run continues from the latest stamped epoch
        if let Some(last) = self.last_epoch {
            self.epoch_base = last;
        }
    }

    fn update_weights(&mut self, view: &GameView, card: Option<Card>, reward: f64, legal: &LegalMoves) {
        let Some(previous) = self.cached.take() else {
            return;
        };
        if !self.trainable {
            return;
        }
        let next_value = self.best_value(view, card, legal);
        self.td_update(&previous, next_value, reward);
    }

    fn reset_round(&mut self) {
        if self.cached.take().is_some() {
            debug!("dropped pending decision");
        }
    }

    fn save_checkpoint(&mut self, epoch: u64) -> Result<PathBuf> {
        let trainer = self.trainer.as_ref().ok_or(GolfError::TrainerNotConfigured)?;
        // Stamps strictly increase for the life of the learner
        let stamped = match self.last_epoch {
            Some(last) => (self.epoch_base + epoch).max(last + 1),
            None => self.epoch_base + epoch,
        };
        let path = trainer
            .checkpoint_dir
            .join(checkpoint::file_name(checkpoint::unix_timestamp(), stamped));

        checkpoint::save(
            &path,
            &Checkpoint {
                weights: self.weights,
                epoch: stamped,
            },
        )?;
        self.last_epoch = Some(stamped);

        info!(path = %path.display(), epoch = stamped, "saved checkpoint");
        Ok(path)
    }
}

impl std::fmt::Debug for QLearner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QLearner")
            .field("weights", &self.weights)
            .field("trainable", &self.trainable)
            .field("epsilon", &self.epsilon)
            .finish_non_exhaustive()
    }
}
