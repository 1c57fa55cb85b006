//! Uniform random player (baseline).

use crate::cards::Card;
use crate::core::{GameRng, GameView, Phase1Move, Phase2Kind, Phase2Move};

use super::Player;

/// Picks uniformly among legal moves, and uniformly among hand positions
/// when it swaps.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random Player"
    }

    fn turn_phase_1(&mut self, _view: &GameView, legal: &[Phase1Move]) -> Phase1Move {
        *self
            .rng
            .choose(legal)
            .expect("engine always offers at least one phase-1 move")
    }

    fn turn_phase_2(&mut self, _card: Card, view: &GameView, legal: &[Phase2Kind]) -> Phase2Move {
        let kind = *self
            .rng
            .choose(legal)
            .expect("engine always offers at least one phase-2 move");

        match kind {
            Phase2Kind::Swap => Phase2Move::Swap {
                row: self.rng.gen_range_usize(0..view.own.num_rows),
                col: self.rng.gen_range_usize(0..view.own.num_cols),
            },
            Phase2Kind::ReturnToDeck => Phase2Move::ReturnToDeck,
        }
    }
}
