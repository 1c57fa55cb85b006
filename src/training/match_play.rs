//! Multi-hole matches between two contestants.
//!
//! A match is `holes` rounds. The contestant who moves first alternates every
//! hole, offset by the match index so consecutive matches start from
//! different seats. Totals are kept per contestant; the lower total wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, Result, RoundConfig};
use crate::players::Contestant;
use crate::rules::Board;

/// Settings for a [`Match`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Rounds per match.
    pub holes: usize,

    /// Columns per hand in every round.
    pub num_cols: usize,

    pub seed: u64,

    pub verbose: bool,

    /// Turn cap applied to every round.
    pub turn_limit: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            holes: 9,
            num_cols: 2,
            seed: 0,
            verbose: false,
            turn_limit: None,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_holes(mut self, holes: usize) -> Self {
        self.holes = holes;
        self
    }

    #[must_use]
    pub fn with_num_cols(mut self, num_cols: usize) -> Self {
        self.num_cols = num_cols;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_turn_limit(mut self, turns: usize) -> Self {
        self.turn_limit = Some(turns);
        self
    }

    /// Configuration for each round of the match.
    #[must_use]
    pub fn round_config(&self) -> RoundConfig {
        let config = RoundConfig::new(self.num_cols).with_verbose(self.verbose);
        match self.turn_limit {
            Some(turns) => config.with_turn_limit(turns),
            None => config,
        }
    }
}

/// Accumulated scores of one match, indexed like the contestants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub totals: [u32; 2],
}

impl MatchResult {
    /// Index of the contestant with the lower total, `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        let [a, b] = self.totals;
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(0),
            std::cmp::Ordering::Greater => Some(1),
            std::cmp::Ordering::Equal => None,
        }
    }
}

pub struct Match {
    contestants: [Contestant; 2],
    config: MatchConfig,
    rng: GameRng,
}

impl Match {
    #[must_use]
    pub fn new(first: Contestant, second: Contestant, config: MatchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            contestants: [first, second],
            config,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn contestants(&self) -> &[Contestant; 2] {
        &self.contestants
    }

    /// # Panics
    ///
    /// If `index` is not 0 or 1.
    pub fn contestant_mut(&mut self, index: usize) -> &mut Contestant {
        &mut self.contestants[index]
    }

    #[must_use]
    pub fn into_contestants(self) -> [Contestant; 2] {
        self.contestants
    }

    /// Play every hole of match number `match_index`.
    pub fn play_match(&mut self, match_index: u64) -> Result<MatchResult> {
        let round_config = self.config.round_config();
        let mut result = MatchResult::default();

        for hole in 0..self.config.holes {
            let lead = ((hole as u64 + match_index) % 2) as usize;
            let [a, b] = &mut self.contestants;
            let seats = if lead == 0 {
                vec![a.seat(), b.seat()]
            } else {
                vec![b.seat(), a.seat()]
            };

            let mut board = Board::new(seats, round_config.clone(), self.rng.fork())?;
            let scores = board.play_game()?;
            for (seat, score) in scores.into_iter().enumerate() {
                result.totals[(lead + seat) % 2] += score;
            }
        }

        debug!(match_index, totals = ?result.totals, "match finished");
        Ok(result)
    }

    /// Play `k` independent matches and count wins per contestant. Ties
    /// count for neither.
    pub fn play_k_matches(&mut self, k: usize) -> Result<[u32; 2]> {
        let mut wins = [0u32; 2];
        for index in 0..k {
            if let Some(winner) = self.play_match(index as u64)?.winner() {
                wins[winner] += 1;
            }
        }
        Ok(wins)
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("contestants", &self.contestants)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
