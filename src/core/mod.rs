//! Core types: seats, RNG, moves, configuration, projections and errors.
//!
//! These are shared by the cards, the round engine and every player.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, LegalMoves, Phase1Move, Phase1Set, Phase2Kind, Phase2Move, Phase2Set};
pub use config::{DeckSpec, RoundConfig};
pub use error::{GolfError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameView, HandView};
