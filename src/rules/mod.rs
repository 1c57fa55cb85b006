//! The round engine.
//!
//! [`Board`] deals one round, runs the turn state machine against the seated
//! players and returns the final scores.

pub mod board;

pub use board::{round_reward, Board, RoundPhase};
