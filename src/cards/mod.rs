//! Cards, the draw/discard piles and player hands.
//!
//! - `Card`: a rank in `0..=12`, scoring at most 10
//! - `Deck`: face-down draw pile plus face-up discard pile
//! - `Hand`: two rows of cards with per-viewpoint visibility and scoring

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, MAX_CARD_VALUE};
pub use deck::Deck;
pub use hand::{score_cards, slot_coords, Hand, Viewpoint, NUM_ROWS};
