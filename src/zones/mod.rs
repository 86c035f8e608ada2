//! Card zones owned by a player.
//!
//! ## Key Types
//!
//! - `Deck`: shuffled draw pile; draws pop from the top
//! - `Hand`: drawn cards, re-sorted on every insertion
//!
//! A card is in exactly one zone at a time. Moving it is a transfer of
//! the `Card` value, never a shared reference.

mod deck;
mod hand;

pub use deck::Deck;
pub use hand::Hand;
