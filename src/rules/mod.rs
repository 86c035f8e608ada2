//! Match flow: preparation, rounds, turns and actions.
//!
//! The engine never interprets transport details. It talks to players
//! only through the [`Comms`](crate::protocol::Comms) of a
//! [`MatchState`](crate::core::MatchState) and returns a
//! [`MatchOutcome`] once the match is over.

mod actions;
pub mod engine;
pub mod outcome;
mod preparation;

pub use engine::{run, start, start_with_config};
pub use outcome::MatchOutcome;
