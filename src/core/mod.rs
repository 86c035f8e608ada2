//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! This module holds the building blocks every other module uses. Match
//! flow itself lives in `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod pair;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::MatchConfig;
pub use error::{EngineError, Fault};
pub use pair::Pair;
pub use player::{PlayerId, PlayerState};
pub use rng::{GameRng, GameRngState};
pub use state::MatchState;
