//! Engine errors.
//!
//! [`EngineError`] covers failures while setting up a match (bad rosters,
//! malformed costs, unknown catalog ids). Nothing in a running match
//! returns it.
//!
//! [`Fault`] is the in-match taxonomy: a player's reply was unusable or
//! a rule path is not shipped. Faults never end a match; each one is
//! reported to the player as an `Error` event whose message is the
//! fault's `Display`.

use thiserror::Error;

use super::player::PlayerId;

/// Failure to build or validate match inputs.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid cost: {0}")]
    InvalidCost(String),

    #[error("both players use id {0}")]
    DuplicatePlayer(PlayerId),

    #[error("{0} has no characters")]
    EmptyRoster(PlayerId),

    #[error("{player} has character {character} more than once")]
    DuplicateCharacter { player: PlayerId, character: u32 },

    #[error("no {kind} with id {id} in the catalog")]
    UnknownId { kind: &'static str, id: u32 },

    #[error("{kind} id {id} registered twice")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to encode snapshot")]
    Snapshot(#[from] bincode::Error),
}

/// A recoverable in-match problem, reported to the acting player.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The reply was missing or outside the offered choices.
    #[error("{0}")]
    InvalidSelection(&'static str),

    /// The rule path exists but is not implemented.
    #[error("Not implemented yet!")]
    NotImplemented { feature: &'static str },

    /// The reply did not have the shape the request asked for.
    #[error("Wrong reply, expected {expected}!")]
    ProtocolViolation { expected: &'static str },
}

impl Fault {
    pub const INVALID_ACTION: Fault = Fault::InvalidSelection("Invalid action!");
    pub const INVALID_TALENT: Fault = Fault::InvalidSelection("Invalid talent!");
    pub const INVALID_DICE: Fault = Fault::InvalidSelection("Invalid dice!");
    pub const INVALID_CARDS: Fault = Fault::InvalidSelection("Invalid cards!");
    pub const NO_CHARACTER: Fault = Fault::InvalidSelection("No character chosen!");
    pub const INVALID_CHARACTER: Fault = Fault::InvalidSelection("Invalid character!");
    pub const NOT_ENOUGH_DICE: Fault = Fault::InvalidSelection("Not enough dice!");
    pub const NO_TARGET: Fault = Fault::InvalidSelection("No target!");
    pub const DEFEATED: Fault = Fault::InvalidSelection("Active character is defeated!");

    /// Shorthand for a not-implemented rule path.
    #[must_use]
    pub const fn not_implemented(feature: &'static str) -> Self {
        Fault::NotImplemented { feature }
    }
}
