//! Player-engine communication protocol.
//!
//! The engine talks to each player through an opaque async [`Callback`]:
//! it sends a [`Message`] (an [`Event`] or a [`Request`]) and awaits an
//! optional [`Reply`].
//!
//! ## Guarantees
//!
//! - Events are redacted per recipient: counts stay visible, identities
//!   of cards and dice the recipient does not own are removed.
//! - At most one request is open per player at a time.
//! - A broadcast waits for both players before the engine moves on.
//! - A missing, malformed or out-of-range reply cancels the current
//!   choice. It never ends the match.

mod callback;
mod channel;
mod event;
mod request;

pub use callback::{Callback, Message};
pub use channel::{Cancelled, Channel, Comms};
pub use event::Event;
pub use request::{
    ActionRequest, CardsChangeRequest, CharacterRequest, DiceChangeRequest, DiceRequest, Reply,
    Request, RequestKind, TalentRequest,
};
