//! Per-player channels and the two-party view used by the engine.
//!
//! A [`Channel`] wraps one player's callback. It redacts events for its
//! player and validates replies against the request that asked for them.
//! Requests on one channel are serialized, so a player never has two
//! questions open at once.
//!
//! [`Comms`] pairs the acting player's channel with the opponent's.

use std::sync::Arc;

use futures::join;
use tokio::sync::Mutex;
use tracing::{trace, warn};

use super::callback::{Callback, Message};
use super::event::Event;
use super::request::RequestKind;
use crate::core::{Fault, PlayerId};

/// Why a request produced no usable answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cancelled {
    /// No reply at all.
    NoReply,
    /// A reply of the wrong shape.
    Malformed { expected: &'static str },
    /// A reply outside the offered choices.
    Invalid,
}

impl Cancelled {
    /// The fault to report to the player, if any. A missing reply is
    /// reported by the caller, which knows what it means at that step.
    #[must_use]
    pub fn fault(self) -> Option<Fault> {
        match self {
            Cancelled::NoReply | Cancelled::Invalid => None,
            Cancelled::Malformed { expected } => Some(Fault::ProtocolViolation { expected }),
        }
    }
}

/// One player's end of the protocol.
pub struct Channel {
    player: PlayerId,
    callback: Arc<dyn Callback>,
    gate: Mutex<()>,
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel").field("player", &self.player).finish_non_exhaustive()
    }
}

impl Channel {
    #[must_use]
    pub fn new(player: PlayerId, callback: Arc<dyn Callback>) -> Self {
        Self {
            player,
            callback,
            gate: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Deliver this player's view of `event`.
    pub async fn notify(&self, event: &Event) {
        let event = event.visible_to(self.player);
        trace!(player = %self.player, ?event, "deliver");
        // Replies to events carry no information.
        let _ = self.callback.call(Message::Event(event)).await;
    }

    /// Ask this player a question and check the answer.
    pub async fn request<R: RequestKind>(&self, request: R) -> Result<R::Reply, Cancelled> {
        let reply = {
            let _open = self.gate.lock().await;
            self.callback.call(Message::Request(request.clone().into())).await
        };

        let Some(reply) = reply else {
            warn!(player = %self.player, expected = R::REPLY, "no reply");
            return Err(Cancelled::NoReply);
        };
        let Some(answer) = R::extract(reply) else {
            let fault = Fault::ProtocolViolation { expected: R::REPLY };
            warn!(player = %self.player, %fault, "malformed reply");
            return Err(Cancelled::Malformed { expected: R::REPLY });
        };
        if !request.accepts(&answer) {
            warn!(player = %self.player, expected = R::REPLY, "reply outside the offered choices");
            return Err(Cancelled::Invalid);
        }
        Ok(answer)
    }
}

/// The acting player's channel and the opponent's.
#[derive(Clone, Copy, Debug)]
pub struct Comms<'a> {
    pub me: &'a Channel,
    pub opponent: &'a Channel,
}

impl<'a> Comms<'a> {
    #[must_use]
    pub fn new(me: &'a Channel, opponent: &'a Channel) -> Self {
        Self { me, opponent }
    }

    /// The same channels from the opponent's perspective.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self { me: self.opponent, opponent: self.me }
    }

    /// Ask the acting player.
    pub async fn request<R: RequestKind>(&self, request: R) -> Result<R::Reply, Cancelled> {
        self.me.request(request).await
    }

    /// Tell only the acting player.
    pub async fn notify(&self, event: &Event) {
        self.me.notify(event).await;
    }

    /// Tell both players and wait for both deliveries.
    pub async fn broadcast(&self, event: &Event) {
        join!(self.me.notify(event), self.opponent.notify(event));
    }

    /// Report a fault to the acting player as an `Error` event.
    pub async fn report(&self, fault: Fault) {
        warn!(player = %self.me.player(), %fault, "reported");
        self.notify(&Event::Error { message: fault.to_string() }).await;
    }
}
