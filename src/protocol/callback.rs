//! The boundary to a player front-end.

use std::future::Future;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use super::event::Event;
use super::request::{Reply, Request};

/// What the engine sends to a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Message {
    /// Information; any reply is ignored.
    Event(Event),
    /// A decision; the reply must match the request.
    Request(Request),
}

impl Message {
    #[must_use]
    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Message::Event(event) => Some(event),
            Message::Request(_) => None,
        }
    }

    #[must_use]
    pub fn as_request(&self) -> Option<&Request> {
        match self {
            Message::Request(request) => Some(request),
            Message::Event(_) => None,
        }
    }
}

/// A player front-end.
///
/// Transport, timeouts and retries all live behind this trait. `None`
/// means the player gave no answer.
///
/// Any `Fn(Message) -> impl Future<Output = Option<Reply>>` closure is a
/// callback:
///
/// ```
/// use std::sync::Arc;
/// use dice_duel::core::Action;
/// use dice_duel::protocol::{Callback, Message, Reply};
///
/// let always_end: Arc<dyn Callback> = Arc::new(|message: Message| async move {
///     message.as_request().map(|_| Reply::Action(Action::End))
/// });
/// ```
pub trait Callback: Send + Sync {
    fn call(&self, message: Message) -> BoxFuture<'static, Option<Reply>>;
}

impl<F, Fut> Callback for F
where
    F: Fn(Message) -> Fut + Send + Sync,
    Fut: Future<Output = Option<Reply>> + Send + 'static,
{
    fn call(&self, message: Message) -> BoxFuture<'static, Option<Reply>> {
        Box::pin(self(message))
    }
}
