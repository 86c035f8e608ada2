//! Shared fixtures: a scripted player and small rosters.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;

use dice_duel::cards::{Card, CardCategory, CardId};
use dice_duel::characters::{Character, CharacterCard, CharacterId, Talent, TalentId, TalentKind};
use dice_duel::core::{Action, GameRng, PlayerId, PlayerState};
use dice_duel::dice::{Cost, Element};
use dice_duel::effects::Effect;
use dice_duel::protocol::{Callback, Event, Message, Reply, Request};

/// A player that answers from a script and records every message.
///
/// Turn requests (action, talent, dice) take the next scripted reply.
/// Once the script runs out the player takes the queued turn actions,
/// then ends turns. Talents and dice default to the first offered
/// talent and the recommended dice. Preparation
/// requests have fixed answers: keep the hand, keep the dice, first
/// character.
pub struct ScriptedPlayer {
    script: Mutex<VecDeque<Option<Reply>>>,
    turn_actions: Mutex<VecDeque<Action>>,
    mulligan: Option<Reply>,
    reroll: Option<Reply>,
    character: Option<Option<Reply>>,
    messages: Mutex<Vec<Message>>,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            turn_actions: Mutex::new(VecDeque::new()),
            mulligan: Some(Reply::Cards(Vec::new())),
            reroll: Some(Reply::Indices(Vec::new())),
            character: None,
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Replies for turn requests, in order. `None` sends no reply.
    pub fn with_script(self, replies: impl IntoIterator<Item = Option<Reply>>) -> Self {
        self.script.lock().unwrap().extend(replies);
        self
    }

    /// Scripted actions, each answered with that action.
    pub fn with_actions(self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.with_script(actions.into_iter().map(|a| Some(Reply::Action(a))))
    }

    /// Actions taken after the script, with default talents and dice.
    pub fn with_turn_actions(self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.turn_actions.lock().unwrap().extend(actions);
        self
    }

    pub fn with_mulligan(mut self, reply: Option<Reply>) -> Self {
        self.mulligan = reply;
        self
    }

    pub fn with_reroll(mut self, reply: Option<Reply>) -> Self {
        self.reroll = reply;
        self
    }

    pub fn with_character(mut self, reply: Option<Reply>) -> Self {
        self.character = Some(reply);
        self
    }

    pub fn into_callback(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.messages().into_iter().filter_map(|m| m.as_event().cloned()).collect()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.messages().into_iter().filter_map(|m| m.as_request().cloned()).collect()
    }

    /// Messages of every `Error` event received.
    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    fn answer(&self, request: &Request) -> Option<Reply> {
        match request {
            Request::CardsChange(_) => self.mulligan.clone(),
            Request::DiceChange(_) => self.reroll.clone(),
            Request::Character(r) => match &self.character {
                Some(reply) => reply.clone(),
                None => r.possible.first().copied().map(Reply::Character),
            },
            Request::Action(_) | Request::Talent(_) | Request::Dice(_) => {
                if let Some(reply) = self.script.lock().unwrap().pop_front() {
                    return reply;
                }
                match request {
                    Request::Talent(r) => r.possible.first().copied().map(Reply::Talent),
                    Request::Dice(r) => r.recommended.clone().map(Reply::Dice),
                    _ => {
                        let action = self.turn_actions.lock().unwrap().pop_front();
                        Some(Reply::Action(action.unwrap_or(Action::End)))
                    }
                }
            }
        }
    }
}

impl Callback for ScriptedPlayer {
    fn call(&self, message: Message) -> BoxFuture<'static, Option<Reply>> {
        let reply = message.as_request().and_then(|r| self.answer(r));
        self.messages.lock().unwrap().push(message);
        Box::pin(async move { reply })
    }
}

pub const STRIKE: TalentId = TalentId(1);
pub const BLOCK: TalentId = TalentId(2);

/// A character with one normal attack and one passive.
pub fn fighter(id: u32, max_health: u32, damage: u32, cost: Cost) -> Character {
    let strike = Talent::new(STRIKE, "Strike", TalentKind::Normal)
        .with_cost(cost)
        .with_effect(Effect::damage(damage, Element::Physical));
    let block = Talent::new(BLOCK, "Block", TalentKind::Passive);
    Character::new(
        CharacterCard::new(CharacterId::new(id), format!("Fighter {id}"), Element::Pyro, max_health)
            .with_talent(strike)
            .with_talent(block),
    )
}

/// `size` copies of the same card.
pub fn deck(size: usize) -> Vec<Card> {
    (0..size).map(|_| Card::new(CardId::new(1), "Paimon", CardCategory::Support)).collect()
}

/// A player with a 30-card deck.
pub fn player(id: u8, roster: Vec<Character>) -> PlayerState {
    PlayerState::new(PlayerId::new(id), roster, deck(30), &mut GameRng::new(u64::from(id))).unwrap()
}

/// Both players with a single free 3-damage fighter at 10 health.
pub fn duel() -> (PlayerState, PlayerState) {
    (
        player(0, vec![fighter(1, 10, 3, Cost::free())]),
        player(1, vec![fighter(1, 10, 3, Cost::free())]),
    )
}

/// Send engine logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn callbacks(a: &Arc<ScriptedPlayer>, b: &Arc<ScriptedPlayer>) -> (Arc<dyn Callback>, Arc<dyn Callback>) {
    (a.clone() as Arc<dyn Callback>, b.clone() as Arc<dyn Callback>)
}

/// Sides of every `StartTurn`, in order.
pub fn turn_order(events: &[Event]) -> Vec<PlayerId> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::StartTurn { side } => Some(*side),
            _ => None,
        })
        .collect()
}
