//! Match state: both players, their channels, and match progress.
//!
//! ## Perspective
//!
//! Players and channels live in two [`Pair`]s that always flip together,
//! so `me` is both the acting player and the channel that reaches them.
//! They are separate fields so the engine can mutate player state while
//! holding the channels.
//!
//! ## History
//!
//! Every handled action is appended to an `im::Vector`, which clones in
//! O(1) for callers that want to keep the history after the match.

use std::sync::Arc;

use im::Vector;
use tracing::debug;

use super::action::{Action, ActionRecord};
use super::config::MatchConfig;
use super::error::EngineError;
use super::pair::Pair;
use super::player::{PlayerId, PlayerState};
use super::rng::{GameRng, GameRngState};
use crate::protocol::{Callback, Channel, Comms};

/// Everything a running match owns.
#[derive(Debug)]
pub struct MatchState {
    pub(crate) players: Pair<PlayerState>,
    pub(crate) channels: Pair<Channel>,
    pub(crate) rng: GameRng,
    pub(crate) config: MatchConfig,
    round: u32,
    history: Vector<ActionRecord>,
}

impl MatchState {
    /// Set up a match. The first player starts as "me".
    ///
    /// Fails if the config is invalid or both players share an id.
    pub fn new(
        players: (PlayerState, PlayerState),
        callbacks: (Arc<dyn Callback>, Arc<dyn Callback>),
        config: MatchConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if players.0.id == players.1.id {
            return Err(EngineError::DuplicatePlayer(players.0.id));
        }

        let channels = Pair::new(
            Channel::new(players.0.id, callbacks.0),
            Channel::new(players.1.id, callbacks.1),
        );
        Ok(Self {
            players: Pair::new(players.0, players.1),
            channels,
            rng: GameRng::new(config.seed),
            config,
            round: 0,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The acting player.
    #[must_use]
    pub fn me(&self) -> &PlayerState {
        self.players.me()
    }

    #[must_use]
    pub fn opponent(&self) -> &PlayerState {
        self.players.opponent()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.seats().iter().find(|p| p.id == id)
    }

    /// Both players in construction order.
    #[must_use]
    pub fn players(&self) -> &[PlayerState; 2] {
        self.players.seats()
    }

    /// Hand the turn to the other side.
    pub fn flip(&mut self) {
        self.players.flip();
        self.channels.flip();
    }

    /// Channels from the acting player's perspective.
    #[must_use]
    pub fn comms(&self) -> Comms<'_> {
        let (me, opponent) = self.channels.split();
        Comms::new(me, opponent)
    }

    /// Current round, from 1. Zero before the first round starts.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    pub(crate) fn next_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    /// The first side, acting player first, with every character defeated.
    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        let (me, opponent) = self.players.split();
        [me, opponent].into_iter().find(|p| p.has_lost()).map(|p| p.id)
    }

    /// Position of the match RNG, for reproducing the rest of a match.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Append an action to the history.
    pub fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        debug!(%player, %action, round = self.round, sequence, "action");
        self.history.push_back(ActionRecord::new(player, action, self.round, sequence));
    }

    /// Every handled action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Consume the match, returning both players in construction order.
    #[must_use]
    pub fn into_players(self) -> [PlayerState; 2] {
        self.players.into_seats()
    }
}
