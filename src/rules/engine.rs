//! Match entry points and the round loop.
//!
//! ## Flow
//!
//! 1. Preparation, both players at once: opening hand with a mulligan,
//!    starting character, starting dice with a reroll.
//! 2. A coin flip picks the starting perspective.
//! 3. Rounds until a side loses, a player concedes or the round limit is
//!    reached. Each round resets both end flags and, from round 2, draws
//!    cards for both players. Turns alternate towards whichever side has
//!    not declared end; the round ends once both have.
//!
//! Every terminal path returns its outcome right away and the outcome's
//! terminal event is the last broadcast, so nothing is mutated after it.

use std::sync::Arc;

use tracing::info;

use super::actions::{run_turn, TurnEnd};
use super::outcome::MatchOutcome;
use super::preparation::{draw_round_cards, run_preparation};
use crate::core::{EngineError, MatchConfig, MatchState, PlayerState};
use crate::protocol::{Callback, Event};

/// Run a match with default settings and a random seed.
pub async fn start(
    players: (PlayerState, PlayerState),
    callbacks: (Arc<dyn Callback>, Arc<dyn Callback>),
) -> Result<MatchOutcome, EngineError> {
    let config = MatchConfig::default().with_seed(rand::random());
    start_with_config(players, callbacks, config).await
}

/// Run a match with explicit settings.
///
/// Fails before any message is sent if the config or the players are
/// invalid.
pub async fn start_with_config(
    players: (PlayerState, PlayerState),
    callbacks: (Arc<dyn Callback>, Arc<dyn Callback>),
    config: MatchConfig,
) -> Result<MatchOutcome, EngineError> {
    let mut state = MatchState::new(players, callbacks, config)?;
    Ok(run(&mut state).await)
}

/// Run a prepared match to completion.
///
/// The state is left as the match ended, for inspecting history and
/// players afterwards.
pub async fn run(state: &mut MatchState) -> MatchOutcome {
    info!(seed = state.rng.seed(), "match start");
    run_preparation(state).await;

    if state.rng.gen_bool(0.5) {
        state.flip();
    }
    info!(first = %state.opponent().id, "coin flip");

    let outcome = loop {
        if let Some(outcome) = run_round(state).await {
            break outcome;
        }
    };
    let event = outcome.terminal_event();
    debug_assert!(event.is_terminal());
    state.comms().broadcast(&event).await;

    info!(?outcome, rounds = state.round(), "match over");
    outcome
}

/// Play one round. Returns the outcome if the match ended during it.
async fn run_round(state: &mut MatchState) -> Option<MatchOutcome> {
    let round = state.next_round();
    for player in state.players.seats_mut() {
        player.declared_end = false;
    }
    info!(round, "round start");

    let side = state.opponent().id;
    state.comms().broadcast(&Event::StartRound { side }).await;
    if round > 1 {
        draw_round_cards(state).await;
    }

    loop {
        if state.opponent().declared_end {
            if state.me().declared_end {
                break;
            }
        } else {
            state.flip();
        }

        if run_turn(state).await == TurnEnd::Conceded {
            let (by, winner) = (state.me().id, state.opponent().id);
            return Some(MatchOutcome::Conceded { by, winner });
        }
        if let Some(outcome) = decided(state) {
            return Some(outcome);
        }
    }

    let side = state.me().id;
    state.comms().broadcast(&Event::EndRound { side }).await;
    info!(round, "round end");

    if state.config().round_limit == Some(round) {
        return Some(MatchOutcome::Stalled { rounds: round });
    }
    None
}

/// The outcome if a side has no character left standing.
fn decided(state: &MatchState) -> Option<MatchOutcome> {
    let loser = state.loser()?;
    let winner = if loser == state.me().id { state.opponent().id } else { state.me().id };
    Some(MatchOutcome::Won { winner, loser })
}
