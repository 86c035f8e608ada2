//! Turns and the actions taken during them.
//!
//! A turn asks the acting player for actions until they end it, concede,
//! or a side loses. Attack is the only action with a full handler; card,
//! tune and switch report that they are not implemented and change
//! nothing.
//!
//! Handlers validate everything (talent, target, dice) before the first
//! mutation, so an aborted action leaves both players untouched.

use tracing::debug;

use crate::characters::Character;
use crate::core::{Action, Fault, MatchState, PlayerState};
use crate::dice::{recommend, Element};
use crate::effects::{EffectResolver, EffectSource, ResolveResult, ResolverContext, TriggerContext};
use crate::protocol::{ActionRequest, Comms, DiceRequest, Event, TalentRequest};

/// How a turn finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TurnEnd {
    /// The acting player declared end.
    Ended,
    /// The acting player conceded. No `EndTurn` was sent.
    Conceded,
    /// A side lost during the turn.
    Decided,
}

/// Run one turn for the acting player.
pub(crate) async fn run_turn(state: &mut MatchState) -> TurnEnd {
    let side = state.me().id;
    state.comms().broadcast(&Event::StartTurn { side }).await;

    let end = loop {
        let request = ActionRequest { possible: Action::ALL.to_vec() };
        let Ok(action) = state.comms().request(request).await else {
            state.comms().report(Fault::INVALID_ACTION).await;
            continue;
        };
        state.record(side, action);

        match action {
            Action::End => {
                state.players.me_mut().declared_end = true;
                break TurnEnd::Ended;
            }
            Action::Concede => return TurnEnd::Conceded,
            Action::Attack => attack(state).await,
            Action::Card => state.comms().report(Fault::not_implemented("card")).await,
            Action::Tune => state.comms().report(Fault::not_implemented("tune")).await,
            Action::Switch => state.comms().report(Fault::not_implemented("switch")).await,
        }

        if state.loser().is_some() {
            break TurnEnd::Decided;
        }
    };

    state.comms().broadcast(&Event::EndTurn { side }).await;
    end
}

/// Use a talent of the active character: choose it, pay for it, then
/// resolve its effects against the opponent.
pub(crate) async fn attack(state: &mut MatchState) {
    let (me, opponent) = state.players.split_mut();
    let (my_channel, their_channel) = state.channels.split();
    let comms = Comms::new(my_channel, their_channel);

    let Some(character) = me.active_character() else {
        comms.report(Fault::NO_CHARACTER).await;
        return;
    };
    if !character.is_alive() {
        comms.report(Fault::DEFEATED).await;
        return;
    }

    let possible = character.usable_talents().map(|t| t.id).collect();
    let talent = match comms.request(TalentRequest { possible }).await {
        Ok(id) => character.talent(id).cloned(),
        Err(_) => None,
    };
    let Some(talent) = talent else {
        comms.report(Fault::INVALID_TALENT).await;
        return;
    };
    let character = character.id();

    let trigger = TriggerContext::Attack { talent: talent.kind, reaction: None };
    let needs_target = talent.effects.iter().any(|e| e.fires_on(&trigger) && e.kind.needs_enemy_target());
    if needs_target && !opponent.active_character().is_some_and(Character::is_alive) {
        comms.report(Fault::NO_TARGET).await;
        return;
    }

    let available = me.dice.dice().to_vec();
    let Some(recommended) = recommend(&available, &talent.cost) else {
        comms.report(Fault::NOT_ENOUGH_DICE).await;
        return;
    };
    let request = DiceRequest {
        cost: talent.cost.clone(),
        recommended: Some(recommended),
        available,
    };
    let Ok(chosen) = comms.request(request).await else {
        comms.report(Fault::INVALID_DICE).await;
        return;
    };
    if !me.dice.remove(&chosen) {
        comms.report(Fault::INVALID_DICE).await;
        return;
    }
    debug!(player = %me.id, talent = %talent.id, spent = chosen.len(), "dice spent");
    comms.broadcast(&dice_remove(me, chosen)).await;

    let source = EffectSource::Talent { character, talent: talent.id };
    for effect in &talent.effects {
        let result = EffectResolver::resolve(effect, &trigger, &mut ResolverContext::new(me, opponent, source));
        debug!(effect = effect.kind.name(), ?result, "resolved");
        match result {
            ResolveResult::Applied(event) => comms.broadcast(&event).await,
            ResolveResult::Skipped => {}
            ResolveResult::NotImplemented(feature) => comms.report(Fault::not_implemented(feature)).await,
            ResolveResult::Failed(fault) => comms.report(fault).await,
        }
        if opponent.has_lost() {
            break;
        }
    }
}

fn dice_remove(player: &PlayerState, removed: Vec<Element>) -> Event {
    Event::DiceRemove {
        side: player.id,
        current_amount: player.dice.len(),
        current: Some(player.dice.dice().to_vec()),
        amount: removed.len(),
        dice: Some(removed),
    }
}
