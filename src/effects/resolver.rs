//! Effect resolution - executing effects on match state.
//!
//! Effects resolve one at a time with no rollback: costs and targets are
//! checked before the first effect runs. A resolved effect reports the
//! event describing its mutation; the caller broadcasts it before
//! resolving the next effect.
//!
//! Direct damage is the only effect with a full implementation. Every
//! other kind reports [`ResolveResult::NotImplemented`] and leaves the
//! state untouched.

use tracing::debug;

use super::effect::{Effect, EffectKind};
use super::trigger::TriggerContext;
use crate::cards::CardId;
use crate::characters::{CharacterId, SummonId, TalentId};
use crate::core::{Fault, PlayerState};
use crate::protocol::Event;

/// What produced an effect, for event attribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectSource {
    Talent { character: CharacterId, talent: TalentId },
    Card(CardId),
    Summon(SummonId),
}

/// The two sides an effect can touch, from the acting player's view.
pub struct ResolverContext<'a> {
    pub me: &'a mut PlayerState,
    pub opponent: &'a mut PlayerState,
    pub source: EffectSource,
}

impl<'a> ResolverContext<'a> {
    pub fn new(me: &'a mut PlayerState, opponent: &'a mut PlayerState, source: EffectSource) -> Self {
        Self { me, opponent, source }
    }
}

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// State changed; broadcast this event.
    Applied(Event),
    /// The trigger did not fire.
    Skipped,
    /// The effect kind has no execution path yet.
    NotImplemented(&'static str),
    /// The effect could not apply; nothing changed.
    Failed(Fault),
}

/// Resolves effects on player state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one effect in response to `trigger`.
    pub fn resolve(effect: &Effect, trigger: &TriggerContext, context: &mut ResolverContext) -> ResolveResult {
        if let Some(condition) = &effect.trigger {
            if !condition.fires_on(trigger) {
                debug!(effect = effect.kind.name(), ?condition, "trigger did not fire");
                return ResolveResult::Skipped;
            }
        }

        match &effect.kind {
            EffectKind::Damage { amount, .. } => Self::resolve_damage(*amount, context),
            other => ResolveResult::NotImplemented(other.name()),
        }
    }

    /// Damage the opponent's active character.
    fn resolve_damage(amount: u32, context: &mut ResolverContext) -> ResolveResult {
        let side = context.opponent.id;
        let target = match context.opponent.active_character_mut() {
            Some(character) if character.is_alive() => character,
            _ => return ResolveResult::Failed(Fault::NO_TARGET),
        };

        let damage = target.take_damage(amount);
        let (target, current) = (target.id(), target.health());
        debug!(%side, %target, damage, current, "damage");

        let event = match context.source {
            EffectSource::Talent { character, talent } => Event::Talent {
                side,
                source: character,
                talent,
                target,
                current,
                damage,
            },
            EffectSource::Card(_) | EffectSource::Summon(_) => Event::Damage { side, target, current, damage },
        };
        ResolveResult::Applied(event)
    }
}
