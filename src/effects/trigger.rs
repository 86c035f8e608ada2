//! Effect triggers.
//!
//! A [`Trigger`] is declared on an effect; a [`TriggerContext`] describes
//! what just happened. [`Trigger::fires_on`] decides whether the effect
//! applies. Attack resolution only ever builds an attack context, so
//! effects bound to other moments (round start, switching, deploying)
//! never fire from a talent.

use serde::{Deserialize, Serialize};

use crate::characters::TalentKind;
use crate::dice::Element;

/// Elemental reactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    /// Pyro + Hydro
    Vaporize,
    /// Pyro + Cryo
    Melt,
    /// Electro + Hydro
    ElectroCharged,
    /// Electro + Pyro
    Overloaded,
    /// Electro + Cryo
    Superconduct,
    /// Hydro + Cryo
    Frozen,
    /// Dendro + Pyro
    Burning,
    /// Dendro + Hydro
    Bloom,
    /// Dendro + Electro
    Quicken,
    /// Anemo + any
    Swirl,
    /// Geo + any
    Crystallize,
}

/// When an effect applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// On an attack, optionally only for one talent kind or reaction.
    Attack {
        #[serde(default)]
        talent: Option<TalentKind>,
        #[serde(default)]
        reaction: Option<Reaction>,
    },

    /// On damage within `[minimum, maximum]`, optionally of one element.
    Damage {
        #[serde(default)]
        minimum: Option<u32>,
        #[serde(default)]
        maximum: Option<u32>,
        #[serde(default)]
        element: Option<Element>,
    },

    /// When the owner runs out of usages.
    Depleted,
    /// At the start of a round.
    Start,
    /// At the end of a round.
    End,
    /// When the active character switches.
    Switch,
    /// On any elemental reaction.
    Reaction,
    /// When the owner enters play.
    Deploy,
}

impl Trigger {
    /// Trigger on any attack.
    #[must_use]
    pub const fn attack() -> Self {
        Trigger::Attack { talent: None, reaction: None }
    }

    /// Trigger on attacks with one talent kind.
    #[must_use]
    pub const fn attack_with(talent: TalentKind) -> Self {
        Trigger::Attack { talent: Some(talent), reaction: None }
    }

    /// Check whether this trigger fires for `context`.
    #[must_use]
    pub fn fires_on(&self, context: &TriggerContext) -> bool {
        match (self, context) {
            (
                Trigger::Attack { talent, reaction },
                TriggerContext::Attack { talent: used, reaction: caused },
            ) => {
                talent.map_or(true, |t| t == *used)
                    && reaction.map_or(true, |r| Some(r) == *caused)
            }

            (
                Trigger::Damage { minimum, maximum, element },
                TriggerContext::Damage { amount, element: dealt },
            ) => {
                minimum.map_or(true, |min| *amount >= min)
                    && maximum.map_or(true, |max| *amount <= max)
                    && element.map_or(true, |e| e == *dealt)
            }

            (Trigger::Reaction, TriggerContext::Reaction(_)) => true,
            (Trigger::Depleted, TriggerContext::Depleted) => true,
            (Trigger::Start, TriggerContext::RoundStart) => true,
            (Trigger::End, TriggerContext::RoundEnd) => true,
            (Trigger::Switch, TriggerContext::Switch) => true,
            (Trigger::Deploy, TriggerContext::Deploy) => true,

            _ => false,
        }
    }
}

/// What just happened, for trigger evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerContext {
    Attack { talent: TalentKind, reaction: Option<Reaction> },
    Damage { amount: u32, element: Element },
    Reaction(Reaction),
    Depleted,
    RoundStart,
    RoundEnd,
    Switch,
    Deploy,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack(talent: TalentKind) -> TriggerContext {
        TriggerContext::Attack { talent, reaction: None }
    }

    #[test]
    fn test_any_attack() {
        assert!(Trigger::attack().fires_on(&attack(TalentKind::Normal)));
        assert!(Trigger::attack().fires_on(&attack(TalentKind::Burst)));
    }

    #[test]
    fn test_attack_talent_filter() {
        let trigger = Trigger::attack_with(TalentKind::Skill);
        assert!(trigger.fires_on(&attack(TalentKind::Skill)));
        assert!(!trigger.fires_on(&attack(TalentKind::Normal)));
    }

    #[test]
    fn test_attack_reaction_filter() {
        let trigger = Trigger::Attack { talent: None, reaction: Some(Reaction::Melt) };
        assert!(!trigger.fires_on(&attack(TalentKind::Normal)));
        assert!(trigger.fires_on(&TriggerContext::Attack {
            talent: TalentKind::Normal,
            reaction: Some(Reaction::Melt),
        }));
    }

    #[test]
    fn test_damage_threshold() {
        let trigger = Trigger::Damage { minimum: Some(3), maximum: None, element: None };
        let hit = |amount| TriggerContext::Damage { amount, element: Element::Pyro };

        assert!(!trigger.fires_on(&hit(2)));
        assert!(trigger.fires_on(&hit(3)));
        assert!(trigger.fires_on(&hit(9)));
    }

    #[test]
    fn test_damage_element_filter() {
        let trigger = Trigger::Damage { minimum: None, maximum: Some(2), element: Some(Element::Hydro) };

        assert!(trigger.fires_on(&TriggerContext::Damage { amount: 1, element: Element::Hydro }));
        assert!(!trigger.fires_on(&TriggerContext::Damage { amount: 1, element: Element::Pyro }));
        assert!(!trigger.fires_on(&TriggerContext::Damage { amount: 3, element: Element::Hydro }));
    }

    #[test]
    fn test_lifecycle_triggers_ignore_attacks() {
        for trigger in [Trigger::Start, Trigger::End, Trigger::Switch, Trigger::Deploy, Trigger::Depleted] {
            assert!(!trigger.fires_on(&attack(TalentKind::Normal)));
        }
        assert!(Trigger::Start.fires_on(&TriggerContext::RoundStart));
    }

    #[test]
    fn test_trigger_serialization() {
        let json = r#"{"type":"attack","talent":"burst"}"#;
        let trigger: Trigger = serde_json::from_str(json).unwrap();
        assert_eq!(trigger, Trigger::attack_with(TalentKind::Burst));
    }
}
