//! Effect definitions.
//!
//! An [`Effect`] is one atomic mutation a talent, card or summon can
//! perform, with an optional [`Trigger`] saying when it applies. The
//! payload is a closed enum, [`EffectKind`], so adding a variant forces
//! every dispatch site to handle it.

use serde::{Deserialize, Serialize};

use super::trigger::{Trigger, TriggerContext};
use crate::characters::{StatusId, SummonId};
use crate::dice::{DiceCost, Element};

/// Which character or sideline object an effect aims at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Summon,
    Character,
    #[default]
    ActiveCharacter,
}

/// Which side of the table an effect looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Any,
    #[default]
    Friend,
    Enemy,
}

/// Direction to cycle through a roster when switching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    #[default]
    Right,
}

/// Equipment slot on a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Artifact,
}

/// What an effect does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EffectKind {
    /// Deal damage to the opponent's active character.
    Damage { amount: u32, element: Element },

    /// Restore health to a friendly character.
    Heal {
        amount: u32,
        #[serde(default)]
        target: Target,
    },

    /// Put a summon on the field.
    SummonCreate { summon: SummonId },

    /// Attach a status to a character.
    StatusApply {
        status: StatusId,
        #[serde(default)]
        target: Target,
    },

    /// Infuse the acting character's attacks with an element.
    Infuse {
        element: Element,
        #[serde(default = "one")]
        duration: u32,
    },

    /// Switch the active character on one side.
    Switch {
        location: Location,
        #[serde(default)]
        direction: Direction,
    },

    /// Increase the damage of the next attack.
    Buff { amount: u32 },

    /// Remove the owning status or summon.
    Clear,

    /// Reduce the dice cost of the next action.
    Discount { dice: Vec<DiceCost> },

    /// Decrement the usages of the owning status or summon.
    Decrement {
        #[serde(default = "one")]
        amount: u32,
    },

    /// Draw cards from the deck.
    Draw { amount: u32 },

    /// Add dice to the pool.
    AddDice { dice: Vec<DiceCost> },

    /// Destroy sideline objects.
    Destroy {
        target: Target,
        location: Location,
        #[serde(default = "one")]
        amount: u32,
    },

    /// Extend the duration of a status or summon.
    Extend {
        target: Target,
        #[serde(default)]
        location: Location,
    },

    /// Move equipment in a slot between characters.
    EquipmentShift { slot: EquipmentSlot },

    /// Add or remove energy.
    EnergyChange {
        amount: i32,
        #[serde(default)]
        target: Target,
        #[serde(default)]
        location: Location,
    },

    /// Absorb incoming damage, optionally of one element only.
    Protect {
        amount: u32,
        #[serde(default)]
        element: Option<Element>,
    },

    /// Make the current action a fast action.
    Instant,
}

fn one() -> u32 {
    1
}

impl EffectKind {
    /// Short name of the variant, for logs and not-implemented notices.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            EffectKind::Damage { .. } => "damage",
            EffectKind::Heal { .. } => "heal",
            EffectKind::SummonCreate { .. } => "summon_create",
            EffectKind::StatusApply { .. } => "status_apply",
            EffectKind::Infuse { .. } => "infuse",
            EffectKind::Switch { .. } => "switch",
            EffectKind::Buff { .. } => "buff",
            EffectKind::Clear => "clear",
            EffectKind::Discount { .. } => "discount",
            EffectKind::Decrement { .. } => "decrement",
            EffectKind::Draw { .. } => "draw",
            EffectKind::AddDice { .. } => "add_dice",
            EffectKind::Destroy { .. } => "destroy",
            EffectKind::Extend { .. } => "extend",
            EffectKind::EquipmentShift { .. } => "equipment_shift",
            EffectKind::EnergyChange { .. } => "energy_change",
            EffectKind::Protect { .. } => "protect",
            EffectKind::Instant => "instant",
        }
    }

    /// Check if the effect needs a living enemy active character.
    #[must_use]
    pub const fn needs_enemy_target(&self) -> bool {
        matches!(self, EffectKind::Damage { .. })
    }
}

/// An effect with its trigger.
///
/// ## Example
///
/// ```
/// use dice_duel::dice::Element;
/// use dice_duel::effects::{Effect, EffectKind, Trigger};
///
/// let strike = Effect::damage(3, Element::Pyro).with_trigger(Trigger::attack());
///
/// assert!(matches!(strike.kind, EffectKind::Damage { amount: 3, .. }));
/// assert!(strike.trigger.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// When the effect applies. `None` means whenever its owner resolves.
    #[serde(default)]
    pub trigger: Option<Trigger>,

    pub kind: EffectKind,
}

impl Effect {
    /// Create an effect with no trigger.
    #[must_use]
    pub const fn new(kind: EffectKind) -> Self {
        Self { trigger: None, kind }
    }

    /// Create a damage effect.
    #[must_use]
    pub const fn damage(amount: u32, element: Element) -> Self {
        Self::new(EffectKind::Damage { amount, element })
    }

    /// Create a heal effect on the active character.
    #[must_use]
    pub const fn heal(amount: u32) -> Self {
        Self::new(EffectKind::Heal { amount, target: Target::ActiveCharacter })
    }

    /// Create a draw effect.
    #[must_use]
    pub const fn draw(amount: u32) -> Self {
        Self::new(EffectKind::Draw { amount })
    }

    /// Check whether the effect applies in `context`. Effects without a
    /// trigger always do.
    #[must_use]
    pub fn fires_on(&self, context: &TriggerContext) -> bool {
        self.trigger.as_ref().map_or(true, |t| t.fires_on(context))
    }

    /// Set the trigger (builder pattern).
    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }
}
