//! Talents: a character's usable moves.

use serde::{Deserialize, Serialize};

use crate::dice::Cost;
use crate::effects::Effect;

/// Identifier of a talent, unique within one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TalentId(pub u32);

impl TalentId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TalentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Talent({})", self.0)
    }
}

/// Category of a talent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentKind {
    /// Normal attack.
    Normal,
    /// Elemental skill.
    Skill,
    /// Elemental burst.
    Burst,
    /// Always-on ability; never chosen as an action.
    Passive,
}

/// A character's move: a cost and the effects it produces, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub id: TalentId,
    pub name: String,
    pub kind: TalentKind,
    pub cost: Cost,
    pub effects: Vec<Effect>,
}

impl Talent {
    /// Create a free talent with no effects.
    #[must_use]
    pub fn new(id: TalentId, name: impl Into<String>, kind: TalentKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            cost: Cost::free(),
            effects: Vec::new(),
        }
    }

    /// Set the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Check if this talent can be chosen in an attack.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.kind != TalentKind::Passive
    }
}
