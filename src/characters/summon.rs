//! Summons: field objects created by effects.

use serde::{Deserialize, Serialize};

use crate::dice::Element;
use crate::effects::Effect;

/// Identifier of a summon template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SummonId(pub u32);

impl SummonId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Catalog data for a summon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonCard {
    pub id: SummonId,
    pub name: String,
    pub usages: u32,
    pub effects: Vec<Effect>,
}

/// A summon on the field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summon {
    pub card: SummonCard,
    pub usages_left: u32,
    pub infusion: Option<Element>,
}

impl Summon {
    #[must_use]
    pub fn new(card: SummonCard) -> Self {
        Self {
            usages_left: card.usages,
            card,
            infusion: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SummonId {
        self.card.id
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.usages_left == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summon_starts_with_full_usages() {
        let card = SummonCard {
            id: SummonId::new(7),
            name: "Oz".to_string(),
            usages: 2,
            effects: vec![Effect::damage(1, Element::Electro)],
        };
        let mut summon = Summon::new(card);

        assert_eq!(summon.usages_left, 2);
        assert!(!summon.is_expired());

        summon.usages_left = 0;
        assert!(summon.is_expired());
    }
}
