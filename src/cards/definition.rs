//! Card definitions - static card data.
//!
//! A deck is a list of [`Card`] values. Copies of the same catalog card
//! share a [`CardId`]; moving a card between deck and hand moves the
//! value itself.

use serde::{Deserialize, Serialize};

use crate::dice::Cost;
use crate::effects::Effect;

/// Catalog identifier of a card.
///
/// This identifies the "type" of card, not a specific copy in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card category.
///
/// Declaration order is the order cards are grouped in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardCategory {
    Character,
    Event,
    Support,
    Weapon,
    Artifact,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use dice_duel::cards::{Card, CardCategory, CardId};
/// use dice_duel::dice::{Cost, DiceCost};
/// use dice_duel::effects::Effect;
///
/// let card = Card::new(CardId::new(1), "Paimon", CardCategory::Support)
///     .with_cost(Cost::new([DiceCost::matching(3)]).unwrap())
///     .with_effect(Effect::draw(1));
///
/// assert_eq!(card.cost.total(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub category: CardCategory,
    pub cost: Cost,
    pub effects: Vec<Effect>,
}

impl Card {
    /// Create a free card with no effects.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, category: CardCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
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
}
