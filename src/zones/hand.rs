//! The hand: cards drawn and not yet played.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// A player's hand, kept sorted by category then name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add cards and re-sort.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.cards
            .sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
    }

    /// Remove one copy of a card.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Check that `ids` names cards in the hand, counting copies.
    #[must_use]
    pub fn contains_all(&self, ids: &[CardId]) -> bool {
        let mut available = self.ids();
        ids.iter().all(|id| match available.iter().position(|a| a == id) {
            Some(index) => {
                available.swap_remove(index);
                true
            }
            None => false,
        })
    }

    /// Ids of the cards in hand order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
