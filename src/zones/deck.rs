//! The draw pile.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::GameRng;

/// A player's deck. The top of the deck is the end of the list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck and shuffle it.
    #[must_use]
    pub fn new(cards: Vec<Card>, rng: &mut GameRng) -> Self {
        let mut deck = Self { cards };
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw up to `amount` cards from the top.
    pub fn draw(&mut self, amount: usize) -> Vec<Card> {
        let amount = amount.min(self.cards.len());
        let mut drawn = self.cards.split_off(self.cards.len() - amount);
        drawn.reverse();
        drawn
    }

    /// Put cards back on top, unshuffled.
    pub fn put_back(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ids of the cards in deck order, bottom first.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCategory;

    fn cards(n: u32) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(CardId::new(i), format!("Card {i}"), CardCategory::Event))
            .collect()
    }

    #[test]
    fn test_draw_pops_from_top() {
        let mut deck = Deck { cards: cards(5) };

        let drawn = deck.draw(2);

        let ids: Vec<_> = drawn.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![4, 3]);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_draw_more_than_deck() {
        let mut deck = Deck { cards: cards(2) };
        assert_eq!(deck.draw(5).len(), 2);
        assert!(deck.is_empty());
        assert!(deck.draw(1).is_empty());
    }

    #[test]
    fn test_new_shuffles_deterministically() {
        let a = Deck::new(cards(20), &mut GameRng::new(9));
        let b = Deck::new(cards(20), &mut GameRng::new(9));
        assert_eq!(a, b);

        let mut ids = a.card_ids();
        ids.sort_by_key(|id| id.raw());
        assert_eq!(ids, (0..20).map(CardId::new).collect::<Vec<_>>());
    }

    #[test]
    fn test_put_back() {
        let mut deck = Deck { cards: cards(1) };
        let drawn = deck.draw(1);
        deck.put_back(drawn);
        assert_eq!(deck.card_ids(), vec![CardId::new(0)]);
    }
}
