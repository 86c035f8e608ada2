//! Catalog of card, character and summon definitions.
//!
//! The `CardRegistry` is read-only once a match starts. It hands out
//! owned copies: decks and rosters built from it never alias catalog
//! entries.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId};
use crate::characters::{Character, CharacterCard, CharacterId, Summon, SummonCard, SummonId};
use crate::core::EngineError;

/// Serialized catalog, as produced by an external data loader.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub characters: Vec<CharacterCard>,
    #[serde(default)]
    pub summons: Vec<SummonCard>,
}

/// Registry of catalog definitions.
///
/// ## Example
///
/// ```
/// use dice_duel::cards::{Card, CardCategory, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register_card(Card::new(CardId::new(1), "Paimon", CardCategory::Support)).unwrap();
///
/// let deck = registry.build_deck(&[CardId::new(1), CardId::new(1)]).unwrap();
/// assert_eq!(deck.len(), 2);
/// assert!(registry.build_deck(&[CardId::new(9)]).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    characters: FxHashMap<CharacterId, CharacterCard>,
    summons: FxHashMap<SummonId, SummonCard>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a loaded catalog, rejecting duplicate ids.
    pub fn from_catalog(catalog: Catalog) -> Result<Self, EngineError> {
        let mut registry = Self::new();
        for card in catalog.cards {
            registry.register_card(card)?;
        }
        for character in catalog.characters {
            registry.register_character(character)?;
        }
        for summon in catalog.summons {
            registry.register_summon(summon)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    pub fn register_card(&mut self, card: Card) -> Result<(), EngineError> {
        if self.cards.contains_key(&card.id) {
            return Err(EngineError::DuplicateId { kind: "card", id: card.id.raw() });
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Register a character definition.
    pub fn register_character(&mut self, character: CharacterCard) -> Result<(), EngineError> {
        if self.characters.contains_key(&character.id) {
            return Err(EngineError::DuplicateId { kind: "character", id: character.id.raw() });
        }
        self.characters.insert(character.id, character);
        Ok(())
    }

    /// Register a summon definition.
    pub fn register_summon(&mut self, summon: SummonCard) -> Result<(), EngineError> {
        if self.summons.contains_key(&summon.id) {
            return Err(EngineError::DuplicateId { kind: "summon", id: summon.id.0 });
        }
        self.summons.insert(summon.id, summon);
        Ok(())
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn character(&self, id: CharacterId) -> Option<&CharacterCard> {
        self.characters.get(&id)
    }

    #[must_use]
    pub fn summon(&self, id: SummonId) -> Option<&SummonCard> {
        self.summons.get(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry holds no definitions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.characters.is_empty() && self.summons.is_empty()
    }

    /// Copy the listed cards out of the catalog, in order.
    pub fn build_deck(&self, ids: &[CardId]) -> Result<Vec<Card>, EngineError> {
        ids.iter()
            .map(|&id| {
                self.card(id)
                    .cloned()
                    .ok_or(EngineError::UnknownId { kind: "card", id: id.raw() })
            })
            .collect()
    }

    /// Bring the listed characters into play, in order.
    pub fn build_roster(&self, ids: &[CharacterId]) -> Result<Vec<Character>, EngineError> {
        ids.iter()
            .map(|&id| {
                self.character(id)
                    .cloned()
                    .map(Character::new)
                    .ok_or(EngineError::UnknownId { kind: "character", id: id.raw() })
            })
            .collect()
    }

    /// Create a fresh summon.
    pub fn create_summon(&self, id: SummonId) -> Result<Summon, EngineError> {
        self.summon(id)
            .cloned()
            .map(Summon::new)
            .ok_or(EngineError::UnknownId { kind: "summon", id: id.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCategory;
    use crate::dice::Element;

    fn registry() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry
            .register_card(Card::new(CardId::new(1), "Paimon", CardCategory::Support))
            .unwrap();
        registry
            .register_character(CharacterCard::new(CharacterId::new(1), "Diluc", Element::Pyro, 10))
            .unwrap();
        registry
            .register_summon(SummonCard {
                id: SummonId::new(1),
                name: "Oz".to_string(),
                usages: 2,
                effects: vec![],
            })
            .unwrap();
        registry
    }

    #[test]
    fn test_register_and_get() {
        let registry = registry();

        assert_eq!(registry.card(CardId::new(1)).unwrap().name, "Paimon");
        assert!(registry.card(CardId::new(99)).is_none());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = registry();
        let result = registry.register_card(Card::new(CardId::new(1), "Again", CardCategory::Event));
        assert!(matches!(result, Err(EngineError::DuplicateId { kind: "card", id: 1 })));
    }

    #[test]
    fn test_build_roster() {
        let registry = registry();

        let roster = registry.build_roster(&[CharacterId::new(1)]).unwrap();
        assert_eq!(roster[0].health(), 10);

        let missing = registry.build_roster(&[CharacterId::new(2)]);
        assert!(matches!(missing, Err(EngineError::UnknownId { kind: "character", id: 2 })));
    }

    #[test]
    fn test_create_summon() {
        let summon = registry().create_summon(SummonId::new(1)).unwrap();
        assert_eq!(summon.usages_left, 2);
    }

    #[test]
    fn test_from_catalog_json() {
        let json = r#"{
            "cards": [{"id": 5, "name": "Strategize", "category": "event", "cost": [{"kind": "matching", "amount": 1}],
                       "effects": [{"kind": {"type": "draw", "amount": 2}}]}],
            "characters": [{"id": 2, "name": "Xingqiu", "element": "hydro", "max_health": 10, "max_energy": 2,
                            "talents": [{"id": 1, "name": "Guhua Style", "kind": "normal",
                                         "cost": [{"kind": {"element": "hydro"}, "amount": 1}, {"kind": "unaligned", "amount": 2}],
                                         "effects": [{"kind": {"type": "damage", "amount": 2, "element": "physical"}}]}]}]
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let registry = CardRegistry::from_catalog(catalog).unwrap();

        assert_eq!(registry.card(CardId::new(5)).unwrap().cost.total(), 1);
        let xingqiu = registry.character(CharacterId::new(2)).unwrap();
        assert_eq!(xingqiu.talents[0].cost.total(), 3);
    }
}
