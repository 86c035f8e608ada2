//! Player identification and per-player match state.
//!
//! ## PlayerId
//!
//! Opaque seat identifier chosen by the caller; the two players of a
//! match must use different ids.
//!
//! ## PlayerState
//!
//! Everything one player owns during a match: roster, deck, hand, dice
//! and summons. The active character is stored as a [`CharacterId`] and
//! looked up in the roster on use.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Fault};
use super::rng::GameRng;
use crate::cards::{Card, CardId};
use crate::characters::{Character, CharacterId, Summon};
use crate::dice::{DicePool, Element};
use crate::zones::{Deck, Hand};

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's side of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    characters: Vec<Character>,
    active: Option<CharacterId>,
    pub deck: Deck,
    pub hand: Hand,
    pub dice: DicePool,
    pub summons: Vec<Summon>,
    /// Set when the player ends their part of the current round.
    pub declared_end: bool,
}

impl PlayerState {
    /// Create a player with a shuffled deck and no active character.
    ///
    /// Fails on an empty roster or a roster with repeated characters.
    pub fn new(
        id: PlayerId,
        characters: Vec<Character>,
        cards: Vec<Card>,
        rng: &mut GameRng,
    ) -> Result<Self, EngineError> {
        if characters.is_empty() {
            return Err(EngineError::EmptyRoster(id));
        }
        for (i, character) in characters.iter().enumerate() {
            if characters[..i].iter().any(|c| c.id() == character.id()) {
                return Err(EngineError::DuplicateCharacter { player: id, character: character.id().raw() });
            }
        }

        let preferred = characters.iter().map(Character::element).collect();
        Ok(Self {
            id,
            characters,
            active: None,
            deck: Deck::new(cards, rng),
            hand: Hand::new(),
            dice: DicePool::new(preferred),
            summons: Vec::new(),
            declared_end: false,
        })
    }

    /// The roster, in construction order.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Roster ids, in construction order.
    #[must_use]
    pub fn character_ids(&self) -> Vec<CharacterId> {
        self.characters.iter().map(Character::id).collect()
    }

    #[must_use]
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id() == id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn active_id(&self) -> Option<CharacterId> {
        self.active
    }

    #[must_use]
    pub fn active_character(&self) -> Option<&Character> {
        self.active.and_then(|id| self.character(id))
    }

    pub fn active_character_mut(&mut self) -> Option<&mut Character> {
        let id = self.active?;
        self.character_mut(id)
    }

    /// Characters above 0 health.
    pub fn alive_characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| c.is_alive())
    }

    /// Check if every character is defeated.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.alive_characters().next().is_none()
    }

    /// Make `id` the active character.
    ///
    /// Re-ranks dice preferences: the new active element first, then the
    /// elements of every living character. Returns the previous active
    /// character.
    pub fn switch_character(&mut self, id: CharacterId) -> Result<Option<CharacterId>, Fault> {
        let element = match self.character(id) {
            Some(c) if c.is_alive() => c.element(),
            _ => return Err(Fault::INVALID_CHARACTER),
        };

        let preferred: Vec<Element> = std::iter::once(element)
            .chain(self.alive_characters().map(Character::element))
            .collect();
        self.dice.set_preferred(preferred);

        Ok(self.active.replace(id))
    }

    /// Draw up to `amount` cards into the hand. Returns the drawn ids.
    pub fn draw_cards(&mut self, amount: usize) -> Vec<CardId> {
        let drawn = self.deck.draw(amount);
        let ids = drawn.iter().map(|c| c.id).collect();
        self.hand.add(drawn);
        ids
    }

    /// Move the listed cards from hand back into the deck and shuffle it.
    ///
    /// Returns false and changes nothing if any card is not in hand. An
    /// empty list leaves the deck order alone.
    pub fn return_cards(&mut self, ids: &[CardId], rng: &mut GameRng) -> bool {
        if !self.hand.contains_all(ids) {
            return false;
        }
        if ids.is_empty() {
            return true;
        }

        let returned: Vec<Card> = ids.iter().filter_map(|&id| self.hand.remove(id)).collect();
        self.deck.put_back(returned);
        self.deck.shuffle(rng);
        true
    }

    /// Drop expired statuses, infusions and summons.
    pub fn clear_expired(&mut self) {
        for character in &mut self.characters {
            character.clear_expired();
        }
        self.summons.retain(|s| !s.is_expired());
    }

    /// Encode the full player state.
    ///
    /// Two snapshots compare equal exactly when the states do, which makes
    /// this the cheapest way to assert that an aborted action changed
    /// nothing.
    pub fn snapshot(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCategory;
    use crate::characters::CharacterCard;

    fn roster() -> Vec<Character> {
        vec![
            Character::new(CharacterCard::new(CharacterId::new(1), "Diluc", Element::Pyro, 10)),
            Character::new(CharacterCard::new(CharacterId::new(2), "Xingqiu", Element::Hydro, 10)),
            Character::new(CharacterCard::new(CharacterId::new(3), "Ganyu", Element::Cryo, 10)),
        ]
    }

    fn deck(n: u32) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(CardId::new(i), format!("Card {i}"), CardCategory::Event))
            .collect()
    }

    fn player() -> PlayerState {
        PlayerState::new(PlayerId::new(0), roster(), deck(10), &mut GameRng::new(1)).unwrap()
    }

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_new_rejects_bad_rosters() {
        let empty = PlayerState::new(PlayerId::new(0), vec![], deck(1), &mut GameRng::new(1));
        assert!(matches!(empty, Err(EngineError::EmptyRoster(_))));

        let mut twice = roster();
        twice.push(twice[0].clone());
        let dup = PlayerState::new(PlayerId::new(0), twice, deck(1), &mut GameRng::new(1));
        assert!(matches!(dup, Err(EngineError::DuplicateCharacter { character: 1, .. })));
    }

    #[test]
    fn test_switch_character_sets_preferences() {
        let mut player = player();
        assert!(player.active_character().is_none());

        assert_eq!(player.switch_character(CharacterId::new(2)), Ok(None));
        assert_eq!(player.active_id(), Some(CharacterId::new(2)));
        assert_eq!(player.dice.preferred(), &[Element::Hydro, Element::Pyro, Element::Hydro, Element::Cryo]);

        assert_eq!(player.switch_character(CharacterId::new(1)), Ok(Some(CharacterId::new(2))));
    }

    #[test]
    fn test_switch_to_unknown_or_defeated_fails() {
        let mut player = player();
        assert!(player.switch_character(CharacterId::new(9)).is_err());

        player.character_mut(CharacterId::new(3)).unwrap().take_damage(10);
        assert!(player.switch_character(CharacterId::new(3)).is_err());
        assert!(player.active_id().is_none());
    }

    #[test]
    fn test_has_lost() {
        let mut player = player();
        assert!(!player.has_lost());
        for id in player.character_ids() {
            player.character_mut(id).unwrap().take_damage(10);
        }
        assert!(player.has_lost());
        assert_eq!(player.alive_characters().count(), 0);
    }

    #[test]
    fn test_draw_and_return() {
        let mut player = player();
        let mut rng = GameRng::new(5);

        let drawn = player.draw_cards(5);
        assert_eq!(drawn.len(), 5);
        assert_eq!(player.hand.len(), 5);
        assert_eq!(player.deck.len(), 5);

        assert!(player.return_cards(&drawn[..2], &mut rng));
        assert_eq!(player.hand.len(), 3);
        assert_eq!(player.deck.len(), 7);

        assert!(!player.return_cards(&[CardId::new(99)], &mut rng));
        assert_eq!(player.hand.len(), 3);
    }

    #[test]
    fn test_return_nothing_keeps_deck_order() {
        let mut player = player();
        player.draw_cards(5);
        let before = player.deck.card_ids();

        assert!(player.return_cards(&[], &mut GameRng::new(5)));
        assert_eq!(player.deck.card_ids(), before);
    }

    #[test]
    fn test_snapshot_tracks_changes() {
        let mut player = player();
        let before = player.snapshot().unwrap();
        assert_eq!(before, player.snapshot().unwrap());

        player.declared_end = true;
        assert_ne!(before, player.snapshot().unwrap());
    }
}
