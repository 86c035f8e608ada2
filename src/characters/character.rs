//! Character templates and in-match character state.
//!
//! [`CharacterCard`] is the immutable catalog entry. [`Character`] wraps a
//! copy of it with mutable combat state. Health only changes through
//! [`Character::take_damage`] and [`Character::heal`], which keep it in
//! `0..=max_health`.

use serde::{Deserialize, Serialize};

use super::talent::{Talent, TalentId};
use crate::cards::CardId;
use crate::dice::Element;

/// Identifier of a character, unique within a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}

/// Identifier of a status template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusId(pub u32);

/// Catalog data for a character.
///
/// ```
/// use dice_duel::characters::{CharacterCard, CharacterId, Talent, TalentId, TalentKind};
/// use dice_duel::dice::Element;
///
/// let diluc = CharacterCard::new(CharacterId::new(1), "Diluc", Element::Pyro, 10)
///     .with_energy(3)
///     .with_talent(Talent::new(TalentId::new(1), "Tempered Sword", TalentKind::Normal));
///
/// assert_eq!(diluc.talents.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCard {
    pub id: CharacterId,
    pub name: String,
    pub element: Element,
    pub max_health: u32,
    pub max_energy: u32,
    pub talents: Vec<Talent>,
}

impl CharacterCard {
    #[must_use]
    pub fn new(id: CharacterId, name: impl Into<String>, element: Element, max_health: u32) -> Self {
        Self {
            id,
            name: name.into(),
            element,
            max_health,
            max_energy: 0,
            talents: Vec::new(),
        }
    }

    /// Set the energy cap (builder pattern).
    #[must_use]
    pub fn with_energy(mut self, max_energy: u32) -> Self {
        self.max_energy = max_energy;
        self
    }

    /// Add a talent (builder pattern).
    #[must_use]
    pub fn with_talent(mut self, talent: Talent) -> Self {
        self.talents.push(talent);
        self
    }
}

/// A timed status attached to a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    /// Rounds or usages left; removed at zero.
    pub remaining: u32,
}

/// An elemental infusion on a character's attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infusion {
    pub element: Element,
    pub remaining: u32,
}

/// A character in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    card: CharacterCard,
    health: u32,
    energy: u32,
    pub statuses: Vec<Status>,
    pub equipment: Vec<CardId>,
    pub infusion: Option<Infusion>,
}

impl Character {
    /// Bring a character into play at full health and no energy.
    #[must_use]
    pub fn new(card: CharacterCard) -> Self {
        Self {
            health: card.max_health,
            energy: 0,
            card,
            statuses: Vec::new(),
            equipment: Vec::new(),
            infusion: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CharacterId {
        self.card.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    #[must_use]
    pub fn element(&self) -> Element {
        self.card.element
    }

    /// The catalog entry this character was created from.
    #[must_use]
    pub fn card(&self) -> &CharacterCard {
        &self.card
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.card.max_health
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Look up one of this character's talents.
    #[must_use]
    pub fn talent(&self, id: TalentId) -> Option<&Talent> {
        self.card.talents.iter().find(|t| t.id == id)
    }

    /// Talents that can be chosen for an attack, in catalog order.
    pub fn usable_talents(&self) -> impl Iterator<Item = &Talent> {
        self.card.talents.iter().filter(|t| t.is_usable())
    }

    /// Lose up to `amount` health. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }

    /// Regain up to `amount` health. Returns the health actually gained.
    ///
    /// Defeated characters are not revived.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let gained = amount.min(self.card.max_health - self.health);
        self.health += gained;
        gained
    }

    /// Add or remove energy, clamped to `0..=max_energy`.
    pub fn change_energy(&mut self, delta: i32) {
        let next = i64::from(self.energy) + i64::from(delta);
        self.energy = next.clamp(0, i64::from(self.card.max_energy)) as u32;
    }

    /// Drop statuses and infusions with nothing remaining.
    pub fn clear_expired(&mut self) {
        self.statuses.retain(|s| s.remaining > 0);
        if self.infusion.is_some_and(|i| i.remaining == 0) {
            self.infusion = None;
        }
    }
}
