//! Characters, their talents, and summons.
//!
//! - [`CharacterCard`]: catalog data (health, element, talents)
//! - [`Character`]: a character in play with clamped health and energy
//! - [`Talent`]: a move with a dice cost and an effect sequence
//! - [`Summon`]: a field object with limited usages

mod character;
mod summon;
mod talent;

pub use character::{Character, CharacterCard, CharacterId, Infusion, Status, StatusId};
pub use summon::{Summon, SummonCard, SummonId};
pub use talent::{Talent, TalentId, TalentKind};
