//! Elements: dice faces, character elements and damage types.

use serde::{Deserialize, Serialize};

/// Elemental type of a die, a character or a damage instance.
///
/// Declaration order is the element ordinal used as the last tie-break
/// when sorting a dice pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Anemo,
    Cryo,
    Dendro,
    Electro,
    Geo,
    Hydro,
    Pyro,
    /// Wildcard die, usable toward any elemental requirement.
    Omni,
    /// Non-elemental damage. Never appears on a die.
    Physical,
}

impl Element {
    /// Faces of a die. A roll picks uniformly among these.
    pub const DICE: [Element; 8] = [
        Element::Anemo,
        Element::Cryo,
        Element::Dendro,
        Element::Electro,
        Element::Geo,
        Element::Hydro,
        Element::Pyro,
        Element::Omni,
    ];

    /// Check if this is the omni wildcard.
    #[must_use]
    pub const fn is_omni(self) -> bool {
        matches!(self, Element::Omni)
    }

    /// Check if this element can show up on a die.
    #[must_use]
    pub const fn is_die(self) -> bool {
        !matches!(self, Element::Physical)
    }

    /// Check if this is a colored die face (a die that is not omni).
    #[must_use]
    pub const fn is_colored(self) -> bool {
        self.is_die() && !self.is_omni()
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Anemo => "Anemo",
            Element::Cryo => "Cryo",
            Element::Dendro => "Dendro",
            Element::Electro => "Electro",
            Element::Geo => "Geo",
            Element::Hydro => "Hydro",
            Element::Pyro => "Pyro",
            Element::Omni => "Omni",
            Element::Physical => "Physical",
        };
        f.write_str(name)
    }
}
