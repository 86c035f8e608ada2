//! Dice cost vectors.
//!
//! A cost is at most two requirements:
//! - one colored requirement, either pinned to an element
//!   ([`CostKind::Element`]) or "any single color" ([`CostKind::Matching`])
//! - one unaligned requirement ([`CostKind::Unaligned`]), paid with any dice
//!
//! [`Cost`] enforces this shape on construction and on deserialization.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::element::Element;
use crate::core::EngineError;

/// What a single requirement accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    /// Dice of this element (omni dice may substitute).
    Element(Element),
    /// Dice all of one color, any color (omni dice may substitute).
    Matching,
    /// Any dice at all.
    Unaligned,
}

impl CostKind {
    /// Check if this requirement constrains color.
    #[must_use]
    pub const fn is_colored(self) -> bool {
        !matches!(self, CostKind::Unaligned)
    }
}

/// One requirement of a cost: a kind and the number of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceCost {
    pub kind: CostKind,
    pub amount: u8,
}

impl DiceCost {
    /// Require `amount` dice of `element`.
    #[must_use]
    pub const fn element(element: Element, amount: u8) -> Self {
        Self { kind: CostKind::Element(element), amount }
    }

    /// Require `amount` dice of one shared color.
    #[must_use]
    pub const fn matching(amount: u8) -> Self {
        Self { kind: CostKind::Matching, amount }
    }

    /// Require `amount` dice of any kind.
    #[must_use]
    pub const fn unaligned(amount: u8) -> Self {
        Self { kind: CostKind::Unaligned, amount }
    }
}

/// A validated cost vector.
///
/// ```
/// use dice_duel::dice::{Cost, DiceCost, Element};
///
/// let cost = Cost::new([DiceCost::element(Element::Pyro, 1), DiceCost::unaligned(2)]).unwrap();
/// assert_eq!(cost.total(), 3);
///
/// // Two colored requirements are rejected.
/// assert!(Cost::new([DiceCost::matching(1), DiceCost::element(Element::Cryo, 1)]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiceCost>", into = "Vec<DiceCost>")]
pub struct Cost {
    requirements: SmallVec<[DiceCost; 2]>,
}

impl Cost {
    /// Build a cost, rejecting malformed vectors.
    pub fn new(requirements: impl IntoIterator<Item = DiceCost>) -> Result<Self, EngineError> {
        let requirements: SmallVec<[DiceCost; 2]> = requirements.into_iter().collect();

        let colored = requirements.iter().filter(|r| r.kind.is_colored()).count();
        let unaligned = requirements.len() - colored;
        if colored > 1 || unaligned > 1 {
            return Err(EngineError::InvalidCost(format!(
                "{colored} colored and {unaligned} unaligned requirements"
            )));
        }

        if let Some(bad) = requirements
            .iter()
            .find(|r| matches!(r.kind, CostKind::Element(e) if !e.is_colored()))
        {
            return Err(EngineError::InvalidCost(format!("{:?} cannot be pinned", bad.kind)));
        }

        Ok(Self { requirements })
    }

    /// A cost of nothing.
    #[must_use]
    pub fn free() -> Self {
        Self::default()
    }

    /// The colored requirement, if any.
    #[must_use]
    pub fn colored(&self) -> Option<DiceCost> {
        self.requirements.iter().copied().find(|r| r.kind.is_colored())
    }

    /// The number of unaligned dice required.
    #[must_use]
    pub fn unaligned(&self) -> usize {
        self.requirements
            .iter()
            .filter(|r| r.kind == CostKind::Unaligned)
            .map(|r| r.amount as usize)
            .sum()
    }

    /// Total number of dice required.
    #[must_use]
    pub fn total(&self) -> usize {
        self.requirements.iter().map(|r| r.amount as usize).sum()
    }

    /// Iterate over the requirements.
    pub fn iter(&self) -> impl Iterator<Item = &DiceCost> {
        self.requirements.iter()
    }
}

impl TryFrom<Vec<DiceCost>> for Cost {
    type Error = EngineError;

    fn try_from(requirements: Vec<DiceCost>) -> Result<Self, Self::Error> {
        Self::new(requirements)
    }
}

impl From<Cost> for Vec<DiceCost> {
    fn from(cost: Cost) -> Self {
        cost.requirements.into_vec()
    }
}
