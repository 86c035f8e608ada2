//! A player's dice pool.
//!
//! The pool is kept sorted so that recommendations are deterministic:
//! 1. omni dice first
//! 2. then the player's preferred elements, by rank
//! 3. then by frequency in the pool, most frequent first
//! 4. then by element ordinal
//!
//! The order never affects whether a cost can be paid.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::element::Element;
use crate::core::GameRng;

/// An ordered collection of dice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    dice: Vec<Element>,
    /// Elements the owner would rather keep, highest rank first.
    preferred: Vec<Element>,
}

impl DicePool {
    /// Create an empty pool with the given preferences.
    #[must_use]
    pub fn new(preferred: Vec<Element>) -> Self {
        Self { dice: Vec::new(), preferred }
    }

    /// Create a pool holding exactly these dice (sorted).
    #[must_use]
    pub fn with_dice(dice: Vec<Element>, preferred: Vec<Element>) -> Self {
        let mut pool = Self { dice, preferred };
        pool.sort();
        pool
    }

    /// The dice, in pool order.
    #[must_use]
    pub fn dice(&self) -> &[Element] {
        &self.dice
    }

    /// Number of dice in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// The preferred elements, highest rank first.
    #[must_use]
    pub fn preferred(&self) -> &[Element] {
        &self.preferred
    }

    /// Replace the preferred elements and re-sort.
    pub fn set_preferred(&mut self, preferred: Vec<Element>) {
        self.preferred = preferred;
        self.sort();
    }

    /// Replace the pool with `amount` freshly rolled dice.
    ///
    /// Returns the new pool contents, sorted.
    pub fn roll(&mut self, amount: usize, rng: &mut GameRng) -> Vec<Element> {
        self.dice = (0..amount).map(|_| roll_die(rng)).collect();
        self.sort();
        self.dice.clone()
    }

    /// Reroll the dice at `indices` and re-sort.
    ///
    /// Returns the new faces in the order of `indices`. Indices must be
    /// in bounds and distinct, as
    /// [`DiceChangeRequest`](crate::protocol::DiceChangeRequest) checks.
    pub fn reroll(&mut self, indices: &[usize], rng: &mut GameRng) -> Vec<Element> {
        let mut new = Vec::with_capacity(indices.len());
        for &index in indices {
            let face = roll_die(rng);
            self.dice[index] = face;
            new.push(face);
        }
        self.sort();
        new
    }

    /// Check that `dice` is a sub-multiset of the pool.
    #[must_use]
    pub fn contains_all(&self, dice: &[Element]) -> bool {
        contains_all(&self.dice, dice)
    }

    /// Remove exactly `dice` from the pool.
    ///
    /// Returns false and leaves the pool untouched if any die is missing.
    pub fn remove(&mut self, dice: &[Element]) -> bool {
        if !self.contains_all(dice) {
            return false;
        }
        for die in dice {
            if let Some(pos) = self.dice.iter().position(|d| d == die) {
                self.dice.remove(pos);
            }
        }
        true
    }

    /// Sort the pool with the stable pool comparator.
    pub fn sort(&mut self) {
        let mut frequency: FxHashMap<Element, usize> = FxHashMap::default();
        for &die in &self.dice {
            *frequency.entry(die).or_default() += 1;
        }

        let preferred = &self.preferred;
        self.dice.sort_by_key(|&die| {
            let rank = preferred.iter().position(|&p| p == die).unwrap_or(usize::MAX);
            let count = frequency.get(&die).copied().unwrap_or(0);
            (!die.is_omni(), rank, Reverse(count), die)
        });
    }
}

/// Check that `subset` is a sub-multiset of `pool`.
pub(crate) fn contains_all(pool: &[Element], subset: &[Element]) -> bool {
    let mut counts: FxHashMap<Element, usize> = FxHashMap::default();
    for &die in pool {
        *counts.entry(die).or_default() += 1;
    }
    subset.iter().all(|die| match counts.get_mut(die) {
        Some(n) if *n > 0 => {
            *n -= 1;
            true
        }
        _ => false,
    })
}

fn roll_die(rng: &mut GameRng) -> Element {
    Element::DICE[rng.gen_range_usize(0..Element::DICE.len())]
}
