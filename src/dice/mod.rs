//! Dice: elements, cost vectors, pools and the cost algorithm.
//!
//! ## Key Types
//!
//! - [`Element`]: die faces, character elements and damage types
//! - [`DiceCost`] / [`Cost`]: what a talent or card costs
//! - [`DicePool`]: a player's sorted dice
//! - [`recommend`] / [`satisfies`]: pick or validate dice for a cost

mod cost;
mod element;
mod pool;
mod recommend;

pub use cost::{Cost, CostKind, DiceCost};
pub use element::Element;
pub use pool::DicePool;
pub(crate) use pool::contains_all;
pub use recommend::{recommend, satisfies};
