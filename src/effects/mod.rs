//! Effect system for talents, cards and summons.
//!
//! - `Effect`: a closed set of typed mutations, each with an optional trigger
//! - `Trigger`: when an effect applies, checked against a `TriggerContext`
//! - `EffectResolver`: executes effects on player state
//!
//! ## Contract for effect kinds
//!
//! An implemented kind mutates, clamps, then returns the event that
//! describes the change. An unimplemented kind changes nothing and
//! reports itself so the engine can tell the player.

mod effect;
mod resolver;
mod trigger;

pub use effect::{Direction, Effect, EffectKind, EquipmentSlot, Location, Target};
pub use resolver::{EffectResolver, EffectSource, ResolveResult, ResolverContext};
pub use trigger::{Reaction, Trigger, TriggerContext};
