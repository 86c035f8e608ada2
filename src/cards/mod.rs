//! Card system: catalog definitions and the registry.
//!
//! - `Card`: immutable card data (category, cost, effects)
//! - `CardRegistry`: the read-only catalog of cards, characters and summons
//!
//! The engine never mutates the catalog; decks and rosters hold owned
//! copies built from it.

mod definition;
mod registry;

pub use definition::{Card, CardCategory, CardId};
pub use registry::{CardRegistry, Catalog};
