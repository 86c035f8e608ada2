//! # dice-duel
//!
//! A match engine for a two-player card battler where every action is
//! paid for with elemental dice.
//!
//! ## Design Principles
//!
//! 1. **Transport-Agnostic**: Players are async callbacks. The engine
//!    sends events and requests, validates every reply against the
//!    choices it offered, and never trusts a reply it did not ask for.
//!
//! 2. **Two Seats, One Perspective**: State is held from the acting
//!    player's point of view and flipped when the turn passes.
//!
//! 3. **Closed Sets**: Effects, triggers, events and replies are tagged
//!    enums. Adding a variant is a compile error until every match
//!    handles it.
//!
//! ## Architecture
//!
//! - **Soft Cancellation**: A missing or invalid reply falls back to a
//!   default or aborts the current choice with an `Error` event. It never
//!   ends the match.
//!
//! - **Deterministic Randomness**: One seeded ChaCha8 RNG per match,
//!   forked per player for concurrent phases.
//!
//! ## Modules
//!
//! - `core`: Players, match state, actions, RNG, configuration, errors
//! - `cards`: Card definitions and the read-only catalog
//! - `characters`: Character templates and instances, talents, summons
//! - `zones`: Deck and hand
//! - `dice`: Elements, costs, dice pools and the payment recommender
//! - `effects`: Effect system for talents, cards and summons
//! - `protocol`: Events, requests, replies and player channels
//! - `rules`: Match flow and entry points

pub mod core;
pub mod cards;
pub mod characters;
pub mod zones;
pub mod dice;
pub mod effects;
pub mod protocol;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EngineError, Fault, GameRng, GameRngState, MatchConfig, MatchState, Pair,
    PlayerId, PlayerState,
};

pub use crate::cards::{Card, CardCategory, CardId, CardRegistry, Catalog};

pub use crate::characters::{
    Character, CharacterCard, CharacterId, Infusion, Status, StatusId, Summon, SummonCard, SummonId,
    Talent, TalentId, TalentKind,
};

pub use crate::zones::{Deck, Hand};

pub use crate::dice::{recommend, satisfies, Cost, CostKind, DiceCost, DicePool, Element};

pub use crate::effects::{
    Effect, EffectKind, EffectResolver, EffectSource, Reaction, ResolveResult, ResolverContext, Trigger,
    TriggerContext,
};

pub use crate::protocol::{Callback, Cancelled, Channel, Comms, Event, Message, Reply, Request};

pub use crate::rules::{run, start, start_with_config, MatchOutcome};
