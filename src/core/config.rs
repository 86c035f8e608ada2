//! Match configuration.
//!
//! The defaults are the standard rules: a 5-card opening hand, 8 dice,
//! 2 cards drawn at the start of every round after the first, and no
//! round limit.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Tunable match parameters.
///
/// ```
/// use dice_duel::core::MatchConfig;
///
/// let config = MatchConfig::default().with_seed(7).with_round_limit(15);
/// assert_eq!(config.dice_count, 8);
/// assert!(config.validate().is_ok());
/// assert!(MatchConfig::default().with_dice_count(0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Cards drawn before the mulligan.
    pub opening_hand: usize,

    /// Dice rolled during preparation.
    pub dice_count: usize,

    /// Cards each player draws at the start of rounds after the first.
    pub round_draw: usize,

    /// Seed for every random decision in the match.
    pub seed: u64,

    /// End the match as a stall after this many rounds. `None` never stalls.
    pub round_limit: Option<u32>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opening_hand: 5,
            dice_count: 8,
            round_draw: 2,
            seed: 0,
            round_limit: None,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    #[must_use]
    pub fn with_dice_count(mut self, dice: usize) -> Self {
        self.dice_count = dice;
        self
    }

    #[must_use]
    pub fn with_round_draw(mut self, cards: usize) -> Self {
        self.round_draw = cards;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_round_limit(mut self, rounds: u32) -> Self {
        self.round_limit = Some(rounds);
        self
    }

    /// Reject configurations a match cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.dice_count == 0 {
            return Err(EngineError::InvalidConfig("dice_count must be positive"));
        }
        if self.round_limit == Some(0) {
            return Err(EngineError::InvalidConfig("round_limit must be positive"));
        }
        Ok(())
    }
}
