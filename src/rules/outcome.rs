//! How a match ended.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::protocol::Event;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Every character on the losing side was defeated.
    Won { winner: PlayerId, loser: PlayerId },
    /// A player gave up during their turn.
    Conceded { by: PlayerId, winner: PlayerId },
    /// The round limit was reached without a loser.
    Stalled { rounds: u32 },
}

impl MatchOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MatchOutcome::Won { winner, .. } | MatchOutcome::Conceded { winner, .. } => Some(*winner),
            MatchOutcome::Stalled { .. } => None,
        }
    }

    /// The last event of a match that ended this way.
    #[must_use]
    pub fn terminal_event(&self) -> Event {
        match *self {
            MatchOutcome::Won { winner, loser } => Event::Lost { side: loser, winner },
            MatchOutcome::Conceded { by, .. } => Event::Conceded { side: by },
            MatchOutcome::Stalled { .. } => Event::EndGame { winner: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_winner() {
        let (a, b) = (PlayerId::new(0), PlayerId::new(1));

        let won = MatchOutcome::Won { winner: a, loser: b };
        assert!(won.is_winner(a));
        assert!(!won.is_winner(b));

        let conceded = MatchOutcome::Conceded { by: a, winner: b };
        assert!(conceded.is_winner(b));
        assert!(!conceded.is_winner(a));

        let stalled = MatchOutcome::Stalled { rounds: 3 };
        assert!(!stalled.is_winner(a));
        assert!(!stalled.is_winner(b));
        assert_eq!(stalled.winner(), None);
    }

    #[test]
    fn test_terminal_event() {
        let (a, b) = (PlayerId::new(0), PlayerId::new(1));
        let outcomes = [
            MatchOutcome::Won { winner: a, loser: b },
            MatchOutcome::Conceded { by: a, winner: b },
            MatchOutcome::Stalled { rounds: 3 },
        ];

        for outcome in outcomes {
            assert!(outcome.terminal_event().is_terminal());
        }
        assert_eq!(outcomes[0].terminal_event(), Event::Lost { side: b, winner: a });
        assert!(!Event::EndRound { side: a }.is_terminal());
    }
}
