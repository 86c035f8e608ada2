//! Turn actions and the action history.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// What a player can do when asked for an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Stop acting for the rest of the round.
    End,
    /// Give up the match.
    Concede,
    /// Use a talent of the active character.
    Attack,
    /// Play a card from hand.
    Card,
    /// Convert a card into a die of the active element.
    Tune,
    /// Change the active character.
    Switch,
}

impl Action {
    /// Every action, in the order they are offered.
    pub const ALL: [Action; 6] = [
        Action::End,
        Action::Concede,
        Action::Attack,
        Action::Card,
        Action::Tune,
        Action::Switch,
    ];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::End => "end",
            Action::Concede => "concede",
            Action::Attack => "attack",
            Action::Card => "card",
            Action::Tune => "tune",
            Action::Switch => "switch",
        };
        f.write_str(name)
    }
}

/// A handled action, in match order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round the action was taken in, from 1.
    pub round: u32,

    /// Position in the match history, from 0.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_actions_distinct() {
        for (i, a) in Action::ALL.iter().enumerate() {
            assert!(!Action::ALL[i + 1..].contains(a));
        }
    }

    #[test]
    fn test_action_serialization() {
        assert_eq!(serde_json::to_string(&Action::Concede).unwrap(), "\"concede\"");
        let back: Action = serde_json::from_str("\"tune\"").unwrap();
        assert_eq!(back, Action::Tune);
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(PlayerId::new(1), Action::Attack, 2, 5);

        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, back);
        assert_eq!(back.round, 2);
    }
}
