//! Requests and their replies.
//!
//! Every request carries the choices it will accept, and each request
//! type fixes the [`Reply`] variant it expects through [`RequestKind`].
//! The engine checks replies against the offered choices; advertising
//! them is not enough.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::characters::{CharacterId, TalentId};
use crate::core::Action;
use crate::dice::{contains_all, satisfies, Cost, Element};

/// A player's answer to a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Reply {
    /// Acknowledgement of an event.
    Ack,
    Action(Action),
    Cards(Vec<CardId>),
    Character(CharacterId),
    /// Positions in a list that was sent with the request.
    Indices(Vec<usize>),
    Talent(TalentId),
    Dice(Vec<Element>),
}

/// Ask for the next action of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub possible: Vec<Action>,
}

/// Ask which of the opening cards to send back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardsChangeRequest {
    pub possible: Vec<CardId>,
}

/// Ask for a character, on the own side or (for targeted effects) the
/// enemy side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRequest {
    pub possible: Vec<CharacterId>,
    pub possible_enemy: Option<Vec<CharacterId>>,
}

/// Ask which dice to reroll, by position in `possible`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceChangeRequest {
    pub possible: Vec<Element>,
}

/// Ask which talent the active character uses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentRequest {
    pub possible: Vec<TalentId>,
}

/// Ask which dice pay `cost`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRequest {
    pub cost: Cost,
    pub recommended: Option<Vec<Element>>,
    pub available: Vec<Element>,
}

/// Any request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    Action(ActionRequest),
    CardsChange(CardsChangeRequest),
    Character(CharacterRequest),
    DiceChange(DiceChangeRequest),
    Talent(TalentRequest),
    Dice(DiceRequest),
}

/// A request type and the reply it expects.
pub trait RequestKind: Clone + Into<Request> {
    /// The typed answer.
    type Reply;

    /// Name of the expected reply, for diagnostics.
    const REPLY: &'static str;

    /// Pull the typed answer out of a reply, if it has the right shape.
    fn extract(reply: Reply) -> Option<Self::Reply>;

    /// Check that an answer is among the offered choices.
    fn accepts(&self, reply: &Self::Reply) -> bool;
}

macro_rules! into_request {
    ($($kind:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$kind> for Request {
                fn from(request: $kind) -> Self {
                    Request::$variant(request)
                }
            }
        )*
    };
}

into_request! {
    ActionRequest => Action,
    CardsChangeRequest => CardsChange,
    CharacterRequest => Character,
    DiceChangeRequest => DiceChange,
    TalentRequest => Talent,
    DiceRequest => Dice,
}

impl RequestKind for ActionRequest {
    type Reply = Action;
    const REPLY: &'static str = "action";

    fn extract(reply: Reply) -> Option<Action> {
        match reply {
            Reply::Action(action) => Some(action),
            _ => None,
        }
    }

    fn accepts(&self, reply: &Action) -> bool {
        self.possible.contains(reply)
    }
}

impl RequestKind for CardsChangeRequest {
    type Reply = Vec<CardId>;
    const REPLY: &'static str = "cards";

    fn extract(reply: Reply) -> Option<Vec<CardId>> {
        match reply {
            Reply::Cards(cards) => Some(cards),
            _ => None,
        }
    }

    /// Each offered copy may be sent back at most once.
    fn accepts(&self, reply: &Vec<CardId>) -> bool {
        let mut left = self.possible.clone();
        reply.iter().all(|id| match left.iter().position(|c| c == id) {
            Some(i) => {
                left.swap_remove(i);
                true
            }
            None => false,
        })
    }
}

impl RequestKind for CharacterRequest {
    type Reply = CharacterId;
    const REPLY: &'static str = "character";

    fn extract(reply: Reply) -> Option<CharacterId> {
        match reply {
            Reply::Character(id) => Some(id),
            _ => None,
        }
    }

    fn accepts(&self, reply: &CharacterId) -> bool {
        self.possible.contains(reply)
            || self.possible_enemy.as_ref().is_some_and(|enemy| enemy.contains(reply))
    }
}

impl RequestKind for DiceChangeRequest {
    type Reply = Vec<usize>;
    const REPLY: &'static str = "indices";

    fn extract(reply: Reply) -> Option<Vec<usize>> {
        match reply {
            Reply::Indices(indices) => Some(indices),
            _ => None,
        }
    }

    /// In bounds and distinct.
    fn accepts(&self, reply: &Vec<usize>) -> bool {
        let mut seen = vec![false; self.possible.len()];
        reply.iter().all(|&i| i < seen.len() && !std::mem::replace(&mut seen[i], true))
    }
}

impl RequestKind for TalentRequest {
    type Reply = TalentId;
    const REPLY: &'static str = "talent";

    fn extract(reply: Reply) -> Option<TalentId> {
        match reply {
            Reply::Talent(id) => Some(id),
            _ => None,
        }
    }

    fn accepts(&self, reply: &TalentId) -> bool {
        self.possible.contains(reply)
    }
}

impl RequestKind for DiceRequest {
    type Reply = Vec<Element>;
    const REPLY: &'static str = "dice";

    fn extract(reply: Reply) -> Option<Vec<Element>> {
        match reply {
            Reply::Dice(dice) => Some(dice),
            _ => None,
        }
    }

    /// Dice the player has that pay the cost exactly.
    fn accepts(&self, reply: &Vec<Element>) -> bool {
        contains_all(&self.available, reply) && satisfies(reply, &self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceCost;
    use Element::*;

    #[test]
    fn test_extract_wrong_variant() {
        assert_eq!(ActionRequest::extract(Reply::Action(Action::End)), Some(Action::End));
        assert_eq!(ActionRequest::extract(Reply::Talent(TalentId::new(1))), None);
        assert_eq!(DiceRequest::extract(Reply::Ack), None);
    }

    #[test]
    fn test_cards_change_multiset() {
        let request = CardsChangeRequest { possible: vec![CardId::new(1), CardId::new(1), CardId::new(2)] };

        assert!(request.accepts(&vec![]));
        assert!(request.accepts(&vec![CardId::new(1), CardId::new(1)]));
        assert!(!request.accepts(&vec![CardId::new(2), CardId::new(2)]));
        assert!(!request.accepts(&vec![CardId::new(3)]));
    }

    #[test]
    fn test_character_enemy_choices() {
        let own = CharacterRequest { possible: vec![CharacterId::new(1)], possible_enemy: None };
        assert!(own.accepts(&CharacterId::new(1)));
        assert!(!own.accepts(&CharacterId::new(5)));

        let targeted = CharacterRequest {
            possible: vec![],
            possible_enemy: Some(vec![CharacterId::new(5)]),
        };
        assert!(targeted.accepts(&CharacterId::new(5)));
    }

    #[test]
    fn test_reroll_indices() {
        let request = DiceChangeRequest { possible: vec![Pyro, Hydro, Cryo] };

        assert!(request.accepts(&vec![]));
        assert!(request.accepts(&vec![2, 0]));
        assert!(!request.accepts(&vec![3]));
        assert!(!request.accepts(&vec![1, 1]));
    }

    #[test]
    fn test_dice_request_checks_pool_and_cost() {
        let request = DiceRequest {
            cost: Cost::new([DiceCost::element(Pyro, 1), DiceCost::unaligned(1)]).unwrap(),
            recommended: Some(vec![Pyro, Hydro]),
            available: vec![Omni, Pyro, Hydro],
        };

        assert!(request.accepts(&vec![Pyro, Hydro]));
        assert!(request.accepts(&vec![Omni, Pyro]));
        assert!(!request.accepts(&vec![Pyro, Pyro]));
        assert!(!request.accepts(&vec![Hydro, Hydro]));
        assert!(!request.accepts(&vec![Pyro]));
    }

    #[test]
    fn test_request_serialization() {
        let request: Request = TalentRequest { possible: vec![TalentId::new(2)] }.into();
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"type":"talent","possible":[2]}"#);

        let reply: Reply = serde_json::from_str(r#"{"type":"talent","value":2}"#).unwrap();
        assert_eq!(reply, Reply::Talent(TalentId::new(2)));
    }
}
