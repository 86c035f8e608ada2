//! Broadcast events.
//!
//! Events are built once with full information and redacted per
//! recipient by [`Event::visible_to`]: a player who does not own the
//! hand or dice in question sees counts but not identities.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::characters::{CharacterId, TalentId};
use crate::core::PlayerId;
use crate::dice::Element;

/// Something that happened in the match. No reply is expected.
///
/// For health events (`Damage`, `Heal`, `Talent`) `side` is the owner of
/// the character whose health changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    StartTurn {
        side: PlayerId,
    },
    EndTurn {
        side: PlayerId,
    },
    StartRound {
        side: PlayerId,
    },
    EndRound {
        side: PlayerId,
    },

    /// Cards moved from deck to hand.
    CardDraw {
        side: PlayerId,
        deck_size: usize,
        hand: Option<Vec<CardId>>,
        amount: usize,
        cards: Option<Vec<CardId>>,
    },

    /// The mulligan finished: `discarded` cards went back, `amount` came in.
    CardsChange {
        side: PlayerId,
        deck_size: usize,
        hand: Option<Vec<CardId>>,
        amount: usize,
        drawn_cards: Option<Vec<CardId>>,
        discarded: usize,
        discarded_cards: Option<Vec<CardId>>,
    },

    DiceAdd {
        side: PlayerId,
        current_amount: usize,
        current: Option<Vec<Element>>,
        amount: usize,
        dice: Option<Vec<Element>>,
    },
    DiceRemove {
        side: PlayerId,
        current_amount: usize,
        current: Option<Vec<Element>>,
        amount: usize,
        dice: Option<Vec<Element>>,
    },

    /// Dice at `rerolled` (indices into the pre-reroll pool) were replaced.
    DiceReroll {
        side: PlayerId,
        current_amount: usize,
        current: Option<Vec<Element>>,
        amount: usize,
        rerolled: Option<Vec<usize>>,
        new_dice: Option<Vec<Element>>,
    },

    Switch {
        side: PlayerId,
        target: CharacterId,
        previous: Option<CharacterId>,
    },

    Damage {
        side: PlayerId,
        target: CharacterId,
        current: u32,
        damage: u32,
    },
    Heal {
        side: PlayerId,
        target: CharacterId,
        current: u32,
        heal: u32,
    },

    /// Damage dealt by a talent.
    Talent {
        side: PlayerId,
        source: CharacterId,
        talent: TalentId,
        target: CharacterId,
        current: u32,
        damage: u32,
    },

    /// A recoverable problem with the recipient's last choice.
    Error {
        message: String,
    },

    Conceded {
        side: PlayerId,
    },
    Lost {
        side: PlayerId,
        winner: PlayerId,
    },
    /// The match ended without a loser.
    EndGame {
        winner: Option<PlayerId>,
    },
}

impl Event {
    /// The side the event is about, if any.
    #[must_use]
    pub fn side(&self) -> Option<PlayerId> {
        match self {
            Event::StartTurn { side }
            | Event::EndTurn { side }
            | Event::StartRound { side }
            | Event::EndRound { side }
            | Event::CardDraw { side, .. }
            | Event::CardsChange { side, .. }
            | Event::DiceAdd { side, .. }
            | Event::DiceRemove { side, .. }
            | Event::DiceReroll { side, .. }
            | Event::Switch { side, .. }
            | Event::Damage { side, .. }
            | Event::Heal { side, .. }
            | Event::Talent { side, .. }
            | Event::Conceded { side }
            | Event::Lost { side, .. } => Some(*side),
            Event::Error { .. } | Event::EndGame { .. } => None,
        }
    }

    /// Net change to health, hand size or dice count.
    ///
    /// `None` for events that change none of these.
    #[must_use]
    pub fn delta(&self) -> Option<i64> {
        let delta = match self {
            Event::Damage { damage, .. } | Event::Talent { damage, .. } => -i64::from(*damage),
            Event::Heal { heal, .. } => i64::from(*heal),
            Event::CardDraw { amount, .. } | Event::DiceAdd { amount, .. } => *amount as i64,
            Event::CardsChange { amount, discarded, .. } => *amount as i64 - *discarded as i64,
            Event::DiceRemove { amount, .. } => -(*amount as i64),
            Event::DiceReroll { .. } => 0,
            _ => return None,
        };
        Some(delta)
    }

    /// Check if the event ends the match.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Conceded { .. } | Event::Lost { .. } | Event::EndGame { .. })
    }

    /// The copy of this event that `viewer` may see.
    #[must_use]
    pub fn visible_to(&self, viewer: PlayerId) -> Event {
        let mut event = self.clone();
        if self.side() == Some(viewer) {
            return event;
        }

        match &mut event {
            Event::CardDraw { hand, cards, .. } => {
                *hand = None;
                *cards = None;
            }
            Event::CardsChange { hand, drawn_cards, discarded_cards, .. } => {
                *hand = None;
                *drawn_cards = None;
                *discarded_cards = None;
            }
            Event::DiceAdd { current, dice, .. } | Event::DiceRemove { current, dice, .. } => {
                *current = None;
                *dice = None;
            }
            Event::DiceReroll { current, rerolled, new_dice, .. } => {
                *current = None;
                *rerolled = None;
                *new_dice = None;
            }
            _ => {}
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ME: PlayerId = PlayerId::new(0);
    const THEM: PlayerId = PlayerId::new(1);

    #[test]
    fn test_draw_redacted_for_opponent() {
        let event = Event::CardDraw {
            side: ME,
            deck_size: 25,
            hand: Some(vec![CardId::new(1), CardId::new(2)]),
            amount: 2,
            cards: Some(vec![CardId::new(1), CardId::new(2)]),
        };

        assert_eq!(event.visible_to(ME), event);
        assert_eq!(
            event.visible_to(THEM),
            Event::CardDraw { side: ME, deck_size: 25, hand: None, amount: 2, cards: None }
        );
    }

    #[test]
    fn test_dice_remove_keeps_count() {
        let event = Event::DiceRemove {
            side: ME,
            current_amount: 5,
            current: Some(vec![Element::Omni; 5]),
            amount: 3,
            dice: Some(vec![Element::Pyro; 3]),
        };

        match event.visible_to(THEM) {
            Event::DiceRemove { current_amount, current, amount, dice, .. } => {
                assert_eq!((current_amount, amount), (5, 3));
                assert!(current.is_none() && dice.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_public_events_unchanged() {
        let event = Event::Damage { side: ME, target: CharacterId::new(1), current: 7, damage: 3 };
        assert_eq!(event.visible_to(THEM), event);
    }

    #[test]
    fn test_deltas() {
        let hit = Event::Talent {
            side: THEM,
            source: CharacterId::new(1),
            talent: TalentId::new(1),
            target: CharacterId::new(2),
            current: 8,
            damage: 2,
        };
        assert_eq!(hit.delta(), Some(-2));
        assert_eq!(Event::Heal { side: ME, target: CharacterId::new(1), current: 9, heal: 1 }.delta(), Some(1));
        assert_eq!(Event::StartTurn { side: ME }.delta(), None);

        let mulligan = Event::CardsChange {
            side: ME,
            deck_size: 0,
            hand: None,
            amount: 1,
            drawn_cards: None,
            discarded: 2,
            discarded_cards: None,
        };
        assert_eq!(mulligan.delta(), Some(-1));
    }

    #[test]
    fn test_event_json_tag() {
        let json = serde_json::to_string(&Event::Error { message: "Invalid dice!".into() }).unwrap();
        assert_eq!(json, r#"{"type":"error","message":"Invalid dice!"}"#);
    }
}
