//! Match preparation and other phases both players run at once.
//!
//! Each phase takes a [`Seat`]: one player's state, their channels and a
//! forked RNG. The two seats borrow disjoint halves of the match, so the
//! phases for both players run concurrently and the engine continues once
//! both finish.

use futures::join;
use tracing::debug;

use crate::cards::CardId;
use crate::core::{Fault, GameRng, MatchConfig, MatchState, PlayerState};
use crate::protocol::{Cancelled, CardsChangeRequest, CharacterRequest, Comms, DiceChangeRequest, Event};

/// One player's view of the match during a concurrent phase.
pub(crate) struct Seat<'a> {
    pub player: &'a mut PlayerState,
    pub comms: Comms<'a>,
    pub rng: GameRng,
    pub config: &'a MatchConfig,
}

/// Split the match into a seat per player, acting player first.
///
/// RNGs are forked in seat order, so a seed reproduces every phase.
pub(crate) fn seats(state: &mut MatchState) -> (Seat<'_>, Seat<'_>) {
    let rngs = (state.rng.fork(), state.rng.fork());
    let (me, opponent) = state.players.split_mut();
    let (my_channel, their_channel) = state.channels.split();
    let config = &state.config;

    (
        Seat {
            player: me,
            comms: Comms::new(my_channel, their_channel),
            rng: rngs.0,
            config,
        },
        Seat {
            player: opponent,
            comms: Comms::new(their_channel, my_channel),
            rng: rngs.1,
            config,
        },
    )
}

/// Opening hands, starting characters, then dice.
pub(crate) async fn run_preparation(state: &mut MatchState) {
    let (a, b) = seats(state);
    join!(draw_opening_hand(a), draw_opening_hand(b));

    let (a, b) = seats(state);
    join!(choose_character(a), choose_character(b));

    let (a, b) = seats(state);
    join!(roll_dice(a), roll_dice(b));
}

/// Round draw for both players.
pub(crate) async fn draw_round_cards(state: &mut MatchState) {
    let (a, b) = seats(state);
    join!(draw_cards(a), draw_cards(b));
}

async fn draw_cards(seat: Seat<'_>) {
    let Seat { player, comms, config, .. } = seat;
    let drawn = player.draw_cards(config.round_draw);
    comms.broadcast(&card_draw(player, drawn)).await;
}

fn card_draw(player: &PlayerState, drawn: Vec<CardId>) -> Event {
    Event::CardDraw {
        side: player.id,
        deck_size: player.deck.len(),
        hand: Some(player.hand.ids()),
        amount: drawn.len(),
        cards: Some(drawn),
    }
}

/// Draw the opening hand and let the player send some of it back.
async fn draw_opening_hand(seat: Seat<'_>) {
    let Seat { player, comms, mut rng, config } = seat;

    let drawn = player.draw_cards(config.opening_hand);
    comms.broadcast(&card_draw(player, drawn.clone())).await;

    let discarded = match comms.request(CardsChangeRequest { possible: drawn }).await {
        Ok(cards) => cards,
        Err(Cancelled::NoReply) => Vec::new(),
        Err(Cancelled::Invalid) => {
            comms.report(Fault::INVALID_CARDS).await;
            Vec::new()
        }
        Err(malformed) => {
            if let Some(fault) = malformed.fault() {
                comms.report(fault).await;
            }
            Vec::new()
        }
    };

    // Accepted discards are a sub-multiset of the drawn cards, all in hand.
    let discarded = if player.return_cards(&discarded, &mut rng) {
        discarded
    } else {
        comms.report(Fault::INVALID_CARDS).await;
        Vec::new()
    };
    let replacements = player.draw_cards(discarded.len());
    debug!(player = %player.id, discarded = discarded.len(), "mulligan");

    let event = Event::CardsChange {
        side: player.id,
        deck_size: player.deck.len(),
        hand: Some(player.hand.ids()),
        amount: replacements.len(),
        drawn_cards: Some(replacements),
        discarded: discarded.len(),
        discarded_cards: Some(discarded),
    };
    comms.broadcast(&event).await;
}

/// Pick the starting active character. Falls back to the first living
/// roster entry.
async fn choose_character(seat: Seat<'_>) {
    let Seat { player, comms, .. } = seat;

    let possible: Vec<_> = player.alive_characters().map(|c| c.id()).collect();
    let Some(&fallback) = possible.first() else {
        comms.report(Fault::DEFEATED).await;
        return;
    };

    let request = CharacterRequest { possible, possible_enemy: None };
    let chosen = match comms.request(request).await {
        Ok(id) => id,
        Err(_) => {
            comms.report(Fault::NO_CHARACTER).await;
            fallback
        }
    };

    match player.switch_character(chosen) {
        Ok(previous) => {
            let event = Event::Switch { side: player.id, target: chosen, previous };
            comms.broadcast(&event).await;
        }
        Err(fault) => comms.report(fault).await,
    }
}

/// Roll the starting pool and let the player reroll part of it.
async fn roll_dice(seat: Seat<'_>) {
    let Seat { player, comms, mut rng, config } = seat;

    let rolled = player.dice.roll(config.dice_count, &mut rng);
    let event = Event::DiceAdd {
        side: player.id,
        current_amount: player.dice.len(),
        current: Some(player.dice.dice().to_vec()),
        amount: rolled.len(),
        dice: Some(rolled),
    };
    comms.broadcast(&event).await;

    let possible = player.dice.dice().to_vec();
    let indices = match comms.request(DiceChangeRequest { possible }).await {
        Ok(indices) => indices,
        Err(Cancelled::NoReply) => Vec::new(),
        Err(Cancelled::Invalid) => {
            comms.report(Fault::INVALID_DICE).await;
            Vec::new()
        }
        Err(malformed) => {
            if let Some(fault) = malformed.fault() {
                comms.report(fault).await;
            }
            Vec::new()
        }
    };

    let new_dice = player.dice.reroll(&indices, &mut rng);
    debug!(player = %player.id, rerolled = new_dice.len(), "reroll");

    let event = Event::DiceReroll {
        side: player.id,
        current_amount: player.dice.len(),
        current: Some(player.dice.dice().to_vec()),
        amount: new_dice.len(),
        rerolled: Some(indices),
        new_dice: Some(new_dice),
    };
    comms.broadcast(&event).await;
}
