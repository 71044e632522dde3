//! Hand lifecycle: dealing a fresh hand, revealing streets, and
//! resolving the pot.

use super::betting::first_to_act;
use super::constants::HOLE_CARD_COUNT;
use super::deck::Deck;
use super::entities::{GameState, Phase, Street};
use super::errors::EngineError;

/// Deal a fresh hand: new shuffled deck, all per-hand player state
/// reset, two hole cards per seat (one card to each seat in seating
/// order, twice), button and first-to-act advanced from the prior
/// button position.
///
/// The button moves to the first seat past the old button that was
/// still contesting the previous hand; the fold flags are read before
/// the reset so a seat that folded out does not inherit the button.
#[must_use]
pub fn start_hand(state: &GameState) -> GameState {
    let mut deck = Deck::shuffled();

    let mut players = state.players.clone();
    for player in &mut players {
        player.reset_for_hand();
    }

    for _ in 0..HOLE_CARD_COUNT {
        for player in &mut players {
            if let Some(card) = deck.draw() {
                player.hand.push(card);
            }
        }
    }

    let button = first_to_act(&state.players, state.dealer_button);

    let mut next = GameState {
        deck,
        community: Vec::with_capacity(5),
        players,
        street: Street::Preflop,
        pot: 0,
        current_bet: 0,
        dealer_button: Some(button),
        hand_winner: None,
        phase: Phase::InHand,
        ..state.clone()
    };
    next.current_player = first_to_act(&next.players, next.dealer_button);
    next
}

/// Reveal the next street and reset the betting round, or return the
/// state unchanged when no street transition applies.
///
/// Guarded: revealing cards before anyone has acted this round would
/// skip a betting round entirely, so that case is a no-op.
#[must_use]
pub fn advance_street(state: &GameState) -> GameState {
    if state.players.iter().all(|p| p.action.is_none()) {
        return state.clone();
    }

    let reveal = match (state.street, state.community.len()) {
        (Street::Preflop, 0) => Some((3, Street::Flop)),
        (Street::Flop, 3) => Some((1, Street::Turn)),
        (Street::Turn, 4) => Some((1, Street::River)),
        _ => None,
    };
    let Some((count, street)) = reveal else {
        return state.clone();
    };

    let mut next = state.clone();
    for _ in 0..count {
        if let Some(card) = next.deck.draw() {
            next.community.push(card);
        }
    }
    next.street = street;
    for player in &mut next.players {
        player.clear_round_action();
        player.current_bet = 0;
    }
    next.current_bet = 0;
    next.current_player = first_to_act(&state.players, state.dealer_button);
    next
}

/// Award the pot and close the hand.
///
/// Two mutually exclusive winner paths:
/// - exactly one non-folded seat remains (everyone else folded): that
///   seat wins outright, no hand values consulted;
/// - otherwise the winner is the strictly-greatest hand value among
///   non-folded seats holding one; ties keep the earliest seat.
///
/// Reaching the second path with no hand values assigned means showdown
/// evaluation never ran, which is a defect, not a quiet tie.
pub fn end_hand(state: &GameState) -> Result<GameState, EngineError> {
    let active: Vec<usize> = state
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_active())
        .map(|(i, _)| i)
        .collect();

    let winner = if active.len() == 1 {
        active[0]
    } else {
        let mut best: Option<usize> = None;
        for &i in &active {
            let Some(value) = &state.players[i].hand_value else {
                continue;
            };
            match best {
                Some(b) if state.players[b].hand_value.as_ref() >= Some(value) => {}
                _ => best = Some(i),
            }
        }
        best.ok_or(EngineError::NoShowdownCandidates)?
    };

    let mut next = state.clone();
    next.players[winner].chips += state.pot;
    next.pot = 0;
    next.current_bet = 0;
    next.phase = Phase::HandOver;
    next.hand_winner = Some(winner);
    Ok(next)
}
