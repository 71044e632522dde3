//! Hand-strength based bot decisions.
//!
//! Strength is a float in `[0.0, 1.0]`: preflop it is estimated from
//! the hole cards alone, postflop it is the made hand's category. The
//! action class (fold / call / raise) is deterministic in the strength
//! and the price to call; only the raise sizing is randomized.

use rand::Rng;

use crate::game::entities::{Card, Chips, GameState, Phase, PlayerAction, MAX_VALUE};
use crate::game::hand::{evaluate_hand, HandCategory};

/// Hand strength for high card (weakest made hand).
const STRENGTH_HIGH_CARD: f32 = 0.1;

/// Hand strength for one pair.
const STRENGTH_ONE_PAIR: f32 = 0.25;

/// Hand strength for two pair.
const STRENGTH_TWO_PAIR: f32 = 0.40;

/// Hand strength for three of a kind.
const STRENGTH_THREE_OF_A_KIND: f32 = 0.55;

/// Hand strength for a straight.
const STRENGTH_STRAIGHT: f32 = 0.70;

/// Hand strength for a flush.
const STRENGTH_FLUSH: f32 = 0.75;

/// Hand strength for a full house.
const STRENGTH_FULL_HOUSE: f32 = 0.85;

/// Hand strength for four of a kind.
const STRENGTH_FOUR_OF_A_KIND: f32 = 0.95;

/// Hand strength for a straight flush (nearly unbeatable).
const STRENGTH_STRAIGHT_FLUSH: f32 = 0.99;

/// Below this the bot folds rather than pay to continue.
const FOLD_THRESHOLD: f32 = 0.2;

/// At or above this the bot raises.
const RAISE_THRESHOLD: f32 = 0.55;

fn category_strength(category: HandCategory) -> f32 {
    match category {
        HandCategory::HighCard => STRENGTH_HIGH_CARD,
        HandCategory::OnePair => STRENGTH_ONE_PAIR,
        HandCategory::TwoPair => STRENGTH_TWO_PAIR,
        HandCategory::ThreeOfAKind => STRENGTH_THREE_OF_A_KIND,
        HandCategory::Straight => STRENGTH_STRAIGHT,
        HandCategory::Flush => STRENGTH_FLUSH,
        HandCategory::FullHouse => STRENGTH_FULL_HOUSE,
        HandCategory::FourOfAKind => STRENGTH_FOUR_OF_A_KIND,
        HandCategory::StraightFlush => STRENGTH_STRAIGHT_FLUSH,
    }
}

/// Rough preflop estimate from the hole cards alone: a pocket pair is
/// already one pair, anything else scales with the high card, with a
/// bonus for two broadway-ish ranks.
fn preflop_strength(hole: &[Card]) -> f32 {
    let [a, b] = hole else {
        return 0.0;
    };
    if a.rank == b.rank {
        return STRENGTH_ONE_PAIR + 0.2 * f32::from(a.rank) / f32::from(MAX_VALUE);
    }
    let high = a.rank.max(b.rank);
    let low = a.rank.min(b.rank);
    let mut strength = 0.25 * f32::from(high) / f32::from(MAX_VALUE);
    if low >= 10 {
        strength += 0.1;
    }
    strength
}

fn hand_strength(state: &GameState, hole: &[Card]) -> f32 {
    if state.community.is_empty() {
        return preflop_strength(hole);
    }
    let mut cards: Vec<Card> = hole.to_vec();
    cards.extend_from_slice(&state.community);
    category_strength(evaluate_hand(&cards).category)
}

/// Raise target: a random small multiple of the big blind on top of the
/// table bet. Action application clamps it to the stack.
fn raise_amount(state: &GameState, chips: Chips) -> Chips {
    let mut rng = rand::rng();
    let raise = state.big_blind * rng.random_range(2..=4);
    (state.current_bet + raise).min(chips)
}

/// Pick an action for the seat at `current_player`.
///
/// Returns `None` when no hand is in progress or the seat is not a bot,
/// so a late-firing timer is a harmless no-op for the caller.
#[must_use]
pub fn choose_action(state: &GameState) -> Option<PlayerAction> {
    if state.phase != Phase::InHand || !state.current_seat_is_bot() {
        return None;
    }

    let player = &state.players[state.current_player];
    let strength = hand_strength(state, &player.hand);
    let to_call = state.current_bet.saturating_sub(player.current_bet);

    let action = if strength >= RAISE_THRESHOLD {
        PlayerAction::Bet(raise_amount(state, player.chips))
    } else if to_call == 0 {
        // Checking is free.
        PlayerAction::Call
    } else if strength >= FOLD_THRESHOLD || to_call <= state.big_blind {
        PlayerAction::Call
    } else {
        PlayerAction::Fold
    };
    Some(action)
}
