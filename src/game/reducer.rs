//! The event reducer at the heart of the engine.
//!
//! `reduce` is a pure function from a state and an event to the next
//! state plus a list of effects. It never sleeps, never performs I/O,
//! and never invokes an effect itself; effects are descriptions handed
//! to a scheduler, which dispatches the embedded events back in after
//! their delays elapse.
//!
//! Events that do not apply to the current phase reduce to the
//! unchanged state with no effects. Only defects that indicate an
//! upstream bug (a bad deal, an empty winner set) surface as errors.

use serde::{Deserialize, Serialize};

use super::betting::{apply_action, round_status, RoundStatus};
use super::constants::{
    BOT_TURN_DELAY_MS, HAND_TRANSITION_DELAY_MS, SHOWDOWN_REVEAL_DELAY_MS,
    STREET_ADVANCE_DELAY_MS,
};
use super::entities::{GameState, Phase, PlayerAction, Street};
use super::errors::EngineError;
use super::hand::evaluate_showdown;
use super::progression::{advance_street, end_hand, start_hand};
use super::setup::{init_game, start_game, PregameConfig};

/// Everything that can happen to a table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum GameEvent {
    /// Seat the configured players and begin play. The configuration
    /// must already be validated; the reducer does not re-check it.
    InitiateGame(PregameConfig),
    StartNextHand,
    /// An action from the human seat.
    PlayerAction(PlayerAction),
    /// An action chosen by a bot strategy.
    BotAction(PlayerAction),
    AdvanceStreet,
    StartShowdown,
    EndHand,
    /// Tear the table down to the lobby.
    EndGame,
}

/// Timer lane. At most one timer is pending per lane; scheduling on a
/// lane supersedes whatever that lane held.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lane {
    Bot,
    Hand,
    Street,
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bot => write!(f, "bot"),
            Self::Hand => write!(f, "hand"),
            Self::Street => write!(f, "street"),
        }
    }
}

/// A deferred instruction for the scheduler.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameEffect {
    /// Dispatch `event` once `delay_ms` elapses.
    After {
        delay_ms: u64,
        event: GameEvent,
        lane: Lane,
    },
    /// Once `delay_ms` elapses, consult the bot strategy against the
    /// state current at that moment and dispatch its choice as a
    /// [`GameEvent::BotAction`]. Carries no event because the decision
    /// must not be frozen at schedule time.
    BotTurnAfter { delay_ms: u64, lane: Lane },
}

fn after(delay_ms: u64, event: GameEvent, lane: Lane) -> GameEffect {
    GameEffect::After { delay_ms, event, lane }
}

/// Effect for the seat now holding the turn, if it belongs to a bot.
fn bot_turn_effect(state: &GameState) -> Vec<GameEffect> {
    if state.phase == Phase::InHand && state.current_seat_is_bot() {
        vec![GameEffect::BotTurnAfter { delay_ms: BOT_TURN_DELAY_MS, lane: Lane::Bot }]
    } else {
        Vec::new()
    }
}

/// Effects following an applied action, classified from the post-action
/// round: a lone survivor ends the hand, a matched round advances the
/// street, an open round hands the turn to a bot if one holds it.
fn post_action_effects(state: &GameState) -> Vec<GameEffect> {
    match round_status(state) {
        RoundStatus::LoneSurvivor => {
            vec![after(HAND_TRANSITION_DELAY_MS, GameEvent::EndHand, Lane::Hand)]
        }
        RoundStatus::AllMatched => {
            vec![after(STREET_ADVANCE_DELAY_MS, GameEvent::AdvanceStreet, Lane::Street)]
        }
        RoundStatus::Open => bot_turn_effect(state),
    }
}

/// Reduce one event against `state`.
///
/// Always returns a fresh state; the input is never mutated. The effect
/// list is ordered but in practice never holds more than one entry.
pub fn reduce(
    state: &GameState,
    event: &GameEvent,
) -> Result<(GameState, Vec<GameEffect>), EngineError> {
    log::debug!("reduce: phase={:?} event={:?}", state.phase, event);

    let reduced = match event {
        GameEvent::InitiateGame(config) => {
            let next = start_game(state, config);
            let effects = vec![after(0, GameEvent::StartNextHand, Lane::Hand)];
            (next, effects)
        }
        GameEvent::StartNextHand => {
            if state.playing {
                let next = start_hand(state);
                let effects = bot_turn_effect(&next);
                (next, effects)
            } else {
                (state.clone(), Vec::new())
            }
        }
        GameEvent::PlayerAction(action) | GameEvent::BotAction(action) => {
            if state.phase != Phase::InHand {
                (state.clone(), Vec::new())
            } else {
                let next = apply_action(state, *action);
                let effects = post_action_effects(&next);
                (next, effects)
            }
        }
        GameEvent::AdvanceStreet => {
            if state.phase != Phase::InHand {
                (state.clone(), Vec::new())
            } else if state.street == Street::River
                && round_status(state) == RoundStatus::AllMatched
            {
                let effects =
                    vec![after(HAND_TRANSITION_DELAY_MS, GameEvent::StartShowdown, Lane::Hand)];
                (state.clone(), effects)
            } else {
                let next = advance_street(state);
                let effects = bot_turn_effect(&next);
                (next, effects)
            }
        }
        GameEvent::StartShowdown => {
            let mut next = state.clone();
            next.players = evaluate_showdown(state)?;
            next.phase = Phase::Showdown;
            let effects =
                vec![after(SHOWDOWN_REVEAL_DELAY_MS, GameEvent::EndHand, Lane::Hand)];
            (next, effects)
        }
        GameEvent::EndHand => (end_hand(state)?, Vec::new()),
        GameEvent::EndGame => (init_game(), Vec::new()),
    };

    Ok(reduced)
}
