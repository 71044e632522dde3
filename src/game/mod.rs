//! Poker game engine - the pure event reducer and its parts.
//!
//! Everything in this module is synchronous and suspension-free: given a
//! state and an event, [`reducer::reduce`] returns immediately with a
//! fresh state and a list of deferred effects. Timing, bot turns, and
//! persistence live outside, in the scheduler and collaborator modules.

pub mod betting;
pub mod constants;
pub mod deck;
pub mod display;
pub mod entities;
pub mod errors;
pub mod hand;
pub mod progression;
pub mod reducer;
pub mod setup;

pub use betting::{apply_action, first_to_act, next_active_seat, round_status, RoundStatus};
pub use deck::{Deck, DECK_SIZE};
pub use display::{action_label, big_blind_seat};
pub use entities::{
    BotProfile, Card, Chips, GameState, Phase, Player, PlayerAction, PlayerKind, SeatIndex,
    Street, Suit, Value,
};
pub use errors::EngineError;
pub use hand::{best_hand_value, evaluate_hand, evaluate_showdown, HandCategory, HandValue};
pub use progression::{advance_street, end_hand, start_hand};
pub use reducer::{reduce, GameEffect, GameEvent, Lane};
pub use setup::{init_game, resume_game, start_game, BotSeat, ConfigError, PregameConfig};
