//! Short display labels for player actions.
//!
//! The engine stores the label on the player record as an opaque string;
//! only UIs interpret it. Labels are computed from the pre-action table
//! state plus the post-action player, so "Raise to $n" can show the
//! seat's new round total.

use super::betting::next_active_seat;
use super::entities::{GameState, Player, PlayerAction, SeatIndex};

/// The seat posting the big blind: two active seats past the button.
#[must_use]
pub fn big_blind_seat(state: &GameState) -> SeatIndex {
    let small_blind = next_active_seat(
        &state.players,
        state.dealer_button.unwrap_or(state.players.len() - 1),
    );
    next_active_seat(&state.players, small_blind)
}

/// Label for `action` taken by `player`, where `state` is the table
/// before the action and `player` the seat after it.
///
/// A call shows as "Check" when the seat already satisfied the round's
/// requirement: no wager outstanding, or the big-blind seat sitting on
/// exactly the big blind.
#[must_use]
pub fn action_label(state: &GameState, player: &Player, action: PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "Fold".to_string(),
        PlayerAction::AllIn => "All In".to_string(),
        PlayerAction::Call => {
            let big_blind_option =
                player.seat == big_blind_seat(state) && player.current_bet == state.big_blind;
            if state.current_bet == 0 || big_blind_option {
                "Check".to_string()
            } else {
                "Call".to_string()
            }
        }
        PlayerAction::Bet(amount) => {
            if state.current_bet == 0 {
                format!("Bet ${amount}")
            } else {
                format!("Raise to ${}", player.current_bet)
            }
        }
    }
}
