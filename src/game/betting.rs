//! Betting round mechanics: action application, turn rotation, and the
//! round-closure check.

use serde::{Deserialize, Serialize};

use super::display::action_label;
use super::entities::{GameState, Player, PlayerAction, SeatIndex};

/// Classification of the current betting round, a pure function of the
/// non-folded seats.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RoundStatus {
    /// Betting continues.
    Open,
    /// Exactly one non-folded seat remains; the hand is decided.
    LoneSurvivor,
    /// Every active seat has acted and matched the table bet.
    AllMatched,
}

#[must_use]
pub fn round_status(state: &GameState) -> RoundStatus {
    let active: Vec<&Player> = state.players.iter().filter(|p| p.is_active()).collect();
    if active.len() == 1 {
        return RoundStatus::LoneSurvivor;
    }
    let all_acted = active.iter().all(|p| p.action.is_some());
    let all_matched = active.iter().all(|p| p.current_bet == state.current_bet);
    if all_acted && all_matched {
        RoundStatus::AllMatched
    } else {
        RoundStatus::Open
    }
}

/// First non-folded seat strictly after `button`, scanning at most one
/// full lap. `None` means no button yet, so the scan starts at seat 0.
/// Falls back to the starting candidate if every seat is folded, so the
/// search always terminates.
#[must_use]
pub fn first_to_act(players: &[Player], button: Option<SeatIndex>) -> SeatIndex {
    let n = players.len();
    let start = button.map_or(0, |b| (b + 1) % n);
    let mut seat = start;
    for _ in 0..n {
        if players[seat].is_active() {
            return seat;
        }
        seat = (seat + 1) % n;
    }
    start
}

/// Next non-folded seat strictly after `from`, same termination policy.
#[must_use]
pub fn next_active_seat(players: &[Player], from: SeatIndex) -> SeatIndex {
    first_to_act(players, Some(from))
}

/// Apply one action to the seat at `current_player` and rotate the turn.
///
/// If that seat already holds a recorded action this round the call is a
/// no-op returning a state structurally identical to the input; a
/// duplicate or late-arriving dispatch is therefore harmless.
///
/// A `bet` clears every seat's recorded action and label before it is
/// applied: a wager reopens the round for the whole table, including
/// seats that had already acted.
#[must_use]
pub fn apply_action(state: &GameState, action: PlayerAction) -> GameState {
    let mut next = state.clone();
    let i = next.current_player;

    if next.players[i].action.is_some() {
        // Already acted this round.
        return next;
    }

    let mut pot = next.pot;
    let mut current_bet = next.current_bet;

    match action {
        PlayerAction::Fold => {
            let player = &mut next.players[i];
            player.folded = true;
            player.action = Some(PlayerAction::Fold);
            player.current_bet = 0;
            player.total_bet = 0;
        }
        PlayerAction::Call => {
            let player = &mut next.players[i];
            let to_call = current_bet.saturating_sub(player.current_bet);
            let paid = player.chips.min(to_call);
            player.chips -= paid;
            pot += paid;
            player.current_bet += paid;
            player.total_bet += paid;
            player.action = Some(PlayerAction::Call);
        }
        PlayerAction::Bet(amount) => {
            for player in &mut next.players {
                player.clear_round_action();
            }
            let player = &mut next.players[i];
            let amount = amount.min(player.chips);
            player.chips -= amount;
            pot += amount;
            player.current_bet += amount;
            player.total_bet += amount;
            current_bet = current_bet.max(player.current_bet);
            player.action = Some(PlayerAction::Bet(amount));
        }
        // Reserved: no behavior of its own in this version. The label is
        // still produced and the turn still advances.
        PlayerAction::AllIn => {}
    }

    let label = action_label(state, &next.players[i], action);
    next.players[i].displayed_action = Some(label);

    next.pot = pot;
    next.current_bet = current_bet;
    next.current_player = next_active_seat(&next.players, i);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Chips, Phase, PlayerKind, Street};
    use crate::game::deck::Deck;

    fn table(chips: &[Chips]) -> GameState {
        let players = chips
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Player::new(format!("{}", i + 1), format!("p{i}"), PlayerKind::Human, c, i)
            })
            .collect();
        GameState {
            playing: true,
            deck: Deck::empty(),
            community: vec![],
            players,
            street: Street::Preflop,
            pot: 0,
            big_blind: 10,
            small_blind: 5,
            dealer_button: Some(0),
            current_bet: 0,
            current_player: 0,
            hand_winner: None,
            phase: Phase::InHand,
        }
    }

    #[test]
    fn bet_moves_chips_and_raises_table_bet() {
        let state = table(&[1000, 1000]);
        let next = apply_action(&state, PlayerAction::Bet(50));

        assert_eq!(next.players[0].chips, 950);
        assert_eq!(next.players[0].current_bet, 50);
        assert_eq!(next.players[0].total_bet, 50);
        assert_eq!(next.players[0].action, Some(PlayerAction::Bet(50)));
        assert_eq!(next.pot, 50);
        assert_eq!(next.current_bet, 50);
        assert_eq!(next.current_player, 1);
    }

    #[test]
    fn bet_reopens_round_for_everyone() {
        let mut state = table(&[1000, 1000, 1000]);
        state.players[0].action = Some(PlayerAction::Call);
        state.players[2].action = Some(PlayerAction::Call);
        state.players[2].displayed_action = Some("Check".into());
        state.current_player = 1;

        let next = apply_action(&state, PlayerAction::Bet(40));

        assert!(next.players[0].action.is_none());
        assert!(next.players[2].action.is_none());
        assert!(next.players[2].displayed_action.is_none());
        assert_eq!(next.players[1].action, Some(PlayerAction::Bet(40)));
    }

    #[test]
    fn bet_clamps_to_stack() {
        let state = table(&[30, 1000]);
        let next = apply_action(&state, PlayerAction::Bet(500));

        assert_eq!(next.players[0].chips, 0);
        assert_eq!(next.players[0].current_bet, 30);
        assert_eq!(next.pot, 30);
        assert_eq!(next.players[0].action, Some(PlayerAction::Bet(30)));
    }

    #[test]
    fn call_pays_only_the_difference() {
        let mut state = table(&[1000, 1000]);
        state.current_bet = 50;
        state.players[0].current_bet = 20;

        let next = apply_action(&state, PlayerAction::Call);

        assert_eq!(next.players[0].chips, 970);
        assert_eq!(next.players[0].current_bet, 50);
        assert_eq!(next.pot, 30);
    }

    #[test]
    fn call_with_nothing_owed_is_a_check() {
        let state = table(&[1000, 1000]);
        let next = apply_action(&state, PlayerAction::Call);

        assert_eq!(next.players[0].chips, 1000);
        assert_eq!(next.pot, 0);
        assert_eq!(next.players[0].action, Some(PlayerAction::Call));
        assert_eq!(next.players[0].displayed_action.as_deref(), Some("Check"));
    }

    #[test]
    fn fold_zeroes_bets_and_marks_seat() {
        let mut state = table(&[1000, 1000]);
        state.players[0].current_bet = 20;
        state.players[0].total_bet = 60;

        let next = apply_action(&state, PlayerAction::Fold);

        assert!(next.players[0].folded);
        assert_eq!(next.players[0].current_bet, 0);
        assert_eq!(next.players[0].total_bet, 0);
    }

    #[test]
    fn double_action_is_idempotent() {
        let mut state = table(&[1000, 1000]);
        state.players[0].action = Some(PlayerAction::Call);

        let next = apply_action(&state, PlayerAction::Bet(100));
        assert_eq!(next, state);
    }

    #[test]
    fn turn_skips_folded_seats() {
        let mut state = table(&[1000, 1000, 1000]);
        state.players[1].folded = true;

        let next = apply_action(&state, PlayerAction::Call);
        assert_eq!(next.current_player, 2);
    }

    #[test]
    fn round_status_lone_survivor() {
        let mut state = table(&[1000, 1000, 1000]);
        state.players[0].folded = true;
        state.players[2].folded = true;
        assert_eq!(round_status(&state), RoundStatus::LoneSurvivor);
    }

    #[test]
    fn round_status_all_matched() {
        let mut state = table(&[1000, 1000]);
        state.current_bet = 50;
        for p in &mut state.players {
            p.action = Some(PlayerAction::Call);
            p.current_bet = 50;
        }
        assert_eq!(round_status(&state), RoundStatus::AllMatched);
    }

    #[test]
    fn round_status_open_until_bets_match() {
        let mut state = table(&[1000, 1000]);
        state.current_bet = 50;
        state.players[0].action = Some(PlayerAction::Bet(50));
        state.players[0].current_bet = 50;
        state.players[1].action = Some(PlayerAction::Call);
        state.players[1].current_bet = 20;
        assert_eq!(round_status(&state), RoundStatus::Open);
    }

    #[test]
    fn first_to_act_skips_folded_and_terminates() {
        let mut state = table(&[1000, 1000, 1000]);
        state.players[1].folded = true;
        assert_eq!(first_to_act(&state.players, Some(0)), 2);
        assert_eq!(first_to_act(&state.players, None), 0);

        // Every seat folded: fall back to the starting candidate.
        for p in &mut state.players {
            p.folded = true;
        }
        assert_eq!(first_to_act(&state.players, Some(1)), 2);
    }
}
