//! Core table entities: cards, seats, players, and the game state itself.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants;
use super::deck::Deck;
use super::hand::HandValue;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

impl Suit {
    pub const ALL: [Self; 4] = [Self::Heart, Self::Diamond, Self::Club, Self::Spade];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Heart => "♥",
            Self::Diamond => "♦",
            Self::Club => "♣",
            Self::Spade => "♠",
        };
        write!(f, "{repr}")
    }
}

/// Card rank as a plain value: 2..=10, J=11, Q=12, K=13, A=14.
pub type Value = u8;

/// Lowest and highest playable ranks. Aces are always dealt high;
/// the evaluator handles the ace-low straight separately.
pub const MIN_VALUE: Value = 2;
pub const MAX_VALUE: Value = 14;

/// An immutable card value.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card {
    pub rank: Value,
    pub suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rank = match self.rank {
            14 => "A".to_string(),
            13 => "K".to_string(),
            12 => "Q".to_string(),
            11 => "J".to_string(),
            v => v.to_string(),
        };
        let repr = format!("{rank}{}", self.suit);
        write!(f, "{repr:>3}")
    }
}

/// Type alias for whole chips. Bets and stacks are whole chips;
/// there's no point arguing over pennies.
pub type Chips = u32;

/// Type alias for seat positions around the table.
pub type SeatIndex = usize;

/// Play style presets for automated opponents. All profiles currently
/// route to the basic strategy; the split exists so a seat keeps its
/// configured personality across hands.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BotProfile {
    Basic,
    Random,
    Tight,
    Aggressive,
}

impl fmt::Display for BotProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Basic => "basic",
            Self::Random => "random",
            Self::Tight => "tight",
            Self::Aggressive => "aggressive",
        };
        write!(f, "{repr}")
    }
}

/// Who controls a seat.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Bot { profile: BotProfile },
}

impl PlayerKind {
    #[must_use]
    pub const fn is_bot(&self) -> bool {
        matches!(self, Self::Bot { .. })
    }
}

/// A single action a seat can take during a betting round.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "amount")]
pub enum PlayerAction {
    Fold,
    Call,
    Bet(Chips),
    /// Reserved. Callers express an all-in as a `Bet` of the full stack.
    AllIn,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Fold => "folds".to_string(),
            Self::Call => "calls".to_string(),
            Self::Bet(amount) => format!("bets ${amount}"),
            Self::AllIn => "all-ins".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// A betting phase within one hand.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Number of community cards that must be showing on this street.
    #[must_use]
    pub const fn community_len(self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => constants::FLOP_SIZE,
            Self::Turn => 4,
            Self::River => constants::BOARD_SIZE,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Preflop => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        write!(f, "{repr}")
    }
}

/// Coarse lifecycle phase of the table.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Dealing,
    InHand,
    Showdown,
    HandOver,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub kind: PlayerKind,
    pub chips: Chips,
    /// Hole cards. Holds 0 or 2 cards, 1 only transiently while dealing.
    pub hand: Vec<Card>,
    pub folded: bool,
    /// Chips wagered this betting round.
    pub current_bet: Chips,
    /// Chips wagered this hand.
    pub total_bet: Chips,
    /// Set at most once per betting round; a raise clears it for everyone.
    pub action: Option<PlayerAction>,
    /// Opaque display label supplied by the label collaborator. The engine
    /// stores it next to `action` but never interprets it.
    pub displayed_action: Option<String>,
    /// Assigned only at showdown.
    pub hand_value: Option<HandValue>,
    pub seat: SeatIndex,
}

impl Player {
    #[must_use]
    pub fn new(id: String, name: String, kind: PlayerKind, chips: Chips, seat: SeatIndex) -> Self {
        Self {
            id,
            name,
            kind,
            chips,
            hand: Vec::with_capacity(constants::HOLE_CARD_COUNT),
            folded: false,
            current_bet: 0,
            total_bet: 0,
            action: None,
            displayed_action: None,
            hand_value: None,
            seat,
        }
    }

    /// Wipe all per-hand state ahead of a fresh deal.
    pub fn reset_for_hand(&mut self) {
        self.hand.clear();
        self.folded = false;
        self.current_bet = 0;
        self.total_bet = 0;
        self.action = None;
        self.displayed_action = None;
        self.hand_value = None;
    }

    /// Clear the recorded action and its label, reopening the round
    /// for this seat.
    pub fn clear_round_action(&mut self) {
        self.action = None;
        self.displayed_action = None;
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.folded
    }
}

/// Complete table state. Created once as a lobby, then rebuilt by every
/// transition; nothing mutates a `GameState` in place across reductions.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameState {
    pub playing: bool,
    pub deck: Deck,
    pub community: Vec<Card>,
    /// Index = fixed seating and turn order.
    pub players: Vec<Player>,
    pub street: Street,
    pub pot: Chips,
    pub big_blind: Chips,
    pub small_blind: Chips,
    /// `None` until the first hand is dealt.
    pub dealer_button: Option<SeatIndex>,
    /// Amount required to match this betting round.
    pub current_bet: Chips,
    pub current_player: SeatIndex,
    pub hand_winner: Option<SeatIndex>,
    pub phase: Phase,
}

impl GameState {
    /// Whether the seat whose turn it is belongs to a bot, and the table
    /// is actually mid-hand.
    #[must_use]
    pub fn current_seat_is_bot(&self) -> bool {
        self.phase == Phase::InHand
            && self
                .players
                .get(self.current_player)
                .is_some_and(|p| p.kind.is_bot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_display_face_cards() {
        let ace = Card { rank: 14, suit: Suit::Spade };
        let king = Card { rank: 13, suit: Suit::Heart };
        let ten = Card { rank: 10, suit: Suit::Club };

        assert!(format!("{ace}").contains('A'));
        assert!(format!("{king}").contains('K'));
        assert!(format!("{ten}").contains("10"));
    }

    #[test]
    fn suit_display() {
        assert_eq!(format!("{}", Suit::Heart), "♥");
        assert_eq!(format!("{}", Suit::Diamond), "♦");
        assert_eq!(format!("{}", Suit::Club), "♣");
        assert_eq!(format!("{}", Suit::Spade), "♠");
    }

    #[test]
    fn street_community_lengths() {
        assert_eq!(Street::Preflop.community_len(), 0);
        assert_eq!(Street::Flop.community_len(), 3);
        assert_eq!(Street::Turn.community_len(), 4);
        assert_eq!(Street::River.community_len(), 5);
    }

    #[test]
    fn player_reset_clears_per_hand_state() {
        let mut player = Player::new("1".into(), "You".into(), PlayerKind::Human, 1000, 0);
        player.folded = true;
        player.current_bet = 50;
        player.total_bet = 120;
        player.action = Some(PlayerAction::Call);
        player.displayed_action = Some("Call".into());
        player.hand = vec![
            Card { rank: 14, suit: Suit::Spade },
            Card { rank: 13, suit: Suit::Heart },
        ];

        player.reset_for_hand();

        assert!(!player.folded);
        assert_eq!(player.current_bet, 0);
        assert_eq!(player.total_bet, 0);
        assert!(player.action.is_none());
        assert!(player.displayed_action.is_none());
        assert!(player.hand.is_empty());
        assert!(player.hand_value.is_none());
    }

    #[test]
    fn player_kind_is_bot() {
        assert!(!PlayerKind::Human.is_bot());
        assert!(PlayerKind::Bot { profile: BotProfile::Basic }.is_bot());
    }

    #[test]
    fn action_display() {
        assert_eq!(format!("{}", PlayerAction::Fold), "folds");
        assert_eq!(format!("{}", PlayerAction::Bet(75)), "bets $75");
    }
}
