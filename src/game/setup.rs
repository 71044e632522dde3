//! Lobby construction and pregame configuration.
//!
//! The human always occupies seat 0 with id `"1"`; bots fill the
//! remaining seats in configuration order with ids counting up from
//! `"2"`. A configuration is validated as a whole before any table is
//! built from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{
    DEFAULT_BIG_BLIND, DEFAULT_CHIPS, DEFAULT_SMALL_BLIND, MAX_SEATS, MIN_BUY_IN_BIG_BLINDS,
};
use super::deck::Deck;
use super::entities::{
    BotProfile, Chips, GameState, Phase, Player, PlayerKind, Street,
};

/// A bot to seat at the table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BotSeat {
    pub name: String,
    pub profile: BotProfile,
}

/// Table parameters chosen before the first hand.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PregameConfig {
    pub bots: Vec<BotSeat>,
    pub buy_in: Chips,
    pub big_blind: Chips,
    pub small_blind: Chips,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("blinds and buy-in must all be greater than zero")]
    ZeroStake,
    #[error("big blind {big_blind} must exceed small blind {small_blind}")]
    BlindOrder { big_blind: Chips, small_blind: Chips },
    #[error("big blind {big_blind} must be a multiple of small blind {small_blind}")]
    BlindRatio { big_blind: Chips, small_blind: Chips },
    #[error("buy-in {buy_in} is under {min} ({MIN_BUY_IN_BIG_BLINDS} big blinds)")]
    BuyInTooSmall { buy_in: Chips, min: Chips },
    #[error("a table seats at most {max} bots, got {got}", max = MAX_SEATS - 1)]
    TooManyBots { got: usize },
}

impl Default for PregameConfig {
    fn default() -> Self {
        Self {
            bots: Vec::new(),
            buy_in: DEFAULT_CHIPS,
            big_blind: DEFAULT_BIG_BLIND,
            small_blind: DEFAULT_SMALL_BLIND,
        }
    }
}

impl PregameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buy_in == 0 || self.big_blind == 0 || self.small_blind == 0 {
            return Err(ConfigError::ZeroStake);
        }
        if self.big_blind <= self.small_blind {
            return Err(ConfigError::BlindOrder {
                big_blind: self.big_blind,
                small_blind: self.small_blind,
            });
        }
        if self.big_blind % self.small_blind != 0 {
            return Err(ConfigError::BlindRatio {
                big_blind: self.big_blind,
                small_blind: self.small_blind,
            });
        }
        let min = MIN_BUY_IN_BIG_BLINDS * self.big_blind;
        if self.buy_in < min {
            return Err(ConfigError::BuyInTooSmall { buy_in: self.buy_in, min });
        }
        if self.bots.len() > MAX_SEATS - 1 {
            return Err(ConfigError::TooManyBots { got: self.bots.len() });
        }
        Ok(())
    }
}

/// The lobby: the human seated alone, no hand dealt, default stakes.
#[must_use]
pub fn init_game() -> GameState {
    GameState {
        playing: false,
        deck: Deck::empty(),
        community: Vec::new(),
        players: vec![Player::new(
            "1".to_string(),
            "You".to_string(),
            PlayerKind::Human,
            DEFAULT_CHIPS,
            0,
        )],
        street: Street::Preflop,
        pot: 0,
        big_blind: DEFAULT_BIG_BLIND,
        small_blind: DEFAULT_SMALL_BLIND,
        dealer_button: None,
        current_bet: 0,
        current_player: 0,
        hand_winner: None,
        phase: Phase::HandOver,
    }
}

/// Seat the configured bots next to the human and arm the table for its
/// first hand. Every seat, the human included, starts on the buy-in.
///
/// Assumes a validated configuration; callers run
/// [`PregameConfig::validate`] before any event reaches the engine.
#[must_use]
pub fn start_game(state: &GameState, config: &PregameConfig) -> GameState {
    let mut next = state.clone();
    next.players.truncate(1);
    next.players[0].chips = config.buy_in;
    for (i, bot) in config.bots.iter().enumerate() {
        let seat = i + 1;
        next.players.push(Player::new(
            format!("{}", seat + 1),
            bot.name.clone(),
            PlayerKind::Bot { profile: bot.profile },
            config.buy_in,
            seat,
        ));
    }

    next.playing = true;
    next.big_blind = config.big_blind;
    next.small_blind = config.small_blind;
    next.dealer_button = None;
    next.phase = Phase::Dealing;
    next
}

/// Overlay persisted chip counts onto a freshly started table, matching
/// by player id. Ids absent from the snapshot keep the buy-in.
#[must_use]
pub fn resume_game(
    state: &GameState,
    chips: &std::collections::HashMap<String, Chips>,
) -> GameState {
    let mut next = state.clone();
    for player in &mut next.players {
        if let Some(&saved) = chips.get(&player.id) {
            player.chips = saved;
        }
    }
    next
}
