//! Table-wide constants and default stakes.

use super::entities::Chips;

/// One human seat plus up to five bots.
pub const MAX_SEATS: usize = 6;

pub const HOLE_CARD_COUNT: usize = 2;
pub const FLOP_SIZE: usize = 3;
pub const BOARD_SIZE: usize = 5;

pub const DEFAULT_CHIPS: Chips = 1000;
pub const DEFAULT_SMALL_BLIND: Chips = 5;
pub const DEFAULT_BIG_BLIND: Chips = 10;

/// Minimum buy-in, expressed in big blinds.
pub const MIN_BUY_IN_BIG_BLINDS: Chips = 20;

/// Delay before a finished betting state resolves the hand.
pub const HAND_TRANSITION_DELAY_MS: u64 = 1000;

/// Delay before a closed round reveals the next street.
pub const STREET_ADVANCE_DELAY_MS: u64 = 1000;

/// Pause on the revealed hands before the pot is awarded.
pub const SHOWDOWN_REVEAL_DELAY_MS: u64 = 2000;

/// Thinking time before a bot acts.
pub const BOT_TURN_DELAY_MS: u64 = 2000;
