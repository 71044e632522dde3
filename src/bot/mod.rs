//! Bot players.
//!
//! A bot strategy is a plain function of the table state: the scheduler
//! calls it when a bot-turn timer fires and dispatches whatever action
//! it returns. Strategies never mutate state and never block.
//!
//! Profiles ([`crate::game::BotProfile`]) are carried on the seat and
//! reserved for tuning; every profile currently routes to the same
//! hand-strength strategy in [`decision`].

pub mod decision;

use std::sync::Arc;

use crate::game::{GameState, PlayerAction};

/// A pluggable bot strategy. `None` means "no action": the seat is not
/// a bot, it is not that seat's turn, or the strategy declines to act.
pub type BotStrategy = Arc<dyn Fn(&GameState) -> Option<PlayerAction> + Send + Sync>;

/// The default strategy, boxed for the scheduler.
#[must_use]
pub fn default_strategy() -> BotStrategy {
    Arc::new(decision::choose_action)
}
