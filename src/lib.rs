//! # Solo Poker
//!
//! A deterministic single-table Texas Hold'em engine for one human and
//! up to five bots.
//!
//! The core is a pure event reducer: `reduce(state, event)` returns a
//! fresh state plus a list of deferred effects, and never sleeps or
//! performs I/O. Everything time-shaped lives in the [`scheduler`]
//! module, which turns effects into `tokio` timers with at most one
//! pending timer per lane.
//!
//! ## Core Modules
//!
//! - [`game`]: entities, betting engine, street progression, hand
//!   evaluator, and the reducer itself
//! - [`bot`]: hand-strength bot strategies
//! - [`store`]: chip persistence between sessions
//! - [`scheduler`]: the table driver actor running effects on timers
//!
//! ## Example
//!
//! ```
//! use solo_poker::game::{init_game, reduce, GameEvent, PregameConfig};
//!
//! let lobby = init_game();
//! let config = PregameConfig::default();
//! let (state, effects) = reduce(&lobby, &GameEvent::InitiateGame(config)).unwrap();
//! assert!(state.playing);
//! assert_eq!(effects.len(), 1);
//! ```

/// Core game logic: entities, the betting engine, and the reducer.
pub mod game;
pub use game::{
    init_game, reduce, BotProfile, BotSeat, Card, Chips, ConfigError, GameEffect, GameEvent,
    GameState, HandCategory, HandValue, Lane, Phase, Player, PlayerAction, PlayerKind,
    PregameConfig, SeatIndex, Street, Suit,
};

/// Bot strategies.
pub mod bot;
pub use bot::{default_strategy, BotStrategy};

/// Chip persistence.
pub mod store;
pub use store::{ChipEntry, ChipStore, JsonChipStore};

/// The table driver running engine effects on timers.
pub mod scheduler;
pub use scheduler::{TableDriver, TableHandle};
