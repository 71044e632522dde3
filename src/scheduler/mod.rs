//! The table driver: an actor that owns the game state and runs the
//! engine's effects on real timers.
//!
//! The reducer is pure and never sleeps; this module is where its
//! deferred effects become `tokio` timers. The driver serializes every
//! dispatch through one inbox, so no two events are ever reduced
//! against the same state concurrently, and it keeps at most one
//! pending timer per [`Lane`]: scheduling on a lane aborts whatever
//! that lane held, so a superseded transition can never fire late into
//! a newer state.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::bot::BotStrategy;
use crate::game::entities::{GameState, Phase};
use crate::game::reducer::{reduce, GameEffect, GameEvent, Lane};
use crate::game::setup::{init_game, resume_game, PregameConfig};
use crate::store::{chip_entries, ChipStore};

const INBOX_CAPACITY: usize = 100;

/// Messages accepted by the driver.
#[derive(Debug)]
pub enum DriverMessage {
    /// Reduce an event and run its effects.
    Dispatch(GameEvent),
    /// A bot-turn timer fired: consult the strategy against the state
    /// as it is now, not as it was when the timer was armed.
    BotTurn,
    /// Snapshot the current state.
    GetState { response: oneshot::Sender<GameState> },
    /// Cancel every timer and stop the driver.
    Shutdown,
}

/// Handle for talking to a running [`TableDriver`].
#[derive(Clone)]
pub struct TableHandle {
    sender: mpsc::Sender<DriverMessage>,
}

impl TableHandle {
    /// Validate `config` and start a game with it.
    pub async fn initiate_game(&self, config: PregameConfig) -> anyhow::Result<()> {
        config.validate()?;
        self.dispatch(GameEvent::InitiateGame(config)).await
    }

    /// Queue an event for reduction.
    pub async fn dispatch(&self, event: GameEvent) -> anyhow::Result<()> {
        self.sender
            .send(DriverMessage::Dispatch(event))
            .await
            .context("table driver is closed")
    }

    /// Snapshot the table state.
    pub async fn state(&self) -> anyhow::Result<GameState> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(DriverMessage::GetState { response: tx })
            .await
            .context("table driver is closed")?;
        rx.await.context("table driver dropped the request")
    }

    /// Stop the driver, cancelling every pending timer.
    pub async fn shutdown(&self) -> anyhow::Result<()> {
        self.sender
            .send(DriverMessage::Shutdown)
            .await
            .context("table driver is closed")
    }
}

/// Actor owning one table: the state, the per-lane timer map, the bot
/// strategy, and the chip store.
pub struct TableDriver {
    state: GameState,
    inbox: mpsc::Receiver<DriverMessage>,
    /// Clone handed to timer tasks so fired timers dispatch back in.
    sender: mpsc::Sender<DriverMessage>,
    timers: HashMap<Lane, JoinHandle<()>>,
    strategy: BotStrategy,
    store: Option<Arc<dyn ChipStore>>,
    /// Chip snapshot loaded at construction, applied to the seats of
    /// the next started game and then discarded.
    resume_chips: Option<HashMap<String, crate::game::entities::Chips>>,
}

impl TableDriver {
    /// Create a driver and its handle. If a chip store is given, a
    /// previous snapshot is loaded now and overlaid onto the next game
    /// started through [`GameEvent::InitiateGame`].
    pub fn new(
        strategy: BotStrategy,
        store: Option<Arc<dyn ChipStore>>,
    ) -> (Self, TableHandle) {
        let (sender, inbox) = mpsc::channel(INBOX_CAPACITY);

        let resume_chips = store.as_ref().and_then(|s| match s.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("ignoring unreadable chip snapshot: {e:#}");
                None
            }
        });

        let driver = Self {
            state: init_game(),
            inbox,
            sender: sender.clone(),
            timers: HashMap::new(),
            strategy,
            store,
            resume_chips,
        };
        (driver, TableHandle { sender })
    }

    /// Create a driver and spawn its event loop onto the runtime.
    pub fn spawn(strategy: BotStrategy, store: Option<Arc<dyn ChipStore>>) -> TableHandle {
        let (driver, handle) = Self::new(strategy, store);
        tokio::spawn(driver.run());
        handle
    }

    /// Run the event loop until shutdown or every handle is dropped.
    pub async fn run(mut self) {
        log::info!("table driver starting");

        while let Some(message) = self.inbox.recv().await {
            match message {
                DriverMessage::Dispatch(event) => self.handle_event(&event),
                DriverMessage::BotTurn => self.handle_bot_turn(),
                DriverMessage::GetState { response } => {
                    let _ = response.send(self.state.clone());
                }
                DriverMessage::Shutdown => break,
            }
        }

        self.cancel_all();
        log::info!("table driver stopped");
    }

    fn handle_event(&mut self, event: &GameEvent) {
        // A reset or reconfiguration orphans every pending timer from
        // the previous game; they must not fire into the new one.
        if matches!(event, GameEvent::InitiateGame(_) | GameEvent::EndGame) {
            self.cancel_all();
        }

        let (mut next, effects) = match reduce(&self.state, event) {
            Ok(reduced) => reduced,
            Err(e) => {
                log::error!("dropping event after engine error: {e}");
                return;
            }
        };

        if let GameEvent::InitiateGame(_) = event {
            if let Some(chips) = self.resume_chips.take() {
                next = resume_game(&next, &chips);
            }
        }

        let hand_just_closed =
            next.phase == Phase::HandOver && self.state.phase != Phase::HandOver;
        self.state = next;

        if hand_just_closed {
            self.persist_chips();
        }
        for effect in effects {
            self.schedule(effect);
        }
    }

    fn handle_bot_turn(&mut self) {
        match (self.strategy)(&self.state) {
            Some(action) => self.handle_event(&GameEvent::BotAction(action)),
            // The turn moved on before the timer fired.
            None => log::debug!("bot turn fired with no action to take"),
        }
    }

    fn schedule(&mut self, effect: GameEffect) {
        let (delay_ms, lane, message) = match effect {
            GameEffect::After { delay_ms, event, lane } => {
                (delay_ms, lane, DriverMessage::Dispatch(event))
            }
            GameEffect::BotTurnAfter { delay_ms, lane } => {
                (delay_ms, lane, DriverMessage::BotTurn)
            }
        };

        self.cancel(lane);
        let sender = self.sender.clone();
        let timer = tokio::spawn(async move {
            sleep(Duration::from_millis(delay_ms)).await;
            let _ = sender.send(message).await;
        });
        self.timers.insert(lane, timer);
    }

    fn cancel(&mut self, lane: Lane) {
        if let Some(timer) = self.timers.remove(&lane) {
            timer.abort();
        }
    }

    fn cancel_all(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
    }

    fn persist_chips(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&chip_entries(&self.state)) {
            log::warn!("failed to persist chip counts: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::default_strategy;
    use crate::game::entities::PlayerAction;

    #[tokio::test]
    async fn get_state_returns_the_lobby() {
        let handle = TableDriver::spawn(default_strategy(), None);
        let state = handle.state().await.unwrap();
        assert!(!state.playing);
        assert_eq!(state.players.len(), 1);
        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn dispatch_after_shutdown_is_an_error() {
        let handle = TableDriver::spawn(default_strategy(), None);
        handle.shutdown().await.unwrap();
        // The inbox closes once the driver loop exits.
        let mut closed = false;
        for _ in 0..50 {
            tokio::task::yield_now().await;
            if handle
                .dispatch(GameEvent::PlayerAction(PlayerAction::Call))
                .await
                .is_err()
            {
                closed = true;
                break;
            }
        }
        assert!(closed);
    }

    #[tokio::test]
    async fn initiate_game_rejects_invalid_configs() {
        let handle = TableDriver::spawn(default_strategy(), None);
        let config = PregameConfig { big_blind: 0, ..PregameConfig::default() };
        assert!(handle.initiate_game(config).await.is_err());
        handle.shutdown().await.unwrap();
    }
}
