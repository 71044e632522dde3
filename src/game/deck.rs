//! A 52-card deck: 4 suits x 13 ranks, no jokers.
//!
//! A fresh shuffled deck is issued at the start of every hand and never
//! reused; cards leave the deck from one end only.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::entities::{Card, MAX_VALUE, MIN_VALUE, Suit};

pub const DECK_SIZE: usize = 52;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The lobby state carries no live deck.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a full ordered deck and apply a uniform Fisher-Yates shuffle.
    #[must_use]
    pub fn shuffled() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in MIN_VALUE..=MAX_VALUE {
                cards.push(Card { rank, suit });
            }
        }
        cards.shuffle(&mut rand::rng());
        Self { cards }
    }

    /// Remove and return the top card. `None` once the deck is exhausted;
    /// one hand can never draw more than 52 cards.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards not yet dealt, for uniqueness audits.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }
}
