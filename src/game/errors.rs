//! Fatal engine defects.
//!
//! Invalid transitions and out-of-turn actions are silent no-ops by
//! design; the variants here indicate upstream bugs (a bad deal, or the
//! lone-survivor and showdown paths overlapping) and must surface.

use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EngineError {
    #[error("{name}'s hand holds {cards} cards, expected 2 at showdown")]
    MalformedHand { name: String, cards: usize },
    #[error("no hand values assigned at hand resolution")]
    NoShowdownCandidates,
}
