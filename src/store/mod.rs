//! Chip persistence between sessions.
//!
//! The driver saves every seat's chip count whenever a hand closes and
//! loads a previous snapshot at startup, so a table resumes where it
//! left off. The format is a flat JSON list of id/chips entries; ids in
//! the file that no longer match a seat are ignored on load.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::game::entities::{Chips, GameState};

/// One persisted seat.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChipEntry {
    pub id: String,
    pub chips: Chips,
}

/// Storage for chip snapshots. Implementations are free to be files,
/// databases, or test doubles; the driver only sees this trait.
pub trait ChipStore: Send + Sync {
    /// Persist a full snapshot, replacing any previous one.
    fn save(&self, entries: &[ChipEntry]) -> anyhow::Result<()>;

    /// Load the last snapshot, or `None` if nothing was ever saved.
    fn load(&self) -> anyhow::Result<Option<HashMap<String, Chips>>>;
}

/// Snapshot of a table's chip counts, one entry per seat.
#[must_use]
pub fn chip_entries(state: &GameState) -> Vec<ChipEntry> {
    state
        .players
        .iter()
        .map(|p| ChipEntry { id: p.id.clone(), chips: p.chips })
        .collect()
}

/// [`ChipStore`] backed by a single JSON file.
#[derive(Clone, Debug)]
pub struct JsonChipStore {
    path: PathBuf,
}

impl JsonChipStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ChipStore for JsonChipStore {
    fn save(&self, entries: &[ChipEntry]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing chip snapshot to {}", self.path.display()))?;
        Ok(())
    }

    fn load(&self) -> anyhow::Result<Option<HashMap<String, Chips>>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("reading chip snapshot from {}", self.path.display()));
            }
        };
        let entries: Vec<ChipEntry> = serde_json::from_str(&json)
            .with_context(|| format!("parsing chip snapshot at {}", self.path.display()))?;
        Ok(Some(entries.into_iter().map(|e| (e.id, e.chips)).collect()))
    }
}
