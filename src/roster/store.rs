//! Persistence collaborator for the roster.
//!
//! Only names are stored. Loading never fails from the caller's point of
//! view: missing or corrupt data is logged and reads as an empty roster.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::DataLoadError;

/// Somewhere the roster's names survive restarts.
pub trait RosterStore {
    /// Stored names, or empty on absence/corruption.
    fn load_roster(&self) -> Vec<String>;

    /// Persist names.
    fn save_roster(&mut self, names: &[String]) -> Result<(), DataLoadError>;
}

/// Names kept as a JSON array in a file.
#[derive(Clone, Debug)]
pub struct JsonFileRosterStore {
    path: PathBuf,
}

impl JsonFileRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<String>, DataLoadError> {
        let json = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl RosterStore for JsonFileRosterStore {
    fn load_roster(&self) -> Vec<String> {
        if !self.path.exists() {
            return Vec::new();
        }
        self.read().unwrap_or_else(|err| {
            warn!(path = %self.path.display(), error = %err, "error loading players");
            Vec::new()
        })
    }

    fn save_roster(&mut self, names: &[String]) -> Result<(), DataLoadError> {
        let json = serde_json::to_string(names)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and front ends without storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryRosterStore {
    pub names: Vec<String>,
}

impl RosterStore for MemoryRosterStore {
    fn load_roster(&self) -> Vec<String> {
        self.names.clone()
    }

    fn save_roster(&mut self, names: &[String]) -> Result<(), DataLoadError> {
        self.names = names.to_vec();
        Ok(())
    }
}
