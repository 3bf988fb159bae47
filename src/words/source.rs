//! Where the word bank comes from.
//!
//! The bank is loaded once at startup and cached by the caller. A failed
//! load never blocks play: `WordBank::load_or_fallback` logs the failure
//! and hands back the built-in bank instead.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::bank::WordBank;
use crate::core::DataLoadError;

/// A source the word bank can be loaded from.
pub trait WordSource {
    /// Load and validate the bank.
    fn load(&self) -> Result<WordBank, DataLoadError>;
}

/// Word bank stored as a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileWordSource {
    path: PathBuf,
}

impl JsonFileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for JsonFileWordSource {
    fn load(&self) -> Result<WordBank, DataLoadError> {
        let json = std::fs::read_to_string(&self.path)?;
        WordBank::from_json(&json)
    }
}

/// Word bank JSON already held in memory (embedded asset, test fixture).
#[derive(Clone, Debug)]
pub struct InlineWordSource(pub String);

impl WordSource for InlineWordSource {
    fn load(&self) -> Result<WordBank, DataLoadError> {
        WordBank::from_json(&self.0)
    }
}

impl WordBank {
    /// Load from `source`, substituting [`WordBank::fallback`] on any failure.
    pub fn load_or_fallback(source: &dyn WordSource) -> WordBank {
        match source.load() {
            Ok(bank) => {
                info!(
                    words = bank.len(),
                    categories = bank.categories().count(),
                    "loaded word bank"
                );
                bank
            }
            Err(err) => {
                warn!(error = %err, "word bank failed to load, using built-in words");
                WordBank::fallback()
            }
        }
    }
}
