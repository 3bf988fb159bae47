//! Game configuration types.
//!
//! A front end collects these settings on its setup screen and hands a
//! `GameConfig` to `GameSession::start`:
//! - how many imposters to draw
//! - which word categories to draw from
//! - who speaks first in the opening round
//! - how many points correct accusations and surviving imposters earn

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::MAX_PLAYERS;

/// Smallest roster a game can start with.
pub const MIN_PLAYERS: usize = 3;

/// Who opens discussion in the first round.
///
/// Later rounds always draw a random starting player from the active players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPlayer {
    /// Uniformly random over the roster.
    #[default]
    Random,
    /// Explicit roster index.
    Index(usize),
}

/// Points awarded when a game ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Per voter who named an imposter in the round the players won.
    pub correct_accusation: i64,
    /// Per imposter still active when the imposters win.
    pub surviving_imposter: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            correct_accusation: 10,
            surviving_imposter: 15,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of imposters drawn at game start.
    pub imposter_count: usize,

    /// Category keys words are drawn from.
    pub categories: BTreeSet<String>,

    /// Advisory round count shown to players. Games end on the win
    /// condition, never on this.
    pub total_rounds_hint: u32,

    /// Opening speaker for round one.
    pub starting_player: StartingPlayer,

    /// Point values for terminal outcomes.
    pub scoring: ScoringRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GameConfig {
    /// Create a configuration with the given imposter count and no categories.
    pub fn new(imposter_count: usize) -> Self {
        Self {
            imposter_count,
            categories: BTreeSet::new(),
            total_rounds_hint: 3,
            starting_player: StartingPlayer::Random,
            scoring: ScoringRules::default(),
        }
    }

    /// Add a category to draw words from.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Add several categories.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    /// Set the advisory round count.
    #[must_use]
    pub fn with_total_rounds_hint(mut self, rounds: u32) -> Self {
        self.total_rounds_hint = rounds;
        self
    }

    /// Set the opening speaker.
    #[must_use]
    pub fn with_starting_player(mut self, starting_player: StartingPlayer) -> Self {
        self.starting_player = starting_player;
        self
    }

    /// Override the scoring rules.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    /// Check this configuration against a roster size.
    ///
    /// Category keys are checked against the word bank separately, at
    /// game start.
    pub fn validate(&self, roster_len: usize) -> Result<(), ConfigError> {
        if roster_len < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers {
                found: roster_len,
                min: MIN_PLAYERS,
            });
        }
        if roster_len > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                found: roster_len,
                max: MAX_PLAYERS,
            });
        }
        if self.imposter_count == 0 || self.imposter_count >= roster_len {
            return Err(ConfigError::ImposterCount {
                count: self.imposter_count,
                players: roster_len,
            });
        }
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        if let StartingPlayer::Index(index) = self.starting_player {
            if index >= roster_len {
                return Err(ConfigError::StartingPlayerOutOfRange {
                    index,
                    players: roster_len,
                });
            }
        }
        Ok(())
    }
}
