//! Core engine types: players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! words, votes or rounds.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, MAX_PLAYERS};
pub use rng::GameRng;
pub use config::{GameConfig, ScoringRules, StartingPlayer, MIN_PLAYERS};
pub use error::{
    ConfigError, DataLoadError, GameError, PrematureResolution, RosterError, VoteError,
    WordBankError,
};
