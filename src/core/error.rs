//! Error taxonomy.
//!
//! Every error here is locally recoverable: configuration and vote errors
//! leave state untouched so the caller can re-prompt, and data-load errors
//! are absorbed by fallbacks before they ever reach a player.

use thiserror::Error;

use super::player::PlayerId;

/// Game setup rejected before anything was mutated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("need at least {min} players, found {found}")]
    TooFewPlayers { found: usize, min: usize },

    #[error("at most {max} players supported, found {found}")]
    TooManyPlayers { found: usize, max: usize },

    #[error("imposter count {count} must be at least 1 and less than {players} players")]
    ImposterCount { count: usize, players: usize },

    #[error("no categories selected")]
    NoCategories,

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("starting player index {index} out of range for {players} players")]
    StartingPlayerOutOfRange { index: usize, players: usize },
}

/// Failure reading or parsing external data (word bank, roster).
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word `{word}` in category `{category}` has no hints")]
    InvalidWord { category: String, word: String },

    #[error("word bank has no categories")]
    EmptyBank,
}

/// Word selection failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WordBankError {
    #[error("no categories selected")]
    NoCategoriesSelected,

    #[error("category `{0}` has no words")]
    EmptyCategory(String),

    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}

/// Rejected roster edit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("player name is empty")]
    EmptyName,

    #[error("player `{0}` is already registered")]
    Duplicate(String),

    #[error("roster index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Rejected vote or voting step. Voting state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerId),

    #[error("{0} has been eliminated")]
    Eliminated(PlayerId),

    #[error("it is {expected}'s turn to vote, not {got}'s")]
    NotYourTurn { expected: PlayerId, got: PlayerId },

    #[error("{0} has not voted yet")]
    NoVoteRecorded(PlayerId),

    #[error("every active player has already voted")]
    VotingComplete,
}

/// Attempt to resolve a round before every active player has voted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("premature resolution: {recorded} of {expected} votes recorded")]
pub struct PrematureResolution {
    pub recorded: usize,
    pub expected: usize,
}

/// Top-level error for game-session operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    WordBank(#[from] WordBankError),

    #[error(transparent)]
    Vote(#[from] VoteError),

    #[error(transparent)]
    PrematureResolution(#[from] PrematureResolution),

    #[error("cannot {operation} during {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: &'static str,
    },
}
