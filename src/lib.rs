//! # fake-it
//!
//! Rules engine for the imposter word party game.
//!
//! Everyone privately sees a card: the secret word, or for imposters a
//! hint. The table discusses, votes someone out, and rounds continue until
//! every imposter is gone (players win) or the imposters are at parity
//! with everyone else (imposters win).
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: one `GameSession` per game, no ambient globals.
//!    Front ends call transitions and redraw from what they return.
//!
//! 2. **Injected randomness**: every draw goes through a seedable
//!    `GameRng`, so any game can be replayed from its seed.
//!
//! 3. **Never blocked**: missing word banks and rosters fall back to
//!    built-in data; bad input is rejected without changing state.
//!
//! ## Modules
//!
//! - `core`: player IDs, RNG, configuration, errors
//! - `words`: word bank, loading and fallback
//! - `roster`: registered players, scores, persistence
//! - `roles`: imposter draw, hint assignment, round state
//! - `elimination`: eliminated set and the win condition
//! - `voting`: sequential vote collection
//! - `resolution`: tally, plurality, elimination and scoring
//! - `game`: the per-game phase machine

pub mod core;
pub mod words;
pub mod roster;
pub mod roles;
pub mod elimination;
pub mod voting;
pub mod resolution;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, PlayerId, ScoringRules, StartingPlayer, MIN_PLAYERS,
};

pub use crate::words::{JsonFileWordSource, SelectedWord, Word, WordBank, WordSource};

pub use crate::roster::{JsonFileRosterStore, MemoryRosterStore, Roster, RosterEntry, RosterStore};

pub use crate::roles::{ImposterSet, RoleCard, RoundState};

pub use crate::elimination::{EliminationTracker, GameOutcome};

pub use crate::voting::{Ballot, VotingSession, VotingState};

pub use crate::resolution::{Plurality, RoundResult, ScoreDelta, VoteTally, WinRecord};

pub use crate::game::{GamePhase, GameSession, GameSummary, PlayerSummary, PublicView, RoundReport};
