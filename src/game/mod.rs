//! The per-game orchestrator.
//!
//! `GameSession` replaces loose "current game" state with one aggregate the
//! front end owns. It drives the other modules in order each round:
//! roles, reveal, voting, resolution, then either another round or the end.

mod session;

pub use session::{GamePhase, GameSession, GameSummary, PlayerSummary, PublicView, RoundReport};
