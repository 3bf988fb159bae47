//! Registered players, independent of any particular game.
//!
//! - `Roster`: ordered unique names with cumulative scores
//! - `RosterStore`: persistence collaborator (JSON file or in-memory)

mod manager;
mod store;

pub use manager::{Roster, RosterEntry};
pub use store::{JsonFileRosterStore, MemoryRosterStore, RosterStore};
