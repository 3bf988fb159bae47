//! Who is still in the game, and whether someone has won.

mod tracker;

pub use tracker::{EliminationTracker, GameOutcome};
