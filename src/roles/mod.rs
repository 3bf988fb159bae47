//! Role assignment.
//!
//! Imposters are drawn once per game; hints are redrawn every round for the
//! imposters still in play. Regular players always see the word.

mod assigner;

pub use assigner::{assign_hints, assign_imposters, ImposterSet, RoleCard, RoundState};
