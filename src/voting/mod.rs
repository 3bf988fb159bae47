//! Vote collection: one vote per active player, strictly in turn.

mod session;

pub use session::{Ballot, VotingSession, VotingState};
