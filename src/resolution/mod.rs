//! Round resolution: tally the votes, eliminate the plurality suspect,
//! evaluate the win condition and award points.

mod resolver;

pub use resolver::{
    resolve_plurality, resolve_round, tabulate, Plurality, RoundResult, ScoreDelta, VoteTally,
    WinRecord,
};
pub use crate::elimination::GameOutcome;
