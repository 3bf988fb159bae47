//! Sequential vote collection.
//!
//! One device is passed around the table: each active player in roster order
//! picks a suspect, may change their pick, and then hands over with an
//! explicit `advance`. Nobody is prompted until the previous voter is done.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PrematureResolution, VoteError};
use crate::elimination::EliminationTracker;

/// One recorded vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: PlayerId,
    pub suspect: PlayerId,
}

/// Where collection stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VotingState {
    /// Waiting on the voter at this position in the turn order.
    Collecting { voter_pointer: usize },
    /// Every active player has voted.
    Complete,
}

/// Collects exactly one vote from every active player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VotingSession {
    roster_len: usize,
    /// Turn order: active players in roster order. Also the candidate list.
    voters: Vec<PlayerId>,
    /// Aligned with `voters`.
    votes: Vec<Option<PlayerId>>,
    state: VotingState,
}

impl VotingSession {
    /// Open voting for everyone not yet eliminated.
    #[must_use]
    pub fn new(tracker: &EliminationTracker, roster_len: usize) -> Self {
        let voters = tracker.active_players(roster_len);
        let state = if voters.is_empty() {
            VotingState::Complete
        } else {
            VotingState::Collecting { voter_pointer: 0 }
        };
        Self {
            roster_len,
            votes: vec![None; voters.len()],
            voters,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> VotingState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == VotingState::Complete
    }

    /// The player being prompted, or `None` once voting is complete.
    #[must_use]
    pub fn current_voter(&self) -> Option<PlayerId> {
        match self.state {
            VotingState::Collecting { voter_pointer } => Some(self.voters[voter_pointer]),
            VotingState::Complete => None,
        }
    }

    /// Players that can be voted for. Eliminated players are never offered.
    #[must_use]
    pub fn candidates(&self) -> &[PlayerId] {
        &self.voters
    }

    /// What `voter` has picked so far.
    #[must_use]
    pub fn vote_of(&self, voter: PlayerId) -> Option<PlayerId> {
        let slot = self.voters.iter().position(|&p| p == voter)?;
        self.votes[slot]
    }

    /// Number of voters with a recorded vote.
    #[must_use]
    pub fn recorded(&self) -> usize {
        self.votes.iter().filter(|v| v.is_some()).count()
    }

    fn check_active(&self, player: PlayerId) -> Result<usize, VoteError> {
        if player.index() >= self.roster_len {
            return Err(VoteError::UnknownPlayer(player));
        }
        self.voters
            .iter()
            .position(|&p| p == player)
            .ok_or(VoteError::Eliminated(player))
    }

    /// Record (or replace) `voter`'s pick.
    ///
    /// Only the voter whose turn it is may vote. Recording the last voter's
    /// pick completes the session; that voter may still change their pick
    /// until the round is resolved.
    pub fn submit_vote(&mut self, voter: PlayerId, suspect: PlayerId) -> Result<(), VoteError> {
        let slot = self.check_active(voter)?;
        self.check_active(suspect)?;

        let last = self.voters.len() - 1;
        match self.state {
            VotingState::Collecting { voter_pointer } if voter_pointer != slot => {
                return Err(VoteError::NotYourTurn {
                    expected: self.voters[voter_pointer],
                    got: voter,
                });
            }
            VotingState::Complete if slot != last => return Err(VoteError::VotingComplete),
            _ => {}
        }

        self.votes[slot] = Some(suspect);
        if slot == last {
            self.state = VotingState::Complete;
        }
        Ok(())
    }

    /// Hand over to the next voter. The current voter must have voted.
    pub fn advance(&mut self) -> Result<PlayerId, VoteError> {
        let VotingState::Collecting { voter_pointer } = self.state else {
            return Err(VoteError::VotingComplete);
        };
        if self.votes[voter_pointer].is_none() {
            return Err(VoteError::NoVoteRecorded(self.voters[voter_pointer]));
        }

        let next = voter_pointer + 1;
        self.state = VotingState::Collecting { voter_pointer: next };
        Ok(self.voters[next])
    }

    /// All ballots in turn order. Refuses unless every active player voted.
    pub fn ballots(&self) -> Result<Vec<Ballot>, PrematureResolution> {
        let incomplete = || PrematureResolution {
            recorded: self.recorded(),
            expected: self.voters.len(),
        };
        if !self.is_complete() {
            return Err(incomplete());
        }

        self.voters
            .iter()
            .zip(&self.votes)
            .map(|(&voter, vote)| {
                vote.map(|suspect| Ballot { voter, suspect })
                    .ok_or_else(incomplete)
            })
            .collect()
    }
}
