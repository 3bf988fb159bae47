//! Eliminated-player tracking and the win condition.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::PlayerId;

/// Result of evaluating the end condition after a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every imposter has been eliminated.
    PlayersWin,
    /// Active imposters are at parity with the other active players.
    ImpostersWin,
    /// Neither side has won; play another round.
    Continue,
}

impl GameOutcome {
    /// Check if this outcome ends the game.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Continue)
    }
}

/// Players eliminated so far in one game.
///
/// Elimination is monotonic: the set only ever grows until `reset` at the
/// start of the next game. Backed by an `im` set so round reports can hold
/// a snapshot without copying.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationTracker {
    eliminated: OrdSet<PlayerId>,
}

impl EliminationTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a player eliminated. Idempotent; returns true only the first time.
    pub fn eliminate(&mut self, player: PlayerId) -> bool {
        let newly = self.eliminated.insert(player).is_none();
        if newly {
            debug!(%player, "player eliminated");
        }
        newly
    }

    #[must_use]
    pub fn is_eliminated(&self, player: PlayerId) -> bool {
        self.eliminated.contains(&player)
    }

    /// Snapshot of the eliminated set.
    #[must_use]
    pub fn eliminated(&self) -> &OrdSet<PlayerId> {
        &self.eliminated
    }

    /// Forget all eliminations (new game).
    pub fn reset(&mut self) {
        self.eliminated = OrdSet::new();
    }

    /// Roster order, eliminated players removed.
    #[must_use]
    pub fn active_players(&self, roster_len: usize) -> Vec<PlayerId> {
        PlayerId::all(roster_len)
            .filter(|p| !self.is_eliminated(*p))
            .collect()
    }

    /// Imposters still in play, in the order given.
    #[must_use]
    pub fn active_imposters(&self, imposters: &[PlayerId], roster_len: usize) -> Vec<PlayerId> {
        imposters
            .iter()
            .copied()
            .filter(|p| p.index() < roster_len && !self.is_eliminated(*p))
            .collect()
    }

    /// Evaluate the win condition.
    ///
    /// Zero active imposters is checked first, so players win even if only
    /// one player remains. Otherwise imposters win once they are at least as
    /// many as the active players who are not imposters.
    #[must_use]
    pub fn check_end_condition(
        active_players: &[PlayerId],
        active_imposters: &[PlayerId],
    ) -> GameOutcome {
        if active_imposters.is_empty() {
            return GameOutcome::PlayersWin;
        }

        let others = active_players
            .iter()
            .filter(|p| !active_imposters.contains(p))
            .count();

        if active_imposters.len() >= others {
            GameOutcome::ImpostersWin
        } else {
            GameOutcome::Continue
        }
    }
}
