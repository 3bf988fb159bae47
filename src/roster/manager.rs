//! The registered player list and cumulative scores.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::store::RosterStore;
use crate::core::RosterError;
use crate::resolution::ScoreDelta;

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    /// Cumulative across rounds and games until explicitly reset.
    pub score: i64,
}

/// Ordered list of registered players.
///
/// Insertion order is the canonical index order a game snapshots when it
/// starts. Names are unique (case-sensitive exact match).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<RosterEntry>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from stored names, skipping blanks and duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            if let Err(err) = roster.add(name.as_ref()) {
                warn!(error = %err, "skipping stored roster entry");
            }
        }
        roster
    }

    /// Register a player. Returns the new player's roster index.
    ///
    /// Leading and trailing whitespace is trimmed first.
    pub fn add(&mut self, name: &str) -> Result<usize, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.position(name).is_some() {
            return Err(RosterError::Duplicate(name.to_string()));
        }
        self.players.push(RosterEntry {
            name: name.to_string(),
            score: 0,
        });
        debug!(player = name, "registered player");
        Ok(self.players.len() - 1)
    }

    /// Remove the player at `index`. Later players shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<RosterEntry, RosterError> {
        if index >= self.players.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.players.len(),
            });
        }
        let removed = self.players.remove(index);
        debug!(player = %removed.name, "removed player");
        Ok(removed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RosterEntry> {
        self.players.get(index)
    }

    /// Roster index of a player by exact name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    /// Iterate over players in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.players.iter()
    }

    /// Player names in roster order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    /// A player's score, if registered.
    #[must_use]
    pub fn score(&self, name: &str) -> Option<i64> {
        self.players.iter().find(|p| p.name == name).map(|p| p.score)
    }

    /// Add points to a player. Returns false if the player is no longer
    /// registered.
    pub fn award(&mut self, name: &str, points: i64) -> bool {
        match self.players.iter_mut().find(|p| p.name == name) {
            Some(player) => {
                player.score += points;
                true
            }
            None => false,
        }
    }

    /// Apply a round's score deltas.
    pub fn apply(&mut self, deltas: &[ScoreDelta]) {
        for delta in deltas {
            if !self.award(&delta.name, delta.points) {
                warn!(player = %delta.name, "score delta for unregistered player dropped");
            }
        }
    }

    /// Zero every score.
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
    }

    /// Players by descending score; ties keep roster order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&RosterEntry> {
        let mut board: Vec<_> = self.players.iter().collect();
        board.sort_by(|a, b| b.score.cmp(&a.score));
        board
    }

    /// Load names from a store. Absent or corrupt data yields an empty roster.
    pub fn load(store: &dyn RosterStore) -> Self {
        Self::from_names(store.load_roster())
    }

    /// Save names to a store. Failures are logged and otherwise ignored;
    /// the in-memory roster stays authoritative.
    pub fn save(&self, store: &mut dyn RosterStore) {
        if let Err(err) = store.save_roster(&self.names()) {
            warn!(error = %err, "failed to save roster, continuing in memory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::roster::MemoryRosterStore;

    fn roster(names: &[&str]) -> Roster {
        Roster::from_names(names)
    }

    #[test]
    fn test_add_and_order() {
        let mut r = Roster::new();
        assert_eq!(r.add("Ann"), Ok(0));
        assert_eq!(r.add("  Bob "), Ok(1));
        assert_eq!(r.names(), vec!["Ann", "Bob"]);
        assert_eq!(r.position("Bob"), Some(1));
    }

    #[test]
    fn test_add_rejects_empty_and_duplicate() {
        let mut r = roster(&["Ann"]);
        assert_eq!(r.add("   "), Err(RosterError::EmptyName));
        assert_eq!(r.add("Ann"), Err(RosterError::Duplicate("Ann".into())));
        // Case-sensitive
        assert_eq!(r.add("ann"), Ok(1));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut r = roster(&["Ann", "Bob", "Cid"]);
        let removed = r.remove(1).unwrap();
        assert_eq!(removed.name, "Bob");
        assert_eq!(r.names(), vec!["Ann", "Cid"]);
        assert_eq!(r.remove(5), Err(RosterError::IndexOutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn test_from_names_skips_bad_entries() {
        let r = roster(&["Ann", "", "Ann", "Bob"]);
        assert_eq!(r.names(), vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_scores() {
        let mut r = roster(&["Ann", "Bob", "Cid"]);
        r.apply(&[
            ScoreDelta { player: PlayerId::new(1), name: "Bob".into(), points: 10 },
            ScoreDelta { player: PlayerId::new(2), name: "Cid".into(), points: 15 },
            ScoreDelta { player: PlayerId::new(3), name: "Gone".into(), points: 10 },
        ]);
        r.award("Bob", 10);

        assert_eq!(r.score("Ann"), Some(0));
        assert_eq!(r.score("Bob"), Some(20));
        assert_eq!(r.score("Cid"), Some(15));
        assert_eq!(r.score("Gone"), None);

        let board: Vec<_> = r.leaderboard().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(board, vec!["Bob", "Cid", "Ann"]);

        r.reset_scores();
        assert!(r.iter().all(|p| p.score == 0));
    }

    #[test]
    fn test_leaderboard_ties_keep_roster_order() {
        let mut r = roster(&["Ann", "Bob", "Cid"]);
        r.award("Cid", 5);
        let board: Vec<_> = r.leaderboard().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(board, vec!["Cid", "Ann", "Bob"]);
    }

    #[test]
    fn test_load_and_save() {
        let mut store = MemoryRosterStore::default();
        let r = roster(&["Ann", "Bob"]);
        r.save(&mut store);

        let loaded = Roster::load(&store);
        assert_eq!(loaded.names(), vec!["Ann", "Bob"]);
    }
}
