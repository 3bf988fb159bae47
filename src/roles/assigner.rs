//! Imposter selection, hint apportioning and per-round role state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{GameRng, PlayerId};
use crate::elimination::EliminationTracker;
use crate::words::{SelectedWord, Word};

/// Imposters of one game, in roster order.
///
/// SmallVec keeps the common 1-4 imposters off the heap.
pub type ImposterSet = SmallVec<[PlayerId; 4]>;

/// Draw `count` distinct imposters uniformly from `active`.
///
/// Called once per game at start, when every roster player is active.
/// Later rounds keep the same set and only redraw hints.
pub fn assign_imposters(active: &[PlayerId], count: usize, rng: &mut GameRng) -> ImposterSet {
    let imposters: ImposterSet = rng.sample(active, count).into_iter().collect();
    debug!(count = imposters.len(), "imposters drawn");
    imposters
}

/// Give each imposter one hint drawn uniformly, with replacement, from all
/// of the word's hints. Two imposters may get the same hint.
pub fn assign_hints(
    imposters: &[PlayerId],
    word: &Word,
    rng: &mut GameRng,
) -> FxHashMap<PlayerId, String> {
    imposters
        .iter()
        .filter_map(|&imposter| rng.choose(&word.hints).map(|hint| (imposter, hint.clone())))
        .collect()
}

/// What one player sees when their card is flipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleCard {
    /// A regular player: they know the word.
    Word { secret: String },
    /// An imposter: they only get a hint.
    Imposter { hint: String },
}

impl RoleCard {
    #[must_use]
    pub fn is_imposter(&self) -> bool {
        matches!(self, RoleCard::Imposter { .. })
    }
}

/// Roles for one round. Built fresh every round, discarded after resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundState {
    /// 1-based round number within the game.
    pub round: u32,
    pub category: String,
    pub secret_word: String,
    /// Hint regular players are told about (`hints[0]`).
    pub hint_for_non_imposters: String,
    /// Hints dealt this round, active imposters only.
    pub imposter_hints: FxHashMap<PlayerId, String>,
    /// Fixed for the whole game.
    pub imposters: ImposterSet,
    /// Who opens discussion.
    pub starting_player: PlayerId,
}

impl RoundState {
    /// Deal a round: hints are redrawn for imposters still in play.
    pub fn deal(
        round: u32,
        selected: SelectedWord,
        imposters: &ImposterSet,
        tracker: &EliminationTracker,
        roster_len: usize,
        starting_player: PlayerId,
        rng: &mut GameRng,
    ) -> Self {
        let active_imposters = tracker.active_imposters(imposters, roster_len);
        let imposter_hints = assign_hints(&active_imposters, &selected.word, rng);

        Self {
            round,
            hint_for_non_imposters: selected.word.primary_hint().to_string(),
            secret_word: selected.word.text,
            category: selected.category,
            imposter_hints,
            imposters: imposters.clone(),
            starting_player,
        }
    }

    #[must_use]
    pub fn is_imposter(&self, player: PlayerId) -> bool {
        self.imposters.contains(&player)
    }

    /// The card `player` should see.
    #[must_use]
    pub fn role_for(&self, player: PlayerId) -> RoleCard {
        if self.is_imposter(player) {
            let hint = self
                .imposter_hints
                .get(&player)
                .unwrap_or(&self.hint_for_non_imposters)
                .clone();
            RoleCard::Imposter { hint }
        } else {
            RoleCard::Word {
                secret: self.secret_word.clone(),
            }
        }
    }
}
