//! Vote tabulation, elimination, win evaluation and scoring.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{PlayerId, PrematureResolution, ScoringRules};
use crate::elimination::{EliminationTracker, GameOutcome};
use crate::voting::{Ballot, VotingSession};

/// Votes received per suspect in one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    counts: FxHashMap<PlayerId, u32>,
}

impl VoteTally {
    /// Votes received by `player` (0 if none).
    #[must_use]
    pub fn get(&self, player: PlayerId) -> u32 {
        self.counts.get(&player).copied().unwrap_or(0)
    }

    /// Total votes counted.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Suspects that received votes, most votes first, ties in roster order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(PlayerId, u32)> {
        let mut ranked: Vec<_> = self.counts.iter().map(|(&p, &n)| (p, n)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}

/// Who, if anyone, the round's votes single out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plurality {
    /// Exactly one suspect has the most votes.
    Single(PlayerId),
    /// Several suspects share the most votes, in roster order.
    Tie(Vec<PlayerId>),
    /// No votes were counted.
    Empty,
}

/// Points earned by one player this round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub player: PlayerId,
    pub name: String,
    pub points: i64,
}

/// Everything a round's resolution decided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub tally: VoteTally,
    pub plurality: Plurality,
    /// The player removed this round; `None` on a tie.
    pub eliminated: Option<PlayerId>,
    pub outcome: GameOutcome,
    pub score_deltas: Vec<ScoreDelta>,
    /// Active players after elimination.
    pub active_players: Vec<PlayerId>,
}

/// Who won the current game. Starts at zero each game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRecord {
    pub player_wins: u32,
    pub imposter_wins: u32,
}

impl WinRecord {
    /// Count a round's outcome. `Continue` counts for nobody.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::PlayersWin => self.player_wins += 1,
            GameOutcome::ImpostersWin => self.imposter_wins += 1,
            GameOutcome::Continue => {}
        }
    }
}

/// Count how many votes each suspect received.
#[must_use]
pub fn tabulate(ballots: &[Ballot]) -> VoteTally {
    let mut counts = FxHashMap::default();
    for ballot in ballots {
        *counts.entry(ballot.suspect).or_insert(0) += 1;
    }
    VoteTally { counts }
}

/// Find the suspect with strictly the most votes.
#[must_use]
pub fn resolve_plurality(tally: &VoteTally) -> Plurality {
    let Some(max) = tally.counts.values().copied().max() else {
        return Plurality::Empty;
    };

    let mut leaders: Vec<_> = tally
        .counts
        .iter()
        .filter(|&(_, &n)| n == max)
        .map(|(&p, _)| p)
        .collect();
    leaders.sort_unstable();

    match leaders.as_slice() {
        [single] => Plurality::Single(*single),
        _ => Plurality::Tie(leaders),
    }
}

/// Resolve a finished round.
///
/// 1. Eliminate the single plurality suspect, if there is one.
/// 2. Recompute active players and imposters.
/// 3. Evaluate the end condition.
/// 4. Players win: every voter who named an imposter earns
///    `correct_accusation`, whether or not their vote decided it.
/// 5. Imposters win: every active imposter earns `surviving_imposter`.
///
/// Refuses with `PrematureResolution` unless every active player voted;
/// the tracker is untouched in that case.
pub fn resolve_round(
    voting: &VotingSession,
    imposters: &[PlayerId],
    tracker: &mut EliminationTracker,
    names: &[String],
    scoring: &ScoringRules,
) -> Result<RoundResult, PrematureResolution> {
    let ballots = voting.ballots()?;
    let roster_len = names.len();

    let imposters_at_vote = tracker.active_imposters(imposters, roster_len);
    let tally = tabulate(&ballots);
    let plurality = resolve_plurality(&tally);

    let eliminated = match plurality {
        Plurality::Single(suspect) => {
            tracker.eliminate(suspect);
            Some(suspect)
        }
        Plurality::Tie(_) | Plurality::Empty => None,
    };

    let active_players = tracker.active_players(roster_len);
    let active_imposters = tracker.active_imposters(imposters, roster_len);
    let outcome = EliminationTracker::check_end_condition(&active_players, &active_imposters);

    let delta = |player: PlayerId, points: i64| ScoreDelta {
        player,
        name: names.get(player.index()).cloned().unwrap_or_default(),
        points,
    };
    let score_deltas: Vec<_> = match outcome {
        GameOutcome::PlayersWin => ballots
            .iter()
            .filter(|b| imposters_at_vote.contains(&b.suspect))
            .map(|b| delta(b.voter, scoring.correct_accusation))
            .collect(),
        GameOutcome::ImpostersWin => active_imposters
            .iter()
            .map(|&p| delta(p, scoring.surviving_imposter))
            .collect(),
        GameOutcome::Continue => Vec::new(),
    };

    info!(
        votes = tally.total(),
        eliminated = ?eliminated,
        outcome = ?outcome,
        "round resolved"
    );

    Ok(RoundResult {
        tally,
        plurality,
        eliminated,
        outcome,
        score_deltas,
        active_players,
    })
}
