//! One game, from setup to a winner.
//!
//! `GameSession` owns every piece of per-game state and exposes the phase
//! machine as explicit transitions:
//!
//! ```text
//! Setup -> RoleReveal -> Discussion -> Voting -> Resolution -+-> RoleReveal
//!                                                            +-> Terminal
//! ```
//!
//! The roster is snapshotted at start; scores live on the caller's
//! `Roster` and are updated with `Roster::apply` from each round report.

use serde::Serialize;
use tracing::info;

use crate::core::{ConfigError, GameConfig, GameError, GameRng, PlayerId, StartingPlayer};
use crate::elimination::{EliminationTracker, GameOutcome};
use crate::resolution::{resolve_round, Plurality, ScoreDelta, VoteTally, WinRecord};
use crate::roles::{assign_imposters, ImposterSet, RoleCard, RoundState};
use crate::roster::Roster;
use crate::voting::VotingSession;
use crate::words::WordBank;

/// Current step of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active players view their cards one at a time.
    RoleReveal { cursor: usize },
    /// Cards seen; the table talks, starting with the round's starting player.
    Discussion,
    /// Votes are being collected.
    Voting(VotingSession),
    /// Round resolved, game continues.
    Resolution(RoundReport),
    /// Someone won. No further rounds.
    Terminal(RoundReport),
}

impl GamePhase {
    fn name(&self) -> &'static str {
        match self {
            GamePhase::RoleReveal { .. } => "role reveal",
            GamePhase::Discussion => "discussion",
            GamePhase::Voting(_) => "voting",
            GamePhase::Resolution(_) => "resolution",
            GamePhase::Terminal(_) => "terminal",
        }
    }
}

/// What the results screen shows after a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub tally: VoteTally,
    pub plurality: Plurality,
    pub eliminated: Option<PlayerId>,
    pub outcome: GameOutcome,
    pub score_deltas: Vec<ScoreDelta>,
    pub secret_word: String,
    pub hint: String,
    /// Revealed only once the game is over.
    pub imposters: Option<ImposterSet>,
}

/// The in-game summary everyone may see. Never says who the imposters are.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicView {
    pub round: u32,
    pub total_rounds_hint: u32,
    pub active_players: Vec<PlayerId>,
    /// Imposters still in play.
    pub imposter_count: usize,
    pub starting_player: PlayerId,
}

/// One line of the end-of-game summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub player: PlayerId,
    pub name: String,
    pub is_imposter: bool,
    pub is_eliminated: bool,
}

/// End-of-game summary: every player, eliminated ones included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub rounds_played: u32,
    pub outcome: Option<GameOutcome>,
    pub players: Vec<PlayerSummary>,
    pub wins: WinRecord,
}

/// All state for a single game.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    names: Vec<String>,
    imposters: ImposterSet,
    tracker: EliminationTracker,
    round: RoundState,
    phase: GamePhase,
    wins: WinRecord,
    rng: GameRng,
}

impl GameSession {
    /// Validate the setup and deal round one.
    ///
    /// Nothing is drawn unless the configuration is valid for this roster
    /// and word bank.
    pub fn start(
        roster: &Roster,
        bank: &WordBank,
        config: GameConfig,
        mut rng: GameRng,
    ) -> Result<Self, GameError> {
        config.validate(roster.len())?;
        if let Some(missing) = config
            .categories
            .iter()
            .find(|category| !bank.contains_category(category))
        {
            return Err(ConfigError::UnknownCategory(missing.clone()).into());
        }
        let selected = bank.select_word(&config.categories, &mut rng)?;

        let names = roster.names();
        let tracker = EliminationTracker::new();
        let everyone = tracker.active_players(names.len());
        let imposters = assign_imposters(&everyone, config.imposter_count, &mut rng);

        let starting_player = match config.starting_player {
            StartingPlayer::Index(index) => PlayerId::new(index as u8),
            StartingPlayer::Random => everyone[rng.gen_range_usize(0..everyone.len())],
        };

        let round = RoundState::deal(
            1,
            selected,
            &imposters,
            &tracker,
            names.len(),
            starting_player,
            &mut rng,
        );

        info!(
            players = names.len(),
            imposters = imposters.len(),
            category = %round.category,
            seed = rng.seed(),
            "game started"
        );

        Ok(Self {
            config,
            names,
            imposters,
            tracker,
            round,
            phase: GamePhase::RoleReveal { cursor: 0 },
            wins: WinRecord::default(),
            rng,
        })
    }

    fn wrong_phase(&self, operation: &'static str) -> GameError {
        GameError::WrongPhase {
            operation,
            phase: self.phase.name(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current round's roles. Contains secrets; for role reveal only.
    #[must_use]
    pub fn round_state(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round.round
    }

    #[must_use]
    pub fn name(&self, player: PlayerId) -> Option<&str> {
        self.names.get(player.index()).map(String::as_str)
    }

    #[must_use]
    pub fn tracker(&self) -> &EliminationTracker {
        &self.tracker
    }

    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.tracker.active_players(self.names.len())
    }

    #[must_use]
    pub fn wins(&self) -> WinRecord {
        self.wins
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Terminal(_))
    }

    #[must_use]
    pub fn public_view(&self) -> PublicView {
        PublicView {
            round: self.round.round,
            total_rounds_hint: self.config.total_rounds_hint,
            active_players: self.active_players(),
            imposter_count: self
                .tracker
                .active_imposters(&self.imposters, self.names.len())
                .len(),
            starting_player: self.round.starting_player,
        }
    }

    // === Role reveal ===

    /// The player currently viewing their card, and that card.
    #[must_use]
    pub fn current_reveal(&self) -> Option<(PlayerId, RoleCard)> {
        let GamePhase::RoleReveal { cursor } = self.phase else {
            return None;
        };
        let player = *self.active_players().get(cursor)?;
        Some((player, self.round.role_for(player)))
    }

    /// Hand the device to the next active player, or move to discussion
    /// after the last one.
    pub fn next_reveal(&mut self) -> Result<(), GameError> {
        let GamePhase::RoleReveal { cursor } = self.phase else {
            return Err(self.wrong_phase("advance role reveal"));
        };
        let next = cursor + 1;
        self.phase = if next < self.active_players().len() {
            GamePhase::RoleReveal { cursor: next }
        } else {
            GamePhase::Discussion
        };
        Ok(())
    }

    // === Voting ===

    /// Open voting after discussion.
    pub fn start_voting(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Discussion {
            return Err(self.wrong_phase("start voting"));
        }
        self.phase = GamePhase::Voting(VotingSession::new(&self.tracker, self.names.len()));
        Ok(())
    }

    #[must_use]
    pub fn voting(&self) -> Option<&VotingSession> {
        match &self.phase {
            GamePhase::Voting(session) => Some(session),
            _ => None,
        }
    }

    fn voting_mut(&mut self, operation: &'static str) -> Result<&mut VotingSession, GameError> {
        let phase = self.phase.name();
        match &mut self.phase {
            GamePhase::Voting(session) => Ok(session),
            _ => Err(GameError::WrongPhase { operation, phase }),
        }
    }

    #[must_use]
    pub fn current_voter(&self) -> Option<PlayerId> {
        self.voting().and_then(VotingSession::current_voter)
    }

    /// Players the current voter may pick; eliminated players never appear.
    #[must_use]
    pub fn candidates(&self) -> &[PlayerId] {
        self.voting().map(VotingSession::candidates).unwrap_or(&[])
    }

    pub fn submit_vote(&mut self, voter: PlayerId, suspect: PlayerId) -> Result<(), GameError> {
        self.voting_mut("vote")?.submit_vote(voter, suspect)?;
        Ok(())
    }

    /// Move to the next voter. Returns who is up.
    pub fn advance_voter(&mut self) -> Result<PlayerId, GameError> {
        Ok(self.voting_mut("advance voter")?.advance()?)
    }

    // === Resolution ===

    /// Tally the votes and settle the round.
    ///
    /// Refuses with `PrematureResolution` until every active player has
    /// voted; the game is unchanged in that case.
    pub fn resolve_round(&mut self) -> Result<RoundReport, GameError> {
        let GamePhase::Voting(voting) = &self.phase else {
            return Err(self.wrong_phase("resolve round"));
        };

        let result = resolve_round(
            voting,
            &self.imposters,
            &mut self.tracker,
            &self.names,
            &self.config.scoring,
        )?;

        self.wins.record(result.outcome);
        let terminal = result.outcome.is_terminal();
        let report = RoundReport {
            round: self.round.round,
            tally: result.tally,
            plurality: result.plurality,
            eliminated: result.eliminated,
            outcome: result.outcome,
            score_deltas: result.score_deltas,
            secret_word: self.round.secret_word.clone(),
            hint: self.round.hint_for_non_imposters.clone(),
            imposters: terminal.then(|| self.imposters.clone()),
        };

        if terminal {
            info!(outcome = ?report.outcome, rounds = report.round, "game over");
            self.phase = GamePhase::Terminal(report.clone());
        } else {
            self.phase = GamePhase::Resolution(report.clone());
        }
        Ok(report)
    }

    /// Resolve and credit the round's points to `roster` in one step.
    pub fn resolve_round_into(&mut self, roster: &mut Roster) -> Result<RoundReport, GameError> {
        let report = self.resolve_round()?;
        roster.apply(&report.score_deltas);
        Ok(report)
    }

    /// Deal the next round: new word, fresh hints for imposters still in
    /// play, random starting player among the active players.
    pub fn next_round(&mut self, bank: &WordBank) -> Result<(), GameError> {
        if !matches!(self.phase, GamePhase::Resolution(_)) {
            return Err(self.wrong_phase("start next round"));
        }

        let selected = bank.select_word(&self.config.categories, &mut self.rng)?;
        let active = self.active_players();
        let starting_player = active[self.rng.gen_range_usize(0..active.len())];

        self.round = RoundState::deal(
            self.round.round + 1,
            selected,
            &self.imposters,
            &self.tracker,
            self.names.len(),
            starting_player,
            &mut self.rng,
        );
        self.phase = GamePhase::RoleReveal { cursor: 0 };
        Ok(())
    }

    // === Summary ===

    /// Every player with their role and elimination status.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let players = PlayerId::all(self.names.len())
            .map(|player| PlayerSummary {
                player,
                name: self.names[player.index()].clone(),
                is_imposter: self.imposters.contains(&player),
                is_eliminated: self.tracker.is_eliminated(player),
            })
            .collect();

        GameSummary {
            rounds_played: self.round.round,
            outcome: match &self.phase {
                GamePhase::Terminal(report) => Some(report.outcome),
                _ => None,
            },
            players,
            wins: self.wins,
        }
    }

    /// Imposters of this game. Only available once it is over.
    #[must_use]
    pub fn revealed_imposters(&self) -> Option<&[PlayerId]> {
        self.is_over().then_some(self.imposters.as_slice())
    }
}
