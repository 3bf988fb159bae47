//! Full-game flow tests through `GameSession`.
//!
//! Imposters are drawn at random, so scenarios read the drawn set back and
//! aim their votes relative to it.

use fake_it::core::{ConfigError, GameError, VoteError};
use fake_it::{
    GameConfig, GameOutcome, GamePhase, GameRng, GameSession, PlayerId, Plurality, RoleCard,
    Roster, StartingPlayer, WinRecord, WordBank,
};

// =============================================================================
// Helpers
// =============================================================================

fn roster(names: &[&str]) -> Roster {
    Roster::from_names(names)
}

fn config(imposters: usize) -> GameConfig {
    GameConfig::new(imposters).with_categories(["animals", "food"])
}

fn start(names: &[&str], imposters: usize, seed: u64) -> (Roster, GameSession) {
    let roster = roster(names);
    let game = GameSession::start(&roster, &WordBank::fallback(), config(imposters), GameRng::new(seed))
        .unwrap();
    (roster, game)
}

fn reveal_all(game: &mut GameSession) {
    while game.current_reveal().is_some() {
        game.next_reveal().unwrap();
    }
    assert_eq!(game.phase(), &GamePhase::Discussion);
}

fn vote_all(game: &mut GameSession, pick: impl Fn(PlayerId) -> PlayerId) {
    game.start_voting().unwrap();
    loop {
        let voter = game.current_voter().unwrap();
        game.submit_vote(voter, pick(voter)).unwrap();
        if game.voting().unwrap().is_complete() {
            break;
        }
        game.advance_voter().unwrap();
    }
}

fn only_imposter(game: &GameSession) -> PlayerId {
    let imposters = &game.round_state().imposters;
    assert_eq!(imposters.len(), 1);
    imposters[0]
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_start_rejects_bad_config() {
    let bank = WordBank::fallback();

    let small = roster(&["A", "B"]);
    let err = GameSession::start(&small, &bank, config(1), GameRng::new(1)).unwrap_err();
    assert_eq!(err, GameError::Config(ConfigError::TooFewPlayers { found: 2, min: 3 }));

    let three = roster(&["A", "B", "C"]);
    let err = GameSession::start(&three, &bank, config(3), GameRng::new(1)).unwrap_err();
    assert!(matches!(err, GameError::Config(ConfigError::ImposterCount { .. })));

    let err = GameSession::start(&three, &bank, GameConfig::new(1), GameRng::new(1)).unwrap_err();
    assert_eq!(err, GameError::Config(ConfigError::NoCategories));

    let unknown = GameConfig::new(1).with_category("planets");
    let err = GameSession::start(&three, &bank, unknown, GameRng::new(1)).unwrap_err();
    assert_eq!(
        err,
        GameError::Config(ConfigError::UnknownCategory("planets".to_string()))
    );
}

#[test]
fn test_start_deals_round_one() {
    let (_, game) = start(&["A", "B", "C", "D", "E"], 2, 42);
    let round = game.round_state();

    assert_eq!(round.round, 1);
    assert_eq!(round.imposters.len(), 2);
    assert!(["animals", "food"].contains(&round.category.as_str()));
    assert_eq!(round.imposter_hints.len(), 2);
    assert!(matches!(game.phase(), GamePhase::RoleReveal { cursor: 0 }));
}

#[test]
fn test_explicit_starting_player() {
    let roster = roster(&["A", "B", "C", "D"]);
    let config = config(1).with_starting_player(StartingPlayer::Index(2));
    let game = GameSession::start(&roster, &WordBank::fallback(), config, GameRng::new(3)).unwrap();
    assert_eq!(game.public_view().starting_player, PlayerId::new(2));
}

#[test]
fn test_same_seed_same_game() {
    let (_, a) = start(&["A", "B", "C", "D", "E", "F"], 2, 1234);
    let (_, b) = start(&["A", "B", "C", "D", "E", "F"], 2, 1234);
    assert_eq!(a.round_state(), b.round_state());
}

// =============================================================================
// Role reveal
// =============================================================================

#[test]
fn test_role_reveal_shows_each_player_once() {
    let (_, mut game) = start(&["A", "B", "C", "D"], 1, 7);
    let imposter = only_imposter(&game);
    let secret = game.round_state().secret_word.clone();

    let mut seen = Vec::new();
    while let Some((player, card)) = game.current_reveal() {
        match card {
            RoleCard::Imposter { .. } => assert_eq!(player, imposter),
            RoleCard::Word { secret: shown } => {
                assert_ne!(player, imposter);
                assert_eq!(shown, secret);
            }
        }
        seen.push(player);
        game.next_reveal().unwrap();
    }

    assert_eq!(seen, game.active_players());
    assert_eq!(game.phase(), &GamePhase::Discussion);
}

#[test]
fn test_public_view_hides_identities() {
    let (_, game) = start(&["A", "B", "C", "D", "E"], 2, 9);
    let view = game.public_view();

    assert_eq!(view.imposter_count, 2);
    assert_eq!(view.active_players.len(), 5);
    assert_eq!(view.round, 1);
    assert_eq!(view.total_rounds_hint, 3);
}

// =============================================================================
// Phase guards
// =============================================================================

#[test]
fn test_phase_guards() {
    let (_, mut game) = start(&["A", "B", "C"], 1, 5);

    assert!(matches!(game.start_voting(), Err(GameError::WrongPhase { .. })));
    assert!(matches!(
        game.submit_vote(PlayerId::new(0), PlayerId::new(1)),
        Err(GameError::WrongPhase { .. })
    ));
    assert!(matches!(game.resolve_round(), Err(GameError::WrongPhase { .. })));
    assert!(matches!(
        game.next_round(&WordBank::fallback()),
        Err(GameError::WrongPhase { .. })
    ));

    reveal_all(&mut game);
    assert!(matches!(game.next_reveal(), Err(GameError::WrongPhase { .. })));
}

#[test]
fn test_premature_resolution_refused() {
    let (_, mut game) = start(&["A", "B", "C", "D"], 1, 5);
    reveal_all(&mut game);
    game.start_voting().unwrap();
    game.submit_vote(PlayerId::new(0), PlayerId::new(1)).unwrap();

    let err = game.resolve_round().unwrap_err();
    assert!(matches!(err, GameError::PrematureResolution(_)));
    assert!(matches!(game.phase(), GamePhase::Voting(_)));
    assert!(game.tracker().eliminated().is_empty());
}

#[test]
fn test_invalid_vote_keeps_same_voter() {
    let (_, mut game) = start(&["A", "B", "C"], 1, 5);
    reveal_all(&mut game);
    game.start_voting().unwrap();

    let err = game.submit_vote(PlayerId::new(0), PlayerId::new(7)).unwrap_err();
    assert_eq!(err, GameError::Vote(VoteError::UnknownPlayer(PlayerId::new(7))));
    assert_eq!(game.current_voter(), Some(PlayerId::new(0)));
}

// =============================================================================
// Scenarios
// =============================================================================

/// [A,B,C], one imposter; both others name the imposter, the imposter
/// names someone else. Imposter out, players win, accusers +10.
#[test]
fn test_players_win() {
    let (mut roster, mut game) = start(&["A", "B", "C"], 1, 11);
    let imposter = only_imposter(&game);
    let scapegoat = game.active_players().into_iter().find(|&p| p != imposter).unwrap();
    assert_eq!(game.revealed_imposters(), None);

    reveal_all(&mut game);
    vote_all(&mut game, |voter| if voter == imposter { scapegoat } else { imposter });
    let report = game.resolve_round_into(&mut roster).unwrap();

    assert_eq!(report.plurality, Plurality::Single(imposter));
    assert_eq!(report.eliminated, Some(imposter));
    assert_eq!(report.outcome, GameOutcome::PlayersWin);
    assert_eq!(report.score_deltas.len(), 2);
    assert!(report.score_deltas.iter().all(|d| d.points == 10 && d.player != imposter));
    assert_eq!(report.imposters.as_deref(), Some(&[imposter][..]));

    for player in roster.iter() {
        let expected = if Some(player.name.as_str()) == game.name(imposter) { 0 } else { 10 };
        assert_eq!(player.score, expected);
    }

    assert!(game.is_over());
    assert_eq!(game.revealed_imposters(), Some(&[imposter][..]));
    assert_eq!(game.wins().player_wins, 1);
    assert_eq!(game.wins().imposter_wins, 0);
    assert!(matches!(
        game.next_round(&WordBank::fallback()),
        Err(GameError::WrongPhase { .. })
    ));
}

/// [A,B,C,D], one imposter; two votes each for the imposter and one other
/// player. Tie, nobody out, game continues.
#[test]
fn test_tie_continues() {
    let (_, mut game) = start(&["A", "B", "C", "D"], 1, 21);
    let imposter = only_imposter(&game);
    let other = game.active_players().into_iter().find(|&p| p != imposter).unwrap();

    reveal_all(&mut game);
    vote_all(&mut game, |voter| if voter.index() < 2 { imposter } else { other });
    let report = game.resolve_round().unwrap();

    assert!(matches!(report.plurality, Plurality::Tie(ref tied) if tied.len() == 2));
    assert_eq!(report.eliminated, None);
    assert_eq!(report.outcome, GameOutcome::Continue);
    assert!(report.score_deltas.is_empty());
    assert_eq!(report.imposters, None);
    assert_eq!(report.tally.total(), 4);
    assert!(matches!(game.phase(), GamePhase::Resolution(_)));
    assert_eq!(game.wins(), WinRecord::default());
}

/// [A,B,C,D], one imposter; the table votes out an innocent two rounds in a
/// row. Imposter reaches parity and earns +15.
#[test]
fn test_imposters_win_after_two_rounds() {
    let (mut roster, mut game) = start(&["A", "B", "C", "D"], 1, 31);
    let bank = WordBank::fallback();
    let imposter = only_imposter(&game);

    // Round 1: first innocent out, 1 imposter vs 2 others.
    let first = game.active_players().into_iter().find(|&p| p != imposter).unwrap();
    reveal_all(&mut game);
    vote_all(&mut game, |voter| if voter == first { imposter } else { first });
    let report = game.resolve_round_into(&mut roster).unwrap();
    assert_eq!(report.eliminated, Some(first));
    assert_eq!(report.outcome, GameOutcome::Continue);

    // Round 2: fresh word, same imposter, eliminated player gone.
    game.next_round(&bank).unwrap();
    assert_eq!(game.round_number(), 2);
    assert_eq!(game.round_state().imposters.as_slice(), &[imposter]);
    assert!(game.round_state().imposter_hints.contains_key(&imposter));
    assert!(game.active_players().contains(&game.public_view().starting_player));
    assert!(!game.active_players().contains(&first));

    let second = game.active_players().into_iter().find(|&p| p != imposter).unwrap();
    reveal_all(&mut game);
    assert!(!game.candidates().contains(&first));
    vote_all(&mut game, |voter| if voter == second { imposter } else { second });
    let report = game.resolve_round_into(&mut roster).unwrap();

    assert_eq!(report.eliminated, Some(second));
    assert_eq!(report.outcome, GameOutcome::ImpostersWin);
    assert_eq!(report.score_deltas.len(), 1);
    assert_eq!(report.score_deltas[0].player, imposter);
    assert_eq!(report.score_deltas[0].points, 15);

    let imposter_name = game.name(imposter).unwrap();
    assert_eq!(roster.score(imposter_name), Some(15));
    assert_eq!(game.wins().imposter_wins, 1);

    let summary = game.summary();
    assert_eq!(summary.rounds_played, 2);
    assert_eq!(summary.outcome, Some(GameOutcome::ImpostersWin));
    assert_eq!(summary.players.len(), 4);
    let eliminated: Vec<_> = summary
        .players
        .iter()
        .filter(|p| p.is_eliminated)
        .map(|p| p.player)
        .collect();
    assert_eq!(eliminated.len(), 2);
    assert!(eliminated.contains(&first) && eliminated.contains(&second));
    assert_eq!(
        summary.players.iter().filter(|p| p.is_imposter).count(),
        1
    );
}

#[test]
fn test_scores_carry_across_games() {
    let bank = WordBank::fallback();
    let mut roster = roster(&["A", "B", "C"]);

    for seed in [1, 2] {
        let mut game = GameSession::start(&roster, &bank, config(1), GameRng::new(seed)).unwrap();
        let imposter = only_imposter(&game);
        let scapegoat = game.active_players().into_iter().find(|&p| p != imposter).unwrap();
        reveal_all(&mut game);
        vote_all(&mut game, |voter| if voter == imposter { scapegoat } else { imposter });
        game.resolve_round_into(&mut roster).unwrap();
    }

    let total: i64 = roster.iter().map(|p| p.score).sum();
    assert_eq!(total, 40);

    roster.reset_scores();
    assert!(roster.iter().all(|p| p.score == 0));
}
