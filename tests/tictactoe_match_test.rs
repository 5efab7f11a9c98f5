//! Tests for the round and match state machine.

use ttt_match::{
    Board, Marker, Match, MatchConfig, MatchError, MatchPhase, Player, Position, RoundOutcome,
    ScriptedPrompter, Strategy, TurnEvent,
};

fn cells(numbers: &[u8]) -> ScriptedPrompter {
    ScriptedPrompter::cells(numbers.iter().filter_map(|n| Position::from_number(*n)))
}

/// Two scripted humans, X always first.
fn scripted(x_cells: &[u8], o_cells: &[u8], win_score: u32) -> Match {
    let config = MatchConfig::default().with_win_score(win_score).unwrap();
    let x = Player::interactive("Ann", Marker::X, cells(x_cells));
    let o = Player::interactive("Bob", Marker::O, cells(o_cells));
    Match::new(x, o, Marker::X, &config).unwrap()
}

#[test]
fn test_full_board_draw_scores_nobody() {
    // X O X / X O O / O X X
    let mut game = scripted(&[1, 3, 4, 8, 9], &[2, 5, 6, 7], 2);
    let report = game.play_round().unwrap();

    assert_eq!(*report.outcome(), RoundOutcome::Draw);
    assert!(report.final_board().is_full());
    assert!(game.players().iter().all(|p| p.score() == 0));
    assert_eq!(
        game.phase(),
        MatchPhase::RoundConcluded {
            outcome: RoundOutcome::Draw
        }
    );
    assert_eq!(game.history().round_count(), 1);
}

#[test]
fn test_round_ends_on_first_line() {
    // X completes the top row on its third move; O's script is never exhausted.
    let mut game = scripted(&[1, 2, 3], &[4, 5, 9], 3);
    let mut moves = 0;
    let report = loop {
        moves += 1;
        match game.play_turn().unwrap() {
            TurnEvent::Moved { .. } => continue,
            TurnEvent::RoundConcluded { mv, report } => {
                assert_eq!(mv.position(), Position::TopRight);
                break report;
            }
        }
    };

    assert_eq!(moves, 5);
    assert_eq!(*report.outcome(), RoundOutcome::Winner(Marker::X));
    assert_eq!(game.player(Marker::X).unwrap().score(), 1);
    assert_eq!(game.player(Marker::O).unwrap().score(), 0);
}

#[test]
fn test_concluded_round_is_frozen_until_reset() {
    let mut game = scripted(&[1, 2, 3, 5], &[4, 6, 7], 3);
    game.play_round().unwrap();
    let before = game.board().clone();

    assert!(matches!(game.play_turn(), Err(MatchError::WrongPhase { .. })));
    assert_eq!(game.board(), &before);

    game.reset_round().unwrap();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.round_number(), 2);
}

#[test]
fn test_match_concludes_exactly_at_threshold() {
    let mut game = scripted(&[1, 2, 3, 1, 2, 3], &[4, 5, 4, 5], 2);

    let first = game.play_round().unwrap();
    assert_eq!(*first.match_winner(), None);
    game.reset_round().unwrap();

    let second = game.play_round().unwrap();
    assert_eq!(*second.match_winner(), Some(Marker::X));
    assert_eq!(*second.scores()[0].score(), 2);
    assert_eq!(*second.scores()[1].score(), 0);

    assert_eq!(game.phase(), MatchPhase::MatchConcluded { winner: Marker::X });
    assert!(game.players().iter().all(|p| p.score() == 0));
    assert!(matches!(game.reset_round(), Err(MatchError::WrongPhase { .. })));
}

#[test]
fn test_next_match_numbers_increase() {
    let mut game = scripted(&[1, 2, 3], &[4, 5], 1);
    game.play_round().unwrap();
    game.start_next_match(Marker::O).unwrap();

    assert_eq!(game.match_number(), 2);
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.first_mover(), Marker::O);
    assert_eq!(game.to_move(), Some(Marker::O));
    assert_eq!(game.history().match_count(), 1);
}

#[test]
fn test_scores_move_by_one_for_one_player() {
    let x = Player::automated("One", Marker::X, Strategy::Heuristic, Some(7));
    let o = Player::automated("Two", Marker::O, Strategy::Random, Some(8));
    let config = MatchConfig::default().with_win_score(3).unwrap();
    let mut game = Match::new(x, o, Marker::X, &config).unwrap();

    let mut previous = [0u32, 0u32];
    loop {
        let report = game.play_round().unwrap();
        let now = [*report.scores()[0].score(), *report.scores()[1].score()];
        let gained: Vec<u32> = now.iter().zip(previous).map(|(n, p)| n - p).collect();

        match report.outcome() {
            RoundOutcome::Draw => assert_eq!(gained, vec![0, 0]),
            RoundOutcome::Winner(_) => assert_eq!(gained.iter().sum::<u32>(), 1),
        }
        assert!(now.iter().all(|score| *score <= 3));

        if report.match_winner().is_some() {
            assert!(now.contains(&3));
            break;
        }
        previous = now;
        game.reset_round().unwrap();
    }
}

#[test]
fn test_automated_players_finish_many_matches() {
    let x = Player::automated("One", Marker::X, Strategy::Heuristic, Some(1));
    let o = Player::automated("Two", Marker::O, Strategy::FirstAvailable, Some(2));
    let mut game = Match::new(x, o, Marker::O, &MatchConfig::default()).unwrap();

    for number in 1..=5 {
        if number > 1 {
            game.start_next_match(Marker::X).unwrap();
        }
        while game.play_round().unwrap().match_winner().is_none() {
            game.reset_round().unwrap();
        }
    }
    assert_eq!(game.history().match_count(), 5);
}

#[test]
fn test_duplicate_markers_rejected() {
    let a = Player::automated("A", Marker::O, Strategy::Random, Some(0));
    let b = Player::automated("B", Marker::O, Strategy::Random, Some(0));
    let err = Match::new(a, b, Marker::O, &MatchConfig::default()).unwrap_err();
    assert!(err.to_string().contains("cannot share"));
}
