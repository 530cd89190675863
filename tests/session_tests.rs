use std::time::{Duration, Instant};

use arboriter_minimax::{
    EngineConfig, GameSession, InputPolicy, Mark, MinimaxError, Move, Outcome, Score,
    SessionPhase, TickOutcome,
};

fn session_for(player_to_win: Mark) -> GameSession {
    let config = EngineConfig::default()
        .with_player_to_win(player_to_win)
        .with_think_delay(Duration::ZERO);
    GameSession::new(config).unwrap()
}

#[test]
fn test_missing_player_to_win_is_fatal() {
    let result = GameSession::new(EngineConfig::default());
    assert!(matches!(result, Err(MinimaxError::NoPlayerToWin)));
}

#[test]
fn test_engine_opens_in_the_center() {
    let mut session = session_for(Mark::X);
    assert_eq!(session.phase(), SessionPhase::NoMovesYet);
    assert!(session.tree().is_none());

    let outcome = session.tick().unwrap();

    assert_eq!(
        outcome,
        TickOutcome::Moved {
            mark: Mark::X,
            mv: Move::new(1, 1)
        }
    );
    assert_eq!(session.phase(), SessionPhase::InProgress);
    assert_eq!(session.move_count(), 1);

    // The tree is rooted at the board after the opening move
    let tree = session.tree().unwrap();
    assert_eq!(tree.root().board, *session.board());
    assert_eq!(session.current_id(), Some(tree.root_id()));
    assert_eq!(session.predicted_score(), Some(Score::Draw));
}

#[test]
fn test_custom_opening_move() {
    let config = EngineConfig::default()
        .with_player_to_win(Mark::X)
        .with_think_delay(Duration::ZERO)
        .with_opening_move(Move::new(0, 0));
    let mut session = GameSession::new(config).unwrap();

    session.tick().unwrap();
    assert_eq!(session.board().get(0, 0), Some(arboriter_minimax::Cell::X));
}

#[test]
fn test_waits_for_human_without_input() {
    let mut session = session_for(Mark::O);

    for _ in 0..5 {
        assert_eq!(session.tick().unwrap(), TickOutcome::Idle);
    }
    assert_eq!(session.phase(), SessionPhase::NoMovesYet);
    assert_eq!(session.move_count(), 0);
    assert!(session.tree().is_none());
}

#[test]
fn test_human_first_move_builds_tree_and_engine_answers() {
    let mut session = session_for(Mark::O);

    session.submit_cell_selection(0, 0);
    assert_eq!(
        session.tick().unwrap(),
        TickOutcome::Moved {
            mark: Mark::X,
            mv: Move::new(0, 0)
        }
    );
    assert_eq!(session.phase(), SessionPhase::InProgress);
    assert_eq!(session.tree().unwrap().root().board, *session.board());

    // The only non-losing answer to a corner opening is the center
    assert_eq!(
        session.tick().unwrap(),
        TickOutcome::Moved {
            mark: Mark::O,
            mv: Move::CENTER
        }
    );
    assert_eq!(session.current_node().unwrap().board, *session.board());
}

#[test]
fn test_invalid_selections_are_ignored() {
    let mut session = session_for(Mark::X);
    session.tick().unwrap();
    let before = *session.board();

    // Occupied
    session.submit_cell_selection(1, 1);
    assert_eq!(session.tick().unwrap(), TickOutcome::Idle);

    // Off the board
    session.submit_cell_selection(3, 0);
    assert_eq!(session.tick().unwrap(), TickOutcome::Idle);
    session.submit_cell_selection(0, 9);
    assert_eq!(session.tick().unwrap(), TickOutcome::Idle);

    assert_eq!(*session.board(), before);
    assert_eq!(session.move_count(), 1);
    assert_eq!(session.board().to_move(), Mark::O);
    assert!(session.is_alive());
}

#[test]
fn test_latest_selection_wins_and_older_ones_are_dropped() {
    let mut session = session_for(Mark::O);

    session.submit_cell_selection(0, 0);
    session.submit_cell_selection(2, 2);
    assert_eq!(session.pending_selections(), 2);

    assert_eq!(
        session.tick().unwrap(),
        TickOutcome::Moved {
            mark: Mark::X,
            mv: Move::new(2, 2)
        }
    );
    assert_eq!(session.pending_selections(), 0);
}

#[test]
fn test_fifo_policy_consumes_oldest_first() {
    let config = EngineConfig::default()
        .with_player_to_win(Mark::O)
        .with_think_delay(Duration::ZERO)
        .with_input_policy(InputPolicy::Fifo);
    let mut session = GameSession::new(config).unwrap();

    session.submit_cell_selection(0, 0);
    session.submit_cell_selection(2, 2);

    assert_eq!(
        session.tick().unwrap(),
        TickOutcome::Moved {
            mark: Mark::X,
            mv: Move::new(0, 0)
        }
    );
    assert_eq!(session.pending_selections(), 1);
}

#[test]
fn test_quit_stops_ticking() {
    let mut session = session_for(Mark::X);
    session.request_quit();

    assert!(!session.is_alive());
    assert_eq!(session.tick().unwrap(), TickOutcome::Idle);
    assert_eq!(session.move_count(), 0);
}

#[test]
fn test_game_runs_to_completion() {
    let mut session = session_for(Mark::X);
    // The human always picks the first free cell
    let mut ticks = 0;

    while session.is_alive() {
        if session.board().to_move() == session.human_mark() {
            let mv = session.board().empty_cells().next().unwrap();
            session.submit_cell_selection(mv.row, mv.col);
        }
        session.tick().unwrap();
        assert_eq!(session.current_node().unwrap().board, *session.board());

        ticks += 1;
        assert!(ticks < 20, "game did not finish");
    }

    assert_eq!(session.phase(), SessionPhase::Finished);
    let outcome = session.outcome().unwrap();
    assert_ne!(outcome, Outcome::Win(Mark::O));
    assert_eq!(session.history().len(), session.move_count() + 1);
    assert!(session.current_node().unwrap().terminal);

    // A finished game ignores further input
    session.submit_cell_selection(0, 0);
    assert_eq!(session.tick().unwrap(), TickOutcome::Idle);
}

#[test]
fn test_tree_is_built_once() {
    let mut session = session_for(Mark::O);
    session.submit_cell_selection(1, 1);
    session.tick().unwrap();

    let nodes = session.tree().unwrap().len();
    let stats = session.statistics().unwrap().clone();
    assert_eq!(stats.node_count, nodes);

    session.tick().unwrap();
    session.submit_cell_selection(2, 2);
    session.tick().unwrap();

    assert_eq!(session.move_count(), 3);
    assert_eq!(session.tree().unwrap().len(), nodes);
    assert_eq!(session.statistics(), Some(&stats));
}

#[test]
fn test_engine_thinks_before_moving() {
    let delay = Duration::from_millis(50);
    let config = EngineConfig::default()
        .with_player_to_win(Mark::X)
        .with_think_delay(delay);
    let mut session = GameSession::new(config).unwrap();

    let start = Instant::now();
    session.tick().unwrap();
    assert!(start.elapsed() >= delay);

    // Human turns never wait
    let start = Instant::now();
    assert_eq!(session.tick().unwrap(), TickOutcome::Idle);
    session.submit_cell_selection(0, 0);
    assert!(matches!(
        session.tick().unwrap(),
        TickOutcome::Moved { mark: Mark::O, .. }
    ));
    assert!(start.elapsed() < delay);

    let start = Instant::now();
    assert!(matches!(
        session.tick().unwrap(),
        TickOutcome::Moved { mark: Mark::X, .. }
    ));
    assert!(start.elapsed() >= delay);
}
