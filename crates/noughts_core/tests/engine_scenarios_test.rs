//! End-to-end scenarios for the game engine.

use noughts_core::{Cell, GameEngine, MoveRejected, Outcome, Player, Position};

fn play(engine: &mut GameEngine, indices: &[usize]) {
    for &index in indices {
        engine
            .apply_move(index)
            .unwrap_or_else(|e| panic!("move {index} rejected: {e}"));
    }
}

#[test]
fn test_fresh_engine() {
    let engine = GameEngine::new();
    let state = engine.snapshot();

    assert_eq!(state.current_player(), Player::O);
    assert!(state.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(state.outcome(), Outcome::InProgress);
    let stats = state.statistics();
    assert_eq!(
        (stats.total_games(), stats.x_wins(), stats.o_wins(), stats.draws()),
        (0, 0, 0, 0)
    );
}

#[test]
fn test_top_row_win_for_o() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 1, 5, 2]);

    let state = engine.state();
    assert_eq!(state.outcome(), Outcome::Won(Player::O));
    assert_eq!(state.statistics().total_games(), 1);
    assert_eq!(state.statistics().o_wins(), 1);
    assert_eq!(state.statistics().x_wins(), 0);
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    // O completes the 0-4-8 diagonal with the ninth mark
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 3, 4, 6, 7, 5]);
    assert_eq!(engine.apply_move(8), Ok(Outcome::Won(Player::O)));

    let stats = engine.state().statistics();
    assert_eq!(stats.draws(), 0);
    assert_eq!(stats.o_wins(), 1);
}

#[test]
fn test_full_board_draw() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6]);
    assert_eq!(engine.apply_move(8), Ok(Outcome::Draw));

    let state = engine.state();
    assert_eq!(state.statistics().draws(), 1);
    assert_eq!(state.statistics().total_games(), 1);
    // The final mover stays current once the game is over
    assert_eq!(state.current_player(), Player::O);
}

#[test]
fn test_reset_after_win_keeps_statistics() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 1, 5, 2]);
    engine.reset();

    let state = engine.state();
    assert!(state.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(state.current_player(), Player::O);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(state.statistics().total_games(), 1);
    assert_eq!(state.statistics().o_wins(), 1);
}

#[test]
fn test_second_move_on_same_cell_is_noop() {
    let mut engine = GameEngine::new();
    engine.apply_move(4).unwrap();
    let after_first = engine.snapshot();

    assert_eq!(
        engine.apply_move(4),
        Err(MoveRejected::CellOccupied(Position::Center))
    );
    assert_eq!(engine.state(), &after_first);
}

#[test]
fn test_out_of_range_is_noop() {
    let mut engine = GameEngine::new();
    engine.apply_move(0).unwrap();
    let before = engine.snapshot();

    for index in [9, 100, usize::MAX] {
        assert_eq!(
            engine.apply_move(index),
            Err(MoveRejected::IndexOutOfRange(index))
        );
        assert_eq!(engine.state(), &before);
    }
}

#[test]
fn test_statistics_accumulate_across_games() {
    let mut engine = GameEngine::new();

    play(&mut engine, &[0, 4, 1, 5, 2]);
    engine.reset();
    play(&mut engine, &[0, 2, 1, 4, 8, 6]);
    engine.reset();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    engine.reset();

    let stats = engine.state().statistics();
    assert_eq!(stats.total_games(), 3);
    assert_eq!(stats.o_wins(), 1);
    assert_eq!(stats.x_wins(), 1);
    assert_eq!(stats.draws(), 1);
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4]);

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["cells"][4], serde_json::json!({ "Mark": "O" }));
    assert_eq!(json["statistics"]["total_games"], 0);
}
