//! Tests for board placement and rule evaluation through the public API.

use tictactoe_engine::rules::{self, LINES};
use tictactoe_engine::{Board, Mark, PlaceError, Position, Square, Verdict};

#[test]
fn test_occupied_placement_never_mutates() {
    let mut board = Board::new();
    board.place(Position::Center, Mark::X).unwrap();

    for mark in [Mark::X, Mark::O] {
        let before = board.clone();
        let result = board.place(Position::Center, mark);
        assert_eq!(result, Err(PlaceError::CellOccupied(Position::Center)));
        assert_eq!(board, before);
    }
    assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
}

#[test]
fn test_each_canonical_line_wins() {
    for line in LINES {
        let mut board = Board::new();
        for pos in line {
            board.place(pos, Mark::O).unwrap();
        }
        assert!(rules::has_win(&board, Mark::O));
        assert_eq!(rules::evaluate(&board, Mark::O), Verdict::Win(Mark::O));
    }
}

#[test]
fn test_no_line_means_no_win() {
    let mut board = Board::new();
    // X X O / O O X / X - -
    for (pos, mark) in [
        (Position::TopLeft, Mark::X),
        (Position::TopCenter, Mark::X),
        (Position::TopRight, Mark::O),
        (Position::MiddleLeft, Mark::O),
        (Position::Center, Mark::O),
        (Position::MiddleRight, Mark::X),
        (Position::BottomLeft, Mark::X),
    ] {
        board.place(pos, mark).unwrap();
    }
    assert!(!rules::has_win(&board, Mark::X));
    assert!(!rules::has_win(&board, Mark::O));
    assert_eq!(rules::evaluate(&board, Mark::X), Verdict::Continue);
}

#[test]
fn test_counts_always_sum_to_nine() {
    let mut board = Board::new();
    for (i, pos) in Position::ALL.into_iter().enumerate() {
        assert_eq!(board.count_free() + board.occupied_count(), 9);
        assert_eq!(board.occupied_count(), i);
        board.place(pos, Mark::X).unwrap();
    }
    assert_eq!(board.count_free(), 0);
}
