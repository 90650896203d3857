//! End-to-end games through the turn controller.

use std::collections::VecDeque;
use std::io::Cursor;
use tictactoe_engine::{
    Board, GameEvent, GameState, GameStatus, HumanMoveSource, Mark, MoveSource,
    MoveSourceError, PlayerKind, Position, RandomMoveSource, TurnController,
};

struct Scripted(VecDeque<Position>);

impl MoveSource for Scripted {
    fn request_move(&mut self, _board: &Board) -> Result<Position, MoveSourceError> {
        self.0.pop_front().ok_or(MoveSourceError::InputClosed)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn scripted(moves: &[Position]) -> Box<dyn MoveSource> {
    Box::new(Scripted(moves.iter().copied().collect()))
}

#[test]
fn test_top_row_wins_on_turn_five() {
    let state = GameState::new(Mark::X, PlayerKind::Human);
    let mut controller = TurnController::new(
        state,
        scripted(&[Position::TopLeft, Position::TopCenter, Position::TopRight]),
        scripted(&[Position::Center, Position::BottomLeft]),
    );
    let mut events: Vec<GameEvent> = Vec::new();

    let status = controller.run(&mut events).unwrap();

    let human = controller.state().player(PlayerKind::Human);
    assert_eq!(status, GameStatus::Won(human));
    assert_eq!(controller.state().board().occupied_count(), 5);
    assert_eq!(events.last(), Some(&GameEvent::GameOver(GameStatus::Won(human))));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // Final board: X O X / X O O / O X X
    let state = GameState::new(Mark::X, PlayerKind::Human);
    let mut controller = TurnController::new(
        state,
        scripted(&[
            Position::TopLeft,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ]),
        scripted(&[
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::MiddleRight,
        ]),
    );
    let mut events: Vec<GameEvent> = Vec::new();

    let status = controller.run(&mut events).unwrap();

    assert_eq!(status, GameStatus::Draw);
    assert_eq!(controller.state().board().count_free(), 0);
}

#[test]
fn test_win_on_last_square_is_not_draw() {
    // Final board: O X O / X O X / X O O, O completes the diagonal last.
    let state = GameState::new(Mark::X, PlayerKind::Computer);
    let mut controller = TurnController::new(
        state,
        scripted(&[
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomLeft,
        ]),
        scripted(&[
            Position::TopLeft,
            Position::TopRight,
            Position::Center,
            Position::BottomCenter,
            Position::BottomRight,
        ]),
    );
    let mut events: Vec<GameEvent> = Vec::new();

    let status = controller.run(&mut events).unwrap();

    let computer = controller.state().player(PlayerKind::Computer);
    assert_eq!(status, GameStatus::Won(computer));
    assert_eq!(computer.mark(), Mark::O);
    assert_eq!(controller.state().board().count_free(), 0);
}

#[test]
fn test_occupied_choice_rejected_then_free_choice_succeeds() {
    let state = GameState::new(Mark::O, PlayerKind::Computer);
    let human = HumanMoveSource::new(
        "you",
        Cursor::new(b"2 2\n1 1\n".to_vec()),
        Vec::<u8>::new(),
    );
    let mut controller = TurnController::new(
        state,
        Box::new(human),
        scripted(&[Position::Center]),
    );
    let mut events: Vec<GameEvent> = Vec::new();

    controller.play_turn(&mut events).unwrap();
    let after_computer = controller.state().board().clone();
    controller.play_turn(&mut events).unwrap();

    let board = controller.state().board();
    assert_eq!(after_computer.occupied_count(), 1);
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(
        board.get(Position::Center),
        tictactoe_engine::Square::Occupied(Mark::X)
    );
    assert_eq!(
        board.get(Position::TopLeft),
        tictactoe_engine::Square::Occupied(Mark::O)
    );
}

#[test]
fn test_random_versus_random_always_terminates() {
    for seed in 0..25 {
        let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(seed);
        let state = GameState::with_random_start(Mark::X, &mut rng);
        let mut controller = TurnController::new(
            state,
            Box::new(RandomMoveSource::from_seed("a", seed)),
            Box::new(RandomMoveSource::from_seed("b", seed + 1000)),
        );
        let mut events: Vec<GameEvent> = Vec::new();

        let status = controller.run(&mut events).unwrap();

        assert!(status.is_terminal());
        let moves = events
            .iter()
            .filter(|e| matches!(e, GameEvent::MovePlayed { .. }))
            .count();
        assert_eq!(moves, controller.state().board().occupied_count());
    }
}
