//! Uniform random opponent.

use super::MoveSource;
use crate::error::MoveSourceError;
use crate::position::Position;
use crate::types::Board;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks a cell uniformly at random, redrawing until it lands on a free one.
///
/// Draws are independent; rejected cells are not remembered.
pub struct RandomMoveSource<R = StdRng> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomMoveSource<R> {
    /// Creates a random source driven by `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl RandomMoveSource<StdRng> {
    /// Creates a reproducible source from a seed.
    pub fn from_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::new(name, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSource for RandomMoveSource<R> {
    #[instrument(skip(self, board), fields(source = %self.name, free = board.count_free()))]
    fn request_move(&mut self, board: &Board) -> Result<Position, MoveSourceError> {
        if board.count_free() == 0 {
            return Err(MoveSourceError::BoardFull);
        }

        let mut draws = 0u32;
        loop {
            draws += 1;
            let pos = Position::ALL[self.rng.random_range(0..Position::ALL.len())];
            let (row, col) = (pos.row(), pos.col());
            if board.is_free(pos) {
                debug!(row, col, draws, "Random move chosen");
                return Ok(pos);
            }
            debug!(row, col, "Drawn square occupied, redrawing");
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_only_free_square_is_found() {
        for free in Position::ALL {
            let mut board = Board::new();
            for pos in Position::ALL.into_iter().filter(|p| *p != free) {
                board.place(pos, Mark::X).unwrap();
            }
            let mut source = RandomMoveSource::from_seed("cpu", free.to_index() as u64);
            assert_eq!(source.request_move(&board), Ok(free));
        }
    }

    #[test]
    fn test_never_returns_occupied_square() {
        for seed in 0..50 {
            let mut source = RandomMoveSource::from_seed("cpu", seed);
            let mut board = Board::new();
            let mut mark = Mark::X;
            while board.count_free() > 0 {
                let pos = source.request_move(&board).unwrap();
                assert!(board.is_free(pos), "seed {} returned occupied {:?}", seed, pos);
                board.place(pos, mark).unwrap();
                mark = mark.opponent();
            }
        }
    }

    #[test]
    fn test_every_square_can_be_drawn_on_empty_board() {
        let board = Board::new();
        let mut source = RandomMoveSource::from_seed("cpu", 3);
        let seen: std::collections::HashSet<Position> =
            (0..500).map(|_| source.request_move(&board).unwrap()).collect();
        assert_eq!(seen.len(), Position::ALL.len());
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Mark::O).unwrap();
        }
        let mut source = RandomMoveSource::from_seed("cpu", 7);
        assert_eq!(source.request_move(&board), Err(MoveSourceError::BoardFull));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomMoveSource::from_seed("a", 42);
        let mut b = RandomMoveSource::from_seed("b", 42);
        for _ in 0..10 {
            assert_eq!(a.request_move(&board), b.request_move(&board));
        }
    }
}
