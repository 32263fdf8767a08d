//! Move selection for the computer player.
//!
//! The classic 3×3 board is small enough to search exhaustively, so the AI
//! never loses there. Every other size falls back to [`heuristic`].

pub mod heuristic;
pub mod minimax;

use super::{Board, CLASSIC_SIZE};
use rand::Rng;
use tracing::instrument;

/// Strategy used to pick the AI's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Full game-tree search.
    Minimax,
    /// Priority rules: win, block, center, corner, random.
    Heuristic,
}

impl Strategy {
    /// Strategy used for a board of the given size.
    pub fn for_size(size: usize) -> Self {
        if size == CLASSIC_SIZE {
            Strategy::Minimax
        } else {
            Strategy::Heuristic
        }
    }
}

/// Chooses the square the AI plays next.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    match Strategy::for_size(board.size()) {
        Strategy::Minimax => minimax::best_move(board),
        Strategy::Heuristic => heuristic::best_move(board, rng),
    }
}
