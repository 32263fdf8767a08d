//! Win detection logic for N×N tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// A complete line across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Row `r`, left to right.
    Row(usize),
    /// Column `c`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Every line on a board of side `size`: rows, then columns, then diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Board indices covered by this line on a board of side `size`.
    pub fn cells(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |i| match self {
            Line::Row(r) => r * size + i,
            Line::Column(c) => i * size + c,
            Line::Diagonal => i * size + i,
            Line::AntiDiagonal => i * size + (size - 1 - i),
        })
    }
}

/// Checks whether `player` owns a complete row, column or diagonal.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_won(board: &Board, player: Player) -> bool {
    owns_line(board, player)
}

/// Line scan behind [`has_won`], without a span, for use inside search loops.
pub(crate) fn owns_line(board: &Board, player: Player) -> bool {
    let size = board.size();
    let mark = Square::Occupied(player);
    Line::all(size).any(|line| line.cells(size).all(|pos| board.get(pos) == Some(mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has a complete line,
/// `None` otherwise. X is checked first.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_won(board, player))
}
