//! Exhaustive minimax search for the classic 3×3 game.

use super::super::rules::{no_empty_square, owns_line};
use super::super::{Board, Player, Square};
use tracing::{debug, instrument};

/// Score awarded for a win before the depth discount.
const WIN_SCORE: i32 = 10;

/// Picks the AI move with the best minimax score.
///
/// Empty squares are scored in ascending index order and only a strictly
/// better score replaces the current pick, so ties go to the lowest index.
/// Returns `None` when the board has no empty square.
///
/// The search is exhaustive. It is only practical on the 3×3 board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn best_move(board: &Board) -> Option<usize> {
    let mut scratch = board.clone();
    let mut best: Option<(usize, i32)> = None;

    for pos in board.empty_positions() {
        scratch.place(pos, Player::AI);
        let score = minimax(&mut scratch, 0, false);
        scratch.clear(pos);

        debug!(pos, score, "Scored candidate move");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos)
}

/// Scores `board` with the AI maximizing and the human minimizing.
///
/// AI wins score `10 - depth`, human wins `depth - 10`, draws `0`.
fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    if owns_line(board, Player::AI) {
        return WIN_SCORE - depth;
    }
    if owns_line(board, Player::HUMAN) {
        return depth - WIN_SCORE;
    }
    if no_empty_square(board) {
        return 0;
    }

    let (mover, mut best) = if maximizing {
        (Player::AI, i32::MIN)
    } else {
        (Player::HUMAN, i32::MAX)
    };

    for pos in 0..board.cell_count() {
        if board.get(pos) != Some(Square::Empty) {
            continue;
        }
        board.place(pos, mover);
        let score = minimax(board, depth + 1, !maximizing);
        board.clear(pos);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
