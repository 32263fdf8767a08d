//! One request-sized turn: check the human's move, answer it, report the outcome.

use super::ai::select_move;
use super::rules::{has_won, is_full};
use super::types::{Board, BoardError, GameState, GameStatus, Player};
use derive_more::{Display, Error, From};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Errors that can occur when playing a turn.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum PlayError {
    /// Board cells do not match the declared size.
    #[display("Board size and board length do not match: {}", _0)]
    Board(BoardError),
}

/// Plays the AI's reply to a client-supplied state.
///
/// The cells are validated against `board_size` first. The returned state
/// carries the updated board and the outcome.
#[instrument(skip(state, rng), fields(board_size = state.board_size, len = state.board.len()))]
pub fn play_turn<R: Rng + ?Sized>(state: GameState, rng: &mut R) -> Result<GameState, PlayError> {
    let mut board = state.to_board()?;
    let winner = take_turn(&mut board, rng);
    let board_size = board.size();
    Ok(GameState {
        board: board.into_squares(),
        board_size,
        winner,
    })
}

/// Answers the human's last move on `board` in place.
///
/// A board the human already won or filled is returned untouched.
/// Otherwise the AI places exactly one mark.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn take_turn<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> GameStatus {
    if has_won(board, Player::HUMAN) {
        info!("Human already owns a line");
        return GameStatus::Won(Player::HUMAN);
    }
    if is_full(board) {
        info!("Board full before AI move");
        return GameStatus::Draw;
    }

    if let Some(pos) = select_move(board, rng)
        && board.is_empty(pos)
    {
        debug!(pos, "AI places mark");
        board.place(pos, Player::AI);
    }

    let status = if has_won(board, Player::AI) {
        GameStatus::Won(Player::AI)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };
    info!(?status, "Turn complete");
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state_from(size: usize, cells: &str) -> GameState {
        let squares = cells
            .chars()
            .map(|c| match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            })
            .collect();
        GameState::new(squares, size)
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = play_turn(state_from(4, "........."), &mut rng).unwrap_err();
        assert!(matches!(err, PlayError::Board(BoardError::SizeMismatch { .. })));
    }

    #[test]
    fn test_rejects_zero_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = play_turn(state_from(0, ""), &mut rng).unwrap_err();
        assert_eq!(err, PlayError::Board(BoardError::ZeroSize));
    }

    #[test]
    fn test_human_win_leaves_board() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let state = state_from(3, "XXXOO....");
        let result = play_turn(state.clone(), &mut rng).unwrap();
        assert_eq!(result.winner, GameStatus::Won(Player::X));
        assert_eq!(result.board, state.board);
    }

    #[test]
    fn test_single_empty_square_filled_then_draw() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // X O X / X O O / O X _  -> O at 8 fills the board without a line.
        let result = play_turn(state_from(3, "XOXXOOOX."), &mut rng).unwrap();
        assert_eq!(result.board[8], Square::Occupied(Player::O));
        assert_eq!(result.winner, GameStatus::Draw);
    }

    #[test]
    fn test_one_by_one_board() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = play_turn(state_from(1, "."), &mut rng).unwrap();
        assert_eq!(result.board, vec![Square::Occupied(Player::O)]);
        assert_eq!(result.winner, GameStatus::Won(Player::O));
    }
}
