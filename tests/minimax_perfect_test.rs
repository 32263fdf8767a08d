//! Tests verifying the 3×3 search never loses.
//!
//! Every human strategy is enumerated: at each human turn all empty squares
//! are tried, at each AI turn the searched move is played.

use tictactoe_server::ai::minimax;
use tictactoe_server::{Board, Player, Square, has_won, is_full};

/// Walks every line of play from `board`, returning the number of finished games.
fn explore(board: &Board, human_to_move: bool) -> usize {
    assert!(
        !has_won(board, Player::HUMAN),
        "AI lost on board:\n{}",
        board.display()
    );
    if has_won(board, Player::AI) || is_full(board) {
        return 1;
    }

    if human_to_move {
        board
            .empty_positions()
            .into_iter()
            .map(|pos| {
                let mut next = board.clone();
                next.set(pos, Square::Occupied(Player::HUMAN)).unwrap();
                explore(&next, false)
            })
            .sum()
    } else {
        let pos = minimax::best_move(board).expect("non-full board has a move");
        assert!(board.is_empty(pos), "AI chose occupied square {pos}");
        let mut next = board.clone();
        next.set(pos, Square::Occupied(Player::AI)).unwrap();
        explore(&next, true)
    }
}

#[test]
fn test_never_loses_moving_second() {
    let games = explore(&Board::default(), true);
    assert!(games > 0);
}

#[test]
fn test_never_loses_moving_first() {
    let games = explore(&Board::default(), false);
    assert!(games > 0);
}

#[test]
fn test_prefers_faster_win() {
    // O can win immediately at 2 or set up a later win; the immediate one scores higher.
    let mut board = Board::default();
    for (pos, player) in [(0, Player::O), (1, Player::O), (3, Player::X), (4, Player::X)] {
        board.set(pos, Square::Occupied(player)).unwrap();
    }
    assert_eq!(minimax::best_move(&board), Some(2));
}
