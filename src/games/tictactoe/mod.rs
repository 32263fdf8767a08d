//! Tic-tac-toe on N×N boards against a computer opponent.

pub mod ai;
mod game;
pub mod rules;
mod types;

pub use game::{PlayError, play_turn, take_turn};
pub use types::{
    Board, BoardError, CLASSIC_SIZE, GameState, GameStatus, Player, Square, SquareParseError,
    StatusParseError,
};
