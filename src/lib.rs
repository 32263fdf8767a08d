//! Tic-tac-toe server library - an AI opponent behind a JSON endpoint
//!
//! The server receives the board after the human's move, answers with
//! one AI move and reports whether the game is over.
//!
//! # Architecture
//!
//! - **Games**: board types, win/draw rules and move selection
//! - **Server**: axum router for `POST /play` with permissive CORS
//! - **Config**: TOML + environment configuration for the server
//!
//! # Example
//!
//! ```
//! use tictactoe_server::{GameState, GameStatus, Player, Square, play_turn};
//!
//! let mut board = vec![Square::Empty; 9];
//! board[0] = Square::Occupied(Player::X);
//! board[1] = Square::Occupied(Player::X);
//!
//! let result = play_turn(GameState::new(board, 3), &mut rand::thread_rng()).unwrap();
//! assert_eq!(result.board[2], Square::Occupied(Player::O));
//! assert_eq!(result.winner, GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod server;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Server
pub use server::{ApiError, AppState, router, serve};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, BoardError, CLASSIC_SIZE, GameState, GameStatus, PlayError, Player, Square,
    SquareParseError, StatusParseError, play_turn, take_turn,
};

// Crate-level exports - Rules and move selection
pub use games::tictactoe::ai::{self, Strategy, select_move};
pub use games::tictactoe::rules::{self, Line, check_winner, has_won, is_draw, is_full};
