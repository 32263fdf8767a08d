//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state.
//! A single line scanner covers every board size, so the 3×3 game
//! and the larger variants share the same win predicate.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, has_won};

pub(crate) use draw::no_empty_square;
pub(crate) use win::owns_line;
