//! Core domain types for N×N tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board size played with exhaustive search.
pub const CLASSIC_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player X (the human, goes first).
    X,
    /// Player O (the computer).
    O,
}

impl Player {
    /// The mark played by the human client.
    pub const HUMAN: Player = Player::X;

    /// The mark played by the server.
    pub const AI: Player = Player::O;

    /// Returns the wire symbol for this player.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A square on the board.
///
/// Serialized as `""`, `"X"` or `"O"`. A `null` cell reads as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "String")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A cell value that is neither empty nor a known mark.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown cell value {:?} (expected \"\", \"X\" or \"O\")", value)]
pub struct SquareParseError {
    /// The rejected value.
    pub value: String,
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "" => Ok(Square::Empty),
            "X" => Ok(Square::Occupied(Player::X)),
            "O" => Ok(Square::Occupied(Player::O)),
            _ => Err(SquareParseError { value }),
        }
    }
}

impl TryFrom<Option<String>> for Square {
    type Error = SquareParseError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        value.map_or(Ok(Square::Empty), <Square as TryFrom<String>>::try_from)
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        match square {
            Square::Empty => String::new(),
            Square::Occupied(player) => player.symbol().to_string(),
        }
    }
}

/// Error raised when a board cannot be built from the given cells.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Board size of zero.
    #[display("Board size must be at least 1")]
    ZeroSize,

    /// Number of cells is not `size * size`.
    #[display("Board of size {} needs {} cells, got {}", size, expected, actual)]
    SizeMismatch {
        /// Declared board size.
        size: usize,
        /// Required number of cells.
        expected: usize,
        /// Supplied number of cells.
        actual: usize,
    },
}

/// Square N×N board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Self {
            size,
            squares: vec![Square::Empty; size * size],
        })
    }

    /// Builds a board from row-major squares, checking `len == size²`.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(size: usize, squares: Vec<Square>) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        let expected = size.checked_mul(size).ok_or(BoardError::SizeMismatch {
            size,
            expected: usize::MAX,
            actual: squares.len(),
        })?;
        if squares.len() != expected {
            return Err(BoardError::SizeMismatch {
                size,
                expected,
                actual: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares on the board.
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Places a square at the given index.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), &'static str> {
        let slot = self.squares.get_mut(pos).ok_or("Position out of bounds")?;
        *slot = square;
        Ok(())
    }

    /// Marks `pos` for `player`. Callers pass in-range indices.
    pub(crate) fn place(&mut self, pos: usize, player: Player) {
        self.squares[pos] = Square::Occupied(player);
    }

    /// Empties `pos` again after a hypothetical move.
    pub(crate) fn clear(&mut self, pos: usize) {
        self.squares[pos] = Square::Empty;
    }

    /// Checks if a square is empty. Out-of-range indices are not empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Consumes the board, returning its squares.
    pub fn into_squares(self) -> Vec<Square> {
        self.squares
    }

    /// Indices of every empty square, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// The central square, `size² / 2`. Slightly off-center on even boards.
    pub fn center(&self) -> usize {
        self.squares.len() / 2
    }

    /// The four corner indices: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [usize; 4] {
        let n = self.size;
        [0, n - 1, n * (n - 1), n * n - 1]
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index so the output doubles as a move map.
    pub fn display(&self) -> String {
        let width = self.squares.len().saturating_sub(1).to_string().len();
        let separator = vec!["-".repeat(width); self.size].join("+");
        let mut result = String::new();
        for row in 0..self.size {
            let cells: Vec<String> = (0..self.size)
                .map(|col| {
                    let pos = row * self.size + col;
                    let symbol = match self.squares[pos] {
                        Square::Empty => pos.to_string(),
                        Square::Occupied(player) => player.symbol().to_string(),
                    };
                    format!("{:>width$}", symbol)
                })
                .collect();
            result.push_str(&cells.join("|"));
            if row + 1 < self.size {
                result.push('\n');
                result.push_str(&separator);
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: CLASSIC_SIZE,
            squares: vec![Square::Empty; CLASSIC_SIZE * CLASSIC_SIZE],
        }
    }
}

/// Outcome of the game after a turn.
///
/// Serialized as `""` (in progress), `"X"`, `"O"` or `"draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// A winner value that is not part of the wire vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown winner value {:?}", value)]
pub struct StatusParseError {
    /// The rejected value.
    pub value: String,
}

impl TryFrom<String> for GameStatus {
    type Error = StatusParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "" => Ok(GameStatus::InProgress),
            "X" => Ok(GameStatus::Won(Player::X)),
            "O" => Ok(GameStatus::Won(Player::O)),
            "draw" => Ok(GameStatus::Draw),
            _ => Err(StatusParseError { value }),
        }
    }
}

impl From<GameStatus> for String {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => String::new(),
            GameStatus::Won(player) => player.symbol().to_string(),
            GameStatus::Draw => "draw".to_string(),
        }
    }
}

/// Game state exchanged with the client on every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Squares in row-major order.
    pub board: Vec<Square>,
    /// Side length of the board. Omitted requests play the 3×3 game.
    #[serde(default = "default_board_size")]
    pub board_size: usize,
    /// Outcome after the turn.
    #[serde(default)]
    pub winner: GameStatus,
}

fn default_board_size() -> usize {
    CLASSIC_SIZE
}

impl GameState {
    /// Creates a state for the given cells with no outcome yet.
    pub fn new(board: Vec<Square>, board_size: usize) -> Self {
        Self {
            board,
            board_size,
            winner: GameStatus::InProgress,
        }
    }

    /// Validates the cells against the declared size and builds a board.
    #[instrument(skip(self), fields(board_size = self.board_size, len = self.board.len()))]
    pub fn to_board(&self) -> Result<Board, BoardError> {
        Board::from_squares(self.board_size, self.board.clone())
    }
}
