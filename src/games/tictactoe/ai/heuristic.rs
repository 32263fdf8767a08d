//! Rule-ordered move heuristic for boards other than 3×3.
//!
//! Full search does not scale past the classic board, so larger games use
//! a fixed priority list instead. The result is playable but not optimal.

use super::super::rules::owns_line;
use super::super::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule produced a heuristic move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Completes an AI line.
    Win,
    /// Occupies the square that would complete a human line.
    Block,
    /// Takes the central square.
    Center,
    /// Takes an empty corner.
    Corner,
    /// Any empty square, chosen uniformly.
    Random,
}

/// Picks a move by the first matching rule: win, block, center, corner, random.
///
/// Returns `None` when the board is full.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn best_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let (pos, rule) = choose(board, rng)?;
    debug!(pos, ?rule, "Heuristic move chosen");
    Some(pos)
}

/// Picks a move and reports which rule fired.
pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, Rule)> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }

    let mut scratch = board.clone();
    if let Some(pos) = completing_move(&mut scratch, &empty, Player::AI) {
        return Some((pos, Rule::Win));
    }
    if let Some(pos) = completing_move(&mut scratch, &empty, Player::HUMAN) {
        return Some((pos, Rule::Block));
    }

    let center = board.center();
    if board.is_empty(center) {
        return Some((center, Rule::Center));
    }

    let mut corners = board.corners();
    corners.shuffle(rng);
    if let Some(&corner) = corners.iter().find(|&&pos| board.is_empty(pos)) {
        return Some((corner, Rule::Corner));
    }

    let pos = empty[rng.gen_range(0..empty.len())];
    Some((pos, Rule::Random))
}

/// First empty square (scan order) that would give `player` a line.
fn completing_move(scratch: &mut Board, empty: &[usize], player: Player) -> Option<usize> {
    empty.iter().copied().find(|&pos| {
        scratch.place(pos, player);
        let wins = owns_line(scratch, player);
        scratch.clear(pos);
        wins
    })
}
