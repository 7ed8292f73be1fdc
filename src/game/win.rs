//! Alignment detection around the most recently placed token.
//!
//! Every earlier drop was already checked and found non-winning, so any new
//! alignment must pass through the last cell. Each of the four lines through
//! that cell is walked over offsets `-(N-1)..=(N-1)`, which covers every
//! window of length `N` containing it and nothing else.

use super::board::{Board, Position};
use super::Player;

/// A line through a cell, as a unit step `(dx, dy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right.
    RisingDiagonal,
    /// Top-left to bottom-right.
    FallingDiagonal,
}

impl Direction {
    /// Evaluation order. The first alignment found in this order is the one
    /// reported.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::RisingDiagonal,
        Direction::FallingDiagonal,
    ];

    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::RisingDiagonal => (1, 1),
            Direction::FallingDiagonal => (1, -1),
        }
    }
}

/// Check whether `player` owns an alignment of `win_length` cells through
/// `(last_x, last_y)`. Returns the winning cells in scan order.
pub fn check_win(
    board: &Board,
    last_x: usize,
    last_y: usize,
    player: Player,
    win_length: usize,
) -> Option<Vec<Position>> {
    if win_length == 0 || board.cell_at(last_x, last_y).ok()? != player.to_cell() {
        return None;
    }

    Direction::ALL
        .iter()
        .find_map(|&dir| check_line(board, last_x, last_y, player, win_length, dir))
}

/// Scan one line through the reference cell for `win_length` consecutive
/// cells owned by `player`.
pub fn check_line(
    board: &Board,
    last_x: usize,
    last_y: usize,
    player: Player,
    win_length: usize,
    dir: Direction,
) -> Option<Vec<Position>> {
    let (dx, dy) = dir.step();
    let target = player.to_cell();
    let reach = win_length as isize - 1;
    let mut run: Vec<Position> = Vec::with_capacity(win_length);

    for i in -reach..=reach {
        let x = last_x as isize + i * dx;
        let y = last_y as isize + i * dy;

        if board.get_signed(x, y) == Some(target) {
            run.push(Position::new(x as usize, y as usize));
            if run.len() == win_length {
                return Some(run);
            }
        } else {
            run.clear();
        }
    }

    None
}
