use super::board::{Board, Mark, is_board_full};

/// The eight winning triples in row-major scan order: rows, columns,
/// diagonals. The scan order is observable (first matching line wins on a
/// malformed two-winner board) and tests rely on it.
pub const WIN_LINES: [(usize, usize, usize); 8] = [
    (0, 1, 2),
    (3, 4, 5),
    (6, 7, 8),
    (0, 3, 6),
    (1, 4, 7),
    (2, 5, 8),
    (0, 4, 8),
    (2, 4, 6),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Ongoing,
    Draw,
    Win(Mark),
}

pub fn evaluate(board: &Board) -> MoveOutcome {
    for &(a, b, c) in &WIN_LINES {
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            return MoveOutcome::Win(mark);
        }
    }

    if is_board_full(board) {
        MoveOutcome::Draw
    } else {
        MoveOutcome::Ongoing
    }
}
