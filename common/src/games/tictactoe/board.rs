use serde::{Deserialize, Serialize};

pub const BOARD_CELLS: usize = 9;

/// Row-major 3x3 board snapshot. The fixed-size array enforces the
/// nine-cell invariant once a request has passed validation.
pub type Board = [Mark; BOARD_CELLS];

/// Cell value. Serializes to the wire strings `""`, `"X"`, `"O"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    #[serde(rename = "")]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

pub fn get_available_cells(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    if index >= BOARD_CELLS {
        return false;
    }
    board[index] == Mark::Empty
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_nine_available_cells() {
        let board = empty_board();
        assert_eq!(get_available_cells(&board), (0..9).collect::<Vec<_>>());
        assert!(!is_board_full(&board));
    }

    #[test]
    fn test_available_cells_skip_marked_cells() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[4] = Mark::O;

        let available = get_available_cells(&board);
        assert_eq!(available.len(), 7);
        assert!(!available.contains(&0));
        assert!(!available.contains(&4));
    }

    #[test]
    fn test_is_valid_move_rejects_occupied_and_out_of_range() {
        let mut board = empty_board();
        board[8] = Mark::O;

        assert!(is_valid_move(&board, 0));
        assert!(!is_valid_move(&board, 8));
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_full_board_is_detected() {
        let board = [Mark::X; BOARD_CELLS];
        assert!(is_board_full(&board));
        assert!(get_available_cells(&board).is_empty());
    }

    #[test]
    fn test_mark_opponent_swaps_players() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_mark_wire_format() {
        assert_eq!(serde_json::to_string(&Mark::X).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&Mark::O).unwrap(), "\"O\"");
        assert_eq!(serde_json::to_string(&Mark::Empty).unwrap(), "\"\"");

        let parsed: Vec<Mark> = serde_json::from_str(r#"["", "X", "O"]"#).unwrap();
        assert_eq!(parsed, vec![Mark::Empty, Mark::X, Mark::O]);
        assert!(serde_json::from_str::<Mark>("\"Z\"").is_err());
    }
}
