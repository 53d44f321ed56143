use super::board::{BOARD_CELLS, Board, Mark};

/// Checks the submitted cell list against the nine-cell board shape.
/// Symbol validity is already enforced by `Mark` deserialization.
pub fn to_board(cells: &[Mark]) -> Result<Board, String> {
    if cells.len() != BOARD_CELLS {
        return Err(format!(
            "Board must have exactly {} cells, got {}",
            BOARD_CELLS,
            cells.len()
        ));
    }

    let mut board = [Mark::Empty; BOARD_CELLS];
    board.copy_from_slice(cells);
    Ok(board)
}

pub fn validate_player(mark: Mark) -> Result<(), String> {
    if mark == Mark::Empty {
        return Err("Player must be X or O".to_string());
    }
    Ok(())
}
