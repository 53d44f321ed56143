use super::board::{Board, Mark, is_valid_move};
use super::win_detector::WIN_LINES;
use crate::games::session_rng::SessionRng;

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Index of the empty cell completing a win for `mark`, if any line holds
/// two of `mark` and one empty cell. Lines are scanned in WIN_LINES order
/// and the first hit is returned.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    for &(a, b, c) in &WIN_LINES {
        let line = [board[a], board[b], board[c]];
        let mark_count = line.iter().filter(|&&cell| cell == mark).count();
        if mark_count != 2 {
            continue;
        }
        if let Some(slot) = line.iter().position(|&cell| cell == Mark::Empty) {
            return Some([a, b, c][slot]);
        }
    }
    None
}

/// Picks the bot's next cell by fixed rule priority: win now, block the
/// player, take the center, then a random free corner, then a random free
/// edge. Returns `None` only when the board is full.
pub fn select_move(
    board: &Board,
    bot_mark: Mark,
    player_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    if let Some(index) = find_winning_move(board, bot_mark) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, player_mark) {
        return Some(index);
    }

    if is_valid_move(board, CENTER) {
        return Some(CENTER);
    }

    let free_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| is_valid_move(board, index))
        .collect();
    if let Some(index) = rng.choose(&free_corners) {
        return Some(index);
    }

    let free_edges: Vec<usize> = EDGES
        .iter()
        .copied()
        .filter(|&index| is_valid_move(board, index))
        .collect();
    rng.choose(&free_edges)
}
