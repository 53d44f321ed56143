use super::board::{Board, Mark, is_valid_move};
use super::bot_controller::select_move;
use super::win_detector::{MoveOutcome, evaluate};
use crate::games::session_rng::SessionRng;

/// Result of one request/response cycle: the bot's move (if it made one),
/// the resulting board snapshot, and the outcome after that move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub bot_move: Option<usize>,
    pub board: Board,
    pub outcome: MoveOutcome,
}

/// Runs one bot turn against the submitted board. The board is evaluated
/// first; a terminal board is reported unchanged and the selector is never
/// invoked. There is no server-side game state, each call carries the
/// complete snapshot.
pub fn play_turn(
    mut board: Board,
    player_mark: Mark,
    rng: &mut SessionRng,
) -> Result<TurnOutcome, String> {
    let bot_mark = player_mark
        .opponent()
        .ok_or_else(|| "Player mark must be X or O".to_string())?;

    let outcome = evaluate(&board);
    if outcome != MoveOutcome::Ongoing {
        return Ok(TurnOutcome {
            bot_move: None,
            board,
            outcome,
        });
    }

    let Some(index) = select_move(&board, bot_mark, player_mark, rng) else {
        // Unreachable from an ongoing board, kept for malformed input.
        return Ok(TurnOutcome {
            bot_move: None,
            board,
            outcome: MoveOutcome::Draw,
        });
    };

    if is_valid_move(&board, index) {
        board[index] = bot_mark;
    }

    Ok(TurnOutcome {
        bot_move: Some(index),
        board,
        outcome: evaluate(&board),
    })
}
