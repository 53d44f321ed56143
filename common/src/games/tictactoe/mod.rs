pub mod board;
pub mod bot_controller;
pub mod session;
pub mod validate;
pub mod win_detector;

pub use board::{BOARD_CELLS, Board, Mark};
pub use bot_controller::select_move;
pub use session::{TurnOutcome, play_turn};
pub use win_detector::{MoveOutcome, WIN_LINES, evaluate};
