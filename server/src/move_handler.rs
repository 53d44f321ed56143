use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use common::games::tictactoe::{Board, Mark, MoveOutcome, TurnOutcome, play_turn, validate};
use common::log;

use crate::web_server::WebServerState;

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub board: Vec<Mark>,
    pub player: Mark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Win,
    Draw,
}

/// Wire response. `ai_move` is `-1` when the bot made no move, either
/// because the submitted board was already terminal or because it was full.
#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub ai_move: i32,
    pub board: Board,
    pub status: GameStatus,
    pub winner: Option<Mark>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn handle_move(
    State(state): State<WebServerState>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, (StatusCode, Json<ErrorResponse>)> {
    let board = validate::to_board(&request.board).map_err(bad_request)?;
    validate::validate_player(request.player).map_err(bad_request)?;

    let mut rng = state.rng.lock().await;
    let turn = play_turn(board, request.player, &mut rng).map_err(internal_error)?;
    drop(rng);

    let response = build_response(&turn);
    log!(
        "Move handled: player {:?}, ai_move {}, status {:?}",
        request.player,
        response.ai_move,
        response.status
    );

    Ok(Json(response))
}

fn build_response(turn: &TurnOutcome) -> MoveResponse {
    let (status, winner) = match turn.outcome {
        MoveOutcome::Ongoing => (GameStatus::Ongoing, None),
        MoveOutcome::Draw => (GameStatus::Draw, None),
        MoveOutcome::Win(mark) => (GameStatus::Win, Some(mark)),
    };

    MoveResponse {
        ai_move: turn.bot_move.map_or(-1, |index| index as i32),
        board: turn.board,
        status,
        winner,
    }
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

fn internal_error(message: String) -> (StatusCode, Json<ErrorResponse>) {
    log!("Internal invariant violation: {}", message);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
}
