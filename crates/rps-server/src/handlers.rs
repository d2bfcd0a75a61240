//! HTTP API handlers.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use rps_core::{DetailedSummary, Move, Outcome, OutcomeCounts, Round, SessionId};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the opaque session token
pub const SESSION_HEADER: &str = "x-session-id";

// ============ Request/Response types ============

#[derive(Serialize)]
pub struct PlayResponse {
    pub session_id: SessionId,
    pub player_move: Move,
    pub opponent_move: Move,
    pub result: Outcome,
    pub statistics: OutcomeCounts,
}

impl PlayResponse {
    fn new(session_id: SessionId, round: Round) -> Self {
        Self {
            session_id,
            player_move: round.player_move,
            opponent_move: round.opponent_move,
            result: round.outcome,
            statistics: round.counts,
        }
    }
}

fn session_from_header(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(SessionId::from)
}

// ============ Game handlers ============

pub async fn play(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(move_name): Path<String>,
) -> Result<Response, AppError> {
    let session_id = session_from_header(&headers).unwrap_or_else(|| {
        let id = SessionId::random();
        tracing::debug!("Minted session {}", id);
        id
    });

    let round = state.play(&session_id, &move_name)?;

    let header = HeaderValue::from_str(session_id.as_str()).ok();
    let mut response = Json(PlayResponse::new(session_id, round)).into_response();
    if let Some(value) = header {
        response.headers_mut().insert(SESSION_HEADER, value);
    }
    Ok(response)
}

pub async fn stop(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DetailedSummary>, AppError> {
    let session_id = session_from_header(&headers).ok_or(AppError::MissingSession)?;
    Ok(Json(state.stop(&session_id)))
}

pub async fn health() -> &'static str {
    "ok"
}
