//! HTTP surface of the leaderboard
//!
//! Transport-free: the host hands over method, path and body and writes the
//! returned status and body back out.
//!
//! - `GET /health-check` → 200
//! - `GET /leaderboard` → JSON array, highest score first
//! - `POST /leaderboard/scores` with `{name, score}` → 200, or 400 when invalid

use super::{Leaderboard, ScoreSubmission};
use crate::error::ValidationError;

pub const HEALTH_CHECK: &str = "/health-check";
pub const LEADERBOARD: &str = "/leaderboard";
pub const SCORES: &str = "/leaderboard/scores";

/// A response ready to be written by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    /// Plain-text response carrying the status reason
    pub fn status(status: u16) -> Self {
        let reason = match status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Internal Server Error",
        };
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: reason.to_string(),
        }
    }

    pub fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Route one request
pub fn handle(board: &mut Leaderboard, method: &str, path: &str, body: &str) -> Response {
    let path = path.split('?').next().unwrap_or(path);
    match (method, path) {
        ("GET", HEALTH_CHECK) => Response::status(200),
        ("GET", LEADERBOARD) => list_scores(board),
        ("POST", SCORES) => submit_score(board, body),
        (_, HEALTH_CHECK | LEADERBOARD | SCORES) => Response::status(405),
        _ => Response::status(404),
    }
}

fn list_scores(board: &Leaderboard) -> Response {
    match board.to_json() {
        Ok(body) => Response::json(body),
        Err(e) => {
            log::error!("Failed to serialize leaderboard: {e}");
            Response::status(500)
        }
    }
}

fn submit_score(board: &mut Leaderboard, body: &str) -> Response {
    log::info!("Score submission: {body}");
    let result = serde_json::from_str::<ScoreSubmission>(body)
        .map_err(|e| ValidationError::MalformedBody(e.to_string()))
        .and_then(|submission| board.append(&submission));

    match result {
        Ok(_) => Response::status(200),
        Err(e) => {
            log::error!("Rejected score submission: {e}");
            Response::status(400)
        }
    }
}
