//! The HTTP surface the game client talks to. Routes mirror the game's
//! client expectations: game-state fetch/update, level completion,
//! certificate generation, and the simulated code execution endpoint.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::{
    constants::{LEVEL_TITLES, MAX_STARS, MIN_STARS, REQUIRED_LEVELS},
    grade,
    grade::Verdict,
    storage::Storage,
    types::{
        Achievement, Certificate, CertificateData, GameState, GameStatePatch, LevelProgressPatch,
        LevelResult,
    },
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Progress store.
    storage:        Arc<Storage>,
    /// Player id used when a request does not name one.
    default_player: i64,
}

/// Errors surfaced to the client by the API handlers.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Star award outside the accepted range.
    #[error("stars must be between 1 and 3")]
    InvalidStars,
    /// Certificate requested with a blank student name.
    #[error("studentName must not be empty")]
    EmptyStudentName,
    /// Certificate requested before finishing the game.
    #[error("All levels must be completed to generate certificate")]
    IncompleteProgress,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("request rejected: {self}");
        let status = match self {
            ApiError::InvalidStars | ApiError::EmptyStudentName | ApiError::IncompleteProgress => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Level-completion request payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompleteLevelRequest {
    /// One-based level number being completed.
    level:       i32,
    /// Stars awarded for the level (1 to 3).
    stars:       i32,
    /// Achievement earned alongside the completion, if any.
    achievement: Option<Achievement>,
}

/// Certificate-generation request payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CertificateRequest {
    /// Name to print on the certificate.
    student_name: String,
}

/// Code-submission request payload.
#[derive(Debug, Deserialize)]
struct ExecuteRequest {
    /// The learner's submission text.
    code: String,
}

/// Builds the application router over the given store.
pub fn router(storage: Arc<Storage>, default_player: i64) -> Router {
    Router::new()
        .route("/api/game-state", get(get_game_state).post(save_game_state))
        .route("/api/complete-level", post(complete_level))
        .route("/api/generate-certificate", post(generate_certificate))
        .route("/api/execute-python", post(execute_python))
        .with_state(AppState {
            storage,
            default_player,
        })
}

/// Binds the API to `host:port` and serves it until the process exits.
pub async fn serve(host: &str, port: u16, default_player: i64) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    tracing::info!("Kody API listening on {addr}");

    let app = router(Arc::new(Storage::new()), default_player);
    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}

/// Resolves the player a request acts for: the `x-player` header when it
/// carries an integer id, otherwise the configured default.
fn player_for(headers: &HeaderMap, state: &AppState) -> i64 {
    headers
        .get("x-player")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(state.default_player)
}

/// `GET /api/game-state` — the player's aggregate state, with defaults for
/// players the store has never seen.
async fn get_game_state(State(state): State<AppState>, headers: HeaderMap) -> Json<GameState> {
    let player = player_for(&headers, &state);
    Json(state.storage.game_state(player))
}

/// `POST /api/game-state` — partial update; returns the updated state.
async fn save_game_state(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(patch): Json<GameStatePatch>,
) -> Json<GameState> {
    let player = player_for(&headers, &state);
    state.storage.save_game_state(player, patch);
    Json(state.storage.game_state(player))
}

/// `POST /api/complete-level` — records a completion with its star award
/// and optional achievement, then returns the advanced state.
async fn complete_level(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CompleteLevelRequest>,
) -> Result<Json<GameState>, ApiError> {
    if !(MIN_STARS..=MAX_STARS).contains(&request.stars) {
        return Err(ApiError::InvalidStars);
    }

    let player = player_for(&headers, &state);
    state
        .storage
        .update_level_progress(player, request.level, LevelProgressPatch {
            completed: Some(true),
            stars:     Some(request.stars),
        });

    let current = state.storage.game_state(player);

    let mut completed_levels = current.completed_levels;
    if !completed_levels.contains(&request.level) {
        completed_levels.push(request.level);
    }

    let mut achievements = current.achievements;
    let mut badges = current.badges;
    if let Some(achievement) = request.achievement {
        if !achievements.iter().any(|known| known.id == achievement.id) {
            achievements.push(achievement.clone());
        }
        badges.push(achievement.title);
    }

    state.storage.save_game_state(player, GameStatePatch {
        current_level:    Some(current.current_level.max(request.level + 1)),
        completed_levels: Some(completed_levels),
        total_stars:      Some(current.total_stars + request.stars),
        badges:           Some(badges),
        achievements:     Some(achievements),
    });

    Ok(Json(state.storage.game_state(player)))
}

/// `POST /api/generate-certificate` — issues a certificate once every level
/// is complete, embedding the per-level star summary.
async fn generate_certificate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CertificateRequest>,
) -> Result<Json<Certificate>, ApiError> {
    if request.student_name.trim().is_empty() {
        return Err(ApiError::EmptyStudentName);
    }

    let player = player_for(&headers, &state);
    let game_state = state.storage.game_state(player);
    if game_state.completed_levels.len() < REQUIRED_LEVELS {
        return Err(ApiError::IncompleteProgress);
    }

    let level_progress = state.storage.level_progress(player);
    let levels = LEVEL_TITLES
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            let level = idx as i32 + 1;
            LevelResult {
                level,
                title: (*title).to_string(),
                completed: true,
                stars: level_progress
                    .iter()
                    .find(|record| record.level == level)
                    .map(|record| record.stars)
                    .unwrap_or(0),
            }
        })
        .collect();

    let certificate_data = CertificateData {
        student_name: request.student_name.clone(),
        completion_date: Utc::now().to_rfc3339(),
        levels,
        total_stars: game_state.total_stars,
        badges: game_state.badges,
    };

    let certificate =
        state
            .storage
            .create_certificate(player, request.student_name, certificate_data);
    Ok(Json(certificate))
}

/// `POST /api/execute-python` — classifies the submission against the
/// exercise catalog and returns the verdict. Malformed payloads never reach
/// the grader; the JSON extractor rejects them first.
async fn execute_python(Json(request): Json<ExecuteRequest>) -> Json<Verdict> {
    Json(grade::grade(&request.code))
}
