use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::models::ErrorResponse;
use crate::config::settings::AppConfig;
use crate::database::SqliteStore;
use crate::errors::LeagueError;

pub mod courses;
pub mod leaderboard;
pub mod players;
pub mod scores;
pub mod settings;
pub mod tournaments;

pub struct AppState {
    pub store: SqliteStore,
    pub config: AppConfig,
}

pub fn error_response(err: LeagueError) -> Response {
    let status = match &err {
        LeagueError::NotFound(_) => StatusCode::NOT_FOUND,
        LeagueError::PreconditionFailed(_) => StatusCode::BAD_REQUEST,
        LeagueError::Storage(e) => {
            log::error!("Storage failure: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let error = match err {
        LeagueError::Storage(_) => "Database error".to_string(),
        other => other.to_string(),
    };
    (status, Json(ErrorResponse { error })).into_response()
}
