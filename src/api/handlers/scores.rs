use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{SavedScoresResponse, ScoreBatch};
use crate::services::ScoreEntryService;

use super::{error_response, AppState};

pub async fn save_scores(
    State(state): State<Arc<AppState>>,
    Json(batch): Json<ScoreBatch>,
) -> impl IntoResponse {
    let service = ScoreEntryService::new(state.store.pool().clone());

    match service.record_scores(&batch.scores) {
        Ok(saved) => (
            StatusCode::CREATED,
            Json(SavedScoresResponse {
                message: "Scores saved successfully".to_string(),
                saved,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
