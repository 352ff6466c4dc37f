use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::domain::TournamentId;
use crate::services::LeaderboardService;

use super::{error_response, AppState};

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> impl IntoResponse {
    let service = LeaderboardService::new(&state.store, state.config.prizes.clone());

    match service.compute_leaderboard(tournament_id) {
        Ok(board) => Json(board).into_response(),
        Err(e) => error_response(e),
    }
}
