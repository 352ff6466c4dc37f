use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{CompletionResponse, MessageResponse, PaidUpdate, Registration};
use crate::domain::{NewTournament, PlayerId, TournamentId};
use crate::services::{CompletionService, TournamentService};

use super::{error_response, AppState};

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewTournament>,
) -> impl IntoResponse {
    let service = TournamentService::new(state.store.pool().clone());

    match service.create_tournament(&new) {
        Ok(tournament) => (StatusCode::CREATED, Json(tournament)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
    Json(registration): Json<Registration>,
) -> impl IntoResponse {
    let service = TournamentService::new(state.store.pool().clone());

    match service.register_player(tournament_id, registration.player_id, registration.paid) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Player registered".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_paid(
    State(state): State<Arc<AppState>>,
    Path((tournament_id, player_id)): Path<(TournamentId, PlayerId)>,
    Json(update): Json<PaidUpdate>,
) -> impl IntoResponse {
    let service = TournamentService::new(state.store.pool().clone());

    match service.set_paid(tournament_id, player_id, update.paid) {
        Ok(()) => Json(MessageResponse {
            message: "Payment status updated".to_string(),
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn complete_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
) -> impl IntoResponse {
    let service = CompletionService::new(&state.store);

    match service.complete_tournament(tournament_id) {
        Ok(summary) => Json(CompletionResponse {
            message: "Tournament completed successfully".to_string(),
            players_updated: summary.players_updated,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}
