use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::database;
use crate::domain::{NewPlayer, PlayerId, PlayerPatch};
use crate::errors::LeagueError;

use super::{error_response, AppState};

pub async fn list_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = match database::get_connection(state.store.pool()) {
        Ok(conn) => conn,
        Err(e) => return error_response(e.into()),
    };

    match database::players::list_active(&conn) {
        Ok(players) => Json(players).into_response(),
        Err(e) => error_response(e.into()),
    }
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(player): Json<NewPlayer>,
) -> impl IntoResponse {
    if player.name.trim().is_empty() || player.email.trim().is_empty() {
        return error_response(LeagueError::precondition("Name and email are required"));
    }

    let conn = match database::get_connection(state.store.pool()) {
        Ok(conn) => conn,
        Err(e) => return error_response(e.into()),
    };

    match database::players::insert_player(&conn, &player) {
        Ok(player) => (StatusCode::CREATED, Json(player)).into_response(),
        Err(e) => error_response(LeagueError::from_write(
            e,
            format!("Email {} is already in use", player.email),
        )),
    }
}

pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
    Json(patch): Json<PlayerPatch>,
) -> impl IntoResponse {
    if patch.is_empty() {
        return error_response(LeagueError::precondition("No fields to update"));
    }

    let conn = match database::get_connection(state.store.pool()) {
        Ok(conn) => conn,
        Err(e) => return error_response(e.into()),
    };

    match database::players::apply_patch(&conn, player_id, &patch) {
        Ok(Some(player)) => Json(player).into_response(),
        Ok(None) => error_response(LeagueError::not_found(format!("Player {}", player_id))),
        Err(e) => error_response(LeagueError::from_write(e, "Email is already in use")),
    }
}
