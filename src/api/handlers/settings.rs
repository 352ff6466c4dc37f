use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::database;
use crate::domain::SettingsPatch;
use crate::errors::LeagueError;

use super::{error_response, AppState};

pub async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = match database::get_connection(state.store.pool()) {
        Ok(conn) => conn,
        Err(e) => return error_response(e.into()),
    };

    match database::settings::get_settings(&conn) {
        Ok(Some(settings)) => Json(settings).into_response(),
        Ok(None) => error_response(LeagueError::not_found("Settings")),
        Err(e) => error_response(e.into()),
    }
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<SettingsPatch>,
) -> impl IntoResponse {
    if patch.is_empty() {
        return error_response(LeagueError::precondition("No settings provided to update"));
    }

    let conn = match database::get_connection(state.store.pool()) {
        Ok(conn) => conn,
        Err(e) => return error_response(e.into()),
    };

    match database::settings::apply_patch(&conn, &patch) {
        Ok(Some(settings)) => Json(settings).into_response(),
        Ok(None) => error_response(LeagueError::not_found("Settings")),
        Err(e) => error_response(e.into()),
    }
}
