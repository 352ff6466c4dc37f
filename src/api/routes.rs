use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    courses::{add_holes, create_course, get_hole, list_holes},
    leaderboard::get_leaderboard,
    players::{create_player, list_players, update_player},
    scores::save_scores,
    settings::{get_settings, update_settings},
    tournaments::{complete_tournament, create_tournament, register_player, update_paid},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/leaderboard/:tournament_id", get(get_leaderboard))
        .route("/api/courses", post(create_course))
        .route("/api/courses/:id/holes", get(list_holes).post(add_holes))
        .route("/api/courses/:id/holes/:hole_number", get(get_hole))
        .route("/api/tournaments", post(create_tournament))
        .route("/api/tournaments/:id/players", post(register_player))
        .route("/api/tournaments/:id/players/:player_id", put(update_paid))
        .route("/api/tournaments/:id/complete", post(complete_tournament))
        .route("/api/scores", post(save_scores))
        .route("/api/users", get(list_players).post(create_player))
        .route("/api/users/:id", put(update_player))
        .route("/api/settings", get(get_settings).put(update_settings))
        .with_state(state)
}
