use serde::{Deserialize, Serialize};

use crate::domain::{Hole, NewScore, PlayerId};

#[derive(Deserialize)]
pub struct ScoreBatch {
    pub scores: Vec<NewScore>,
}

#[derive(Deserialize)]
pub struct HoleBatch {
    pub holes: Vec<Hole>,
}

#[derive(Deserialize)]
pub struct Registration {
    pub player_id: PlayerId,
    #[serde(default)]
    pub paid: bool,
}

#[derive(Deserialize)]
pub struct PaidUpdate {
    pub paid: bool,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct SavedScoresResponse {
    pub message: String,
    pub saved: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    pub message: String,
    pub players_updated: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
