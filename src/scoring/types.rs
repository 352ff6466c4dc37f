use serde::Serialize;

use crate::domain::PlayerId;

/// Per-player totals for one tournament, before ranking
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAggregate {
    pub player_id: PlayerId,
    pub name: String,
    pub email: String,
    pub player_quota: i32,
    pub total_quota_points: i32,
    pub holes_played: usize,
    pub total_strokes: i32,
}

impl PlayerAggregate {
    pub fn over_under(&self) -> i32 {
        self.total_quota_points - self.player_quota
    }
}

/// Rank and pooled share of the quota pot for one leaderboard position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub rank: usize,
    pub prize_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: PlayerId,
    pub name: String,
    pub email: String,
    pub player_quota: i32,
    pub total_quota_points: i32,
    pub over_under: i32,
    pub holes_played: usize,
    pub total_strokes: i32,
    pub skins: usize,
    pub skin_holes: Vec<i32>,
    pub quota_prize_money: i64,
    pub skin_prize_money: i64,
}
