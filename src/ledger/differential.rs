use std::collections::BTreeMap;

use crate::domain::{PlayerId, ScoreRow};

use super::types::PlayerDifferential;

/// Sums raw strokes minus quota points per player, ordered by player id.
///
/// This is not the leaderboard over/under, which compares quota points
/// against the player's quota baseline.
pub fn quota_differentials(rows: &[ScoreRow]) -> Vec<PlayerDifferential> {
    let mut totals: BTreeMap<PlayerId, i32> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.player_id).or_insert(0) += row.score - row.quota;
    }

    totals
        .into_iter()
        .map(|(player_id, total)| PlayerDifferential { player_id, total })
        .collect()
}
