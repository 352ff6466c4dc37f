use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{HoleId, PlayerId, ScoreRow};

use super::types::PlayerAggregate;

/// Sums quota points and strokes per player, ordered best over/under first.
///
/// Only players with at least one row appear. Equal over/under values are
/// ordered by name, ignoring case, so the output is stable between calls.
pub fn aggregate_players(rows: &[ScoreRow]) -> Vec<PlayerAggregate> {
    let mut totals: BTreeMap<PlayerId, (PlayerAggregate, BTreeSet<HoleId>)> = BTreeMap::new();

    for row in rows {
        let (aggregate, holes) = totals
            .entry(row.player_id)
            .or_insert_with(|| (empty_aggregate(row), BTreeSet::new()));

        aggregate.total_quota_points += row.quota;
        aggregate.total_strokes += row.score;
        holes.insert(row.hole_id);
    }

    let mut aggregates: Vec<PlayerAggregate> = totals
        .into_values()
        .map(|(mut aggregate, holes)| {
            aggregate.holes_played = holes.len();
            aggregate
        })
        .collect();

    sort_by_over_under(&mut aggregates);
    aggregates
}

fn empty_aggregate(row: &ScoreRow) -> PlayerAggregate {
    PlayerAggregate {
        player_id: row.player_id,
        name: row.player_name.clone(),
        email: row.player_email.clone(),
        player_quota: row.player_quota,
        total_quota_points: 0,
        holes_played: 0,
        total_strokes: 0,
    }
}

fn sort_by_over_under(aggregates: &mut [PlayerAggregate]) {
    aggregates.sort_by(|a, b| {
        b.over_under()
            .cmp(&a.over_under())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
}
