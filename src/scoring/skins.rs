use std::collections::BTreeMap;

use crate::domain::{HoleId, PlayerId, ScoreRow};

/// Holes won outright, keyed by player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkinsTally {
    holes_by_player: BTreeMap<PlayerId, Vec<i32>>,
}

impl SkinsTally {
    pub fn count_for(&self, player_id: PlayerId) -> usize {
        self.holes_by_player.get(&player_id).map_or(0, Vec::len)
    }

    /// Sorted hole numbers the player won
    pub fn holes_for(&self, player_id: PlayerId) -> Vec<i32> {
        self.holes_by_player
            .get(&player_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn total_awarded(&self) -> usize {
        self.holes_by_player.values().map(Vec::len).sum()
    }
}

struct HoleScores {
    hole_number: i32,
    scores: Vec<(PlayerId, i32)>,
}

/// A skin goes to the only player holding the lowest stroke count on a hole.
pub fn award_skins(rows: &[ScoreRow]) -> SkinsTally {
    let mut tally = SkinsTally::default();

    for hole in group_by_hole(rows).into_values() {
        if let Some(winner) = sole_best(&hole.scores) {
            tally
                .holes_by_player
                .entry(winner)
                .or_default()
                .push(hole.hole_number);
        }
    }

    for holes in tally.holes_by_player.values_mut() {
        holes.sort_unstable();
    }
    tally
}

fn group_by_hole(rows: &[ScoreRow]) -> BTreeMap<HoleId, HoleScores> {
    let mut holes: BTreeMap<HoleId, HoleScores> = BTreeMap::new();
    for row in rows {
        holes
            .entry(row.hole_id)
            .or_insert_with(|| HoleScores {
                hole_number: row.hole_number,
                scores: Vec::new(),
            })
            .scores
            .push((row.player_id, row.score));
    }
    holes
}

fn sole_best(scores: &[(PlayerId, i32)]) -> Option<PlayerId> {
    let best = scores.iter().map(|(_, score)| *score).min()?;
    let mut leaders = scores.iter().filter(|(_, score)| *score == best);

    match (leaders.next(), leaders.next()) {
        (Some((player_id, _)), None) => Some(*player_id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(player_id: PlayerId, hole: i32, score: i32) -> ScoreRow {
        ScoreRow {
            player_id,
            hole_id: 500 + hole,
            hole_number: hole,
            score,
            quota: 2,
            player_name: format!("Player {}", player_id),
            player_email: String::new(),
            player_quota: 18,
        }
    }

    #[test]
    fn test_unique_low_score_wins_skin() {
        let rows = vec![row(1, 7, 3), row(2, 7, 4), row(3, 7, 5)];

        let tally = award_skins(&rows);

        assert_eq!(tally.count_for(1), 1);
        assert_eq!(tally.holes_for(1), vec![7]);
        assert_eq!(tally.count_for(2), 0);
        assert_eq!(tally.total_awarded(), 1);
    }

    #[test]
    fn test_tied_low_score_awards_nothing() {
        let rows = vec![row(1, 2, 3), row(2, 2, 3), row(3, 2, 6)];

        let tally = award_skins(&rows);

        assert_eq!(tally.total_awarded(), 0);
        assert!(tally.holes_for(1).is_empty());
        assert!(tally.holes_for(2).is_empty());
    }

    #[test]
    fn test_skin_holes_sorted_per_player() {
        let rows = vec![
            row(1, 9, 2),
            row(2, 9, 5),
            row(1, 4, 3),
            row(2, 4, 4),
            row(2, 1, 3),
            row(1, 1, 4),
        ];

        let tally = award_skins(&rows);

        assert_eq!(tally.holes_for(1), vec![4, 9]);
        assert_eq!(tally.holes_for(2), vec![1]);
        assert_eq!(tally.total_awarded(), 3);
    }

    #[test]
    fn test_single_player_on_hole_takes_skin() {
        let tally = award_skins(&[row(4, 18, 6)]);
        assert_eq!(tally.holes_for(4), vec![18]);
    }
}
