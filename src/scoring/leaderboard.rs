use crate::config::settings::PrizeSettings;
use crate::domain::{ScoreRow, Settings};

use super::aggregation::aggregate_players;
use super::prizes::{assign_placements, PrizePool};
use super::skins::award_skins;
use super::types::LeaderboardEntry;

/// Everything the leaderboard needs besides the score rows themselves
#[derive(Debug, Clone, Copy)]
pub struct PrizeContext<'a> {
    pub number_of_holes: i32,
    pub settings: &'a Settings,
    pub paid_player_count: i64,
    pub prizes: &'a PrizeSettings,
}

pub fn build_leaderboard(rows: &[ScoreRow], context: PrizeContext<'_>) -> Vec<LeaderboardEntry> {
    let aggregates = aggregate_players(rows);
    let skins = award_skins(rows);

    let pool = PrizePool::new(
        context.prizes,
        context.settings.fee_for(context.number_of_holes),
        context.paid_player_count,
        skins.total_awarded(),
    );

    let over_unders: Vec<i32> = aggregates.iter().map(|a| a.over_under()).collect();
    let placements = assign_placements(&over_unders, &context.prizes.place_percentages);

    aggregates
        .into_iter()
        .zip(placements)
        .map(|(aggregate, placement)| {
            let player_skins = skins.count_for(aggregate.player_id);
            LeaderboardEntry {
                rank: placement.rank,
                id: aggregate.player_id,
                over_under: aggregate.over_under(),
                skin_holes: skins.holes_for(aggregate.player_id),
                skins: player_skins,
                quota_prize_money: pool.quota_prize_money(placement.prize_share),
                skin_prize_money: pool.skin_prize_money(player_skins),
                name: aggregate.name,
                email: aggregate.email,
                player_quota: aggregate.player_quota,
                total_quota_points: aggregate.total_quota_points,
                holes_played: aggregate.holes_played,
                total_strokes: aggregate.total_strokes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;

    fn row(player_id: PlayerId, hole: i32, score: i32, quota: i32, player_quota: i32) -> ScoreRow {
        ScoreRow {
            player_id,
            hole_id: hole,
            hole_number: hole,
            score,
            quota,
            player_name: format!("P{}", player_id),
            player_email: format!("p{}@club.test", player_id),
            player_quota,
        }
    }

    fn settings() -> Settings {
        Settings {
            tournament_fee_18_holes: 40,
            tournament_fee_9_holes: 20,
        }
    }

    #[test]
    fn test_full_leaderboard() {
        let rows = vec![
            // P1: 6 points on quota 4 -> +2, wins hole 1
            row(1, 1, 3, 4, 4),
            row(1, 2, 5, 2, 4),
            // P2: 5 points on quota 4 -> +1, wins hole 2
            row(2, 1, 4, 2, 4),
            row(2, 2, 3, 3, 4),
            // P3: 3 points on quota 4 -> -1, ties nobody out
            row(3, 1, 4, 2, 4),
            row(3, 2, 5, 1, 4),
        ];
        let settings = settings();
        let prizes = PrizeSettings::default();
        let context = PrizeContext {
            number_of_holes: 18,
            settings: &settings,
            paid_player_count: 10,
            prizes: &prizes,
        };

        let board = build_leaderboard(&rows, context);

        assert_eq!(board.len(), 3);
        assert_eq!(board[0].id, 1);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].over_under, 2);
        assert_eq!(board[0].skin_holes, vec![1]);
        assert_eq!(board[0].quota_prize_money, 100);
        // two skins in the event: 120 / 2
        assert_eq!(board[0].skin_prize_money, 60);

        assert_eq!(board[1].id, 2);
        assert_eq!(board[1].quota_prize_money, 60);
        assert_eq!(board[1].skins, 1);

        assert_eq!(board[2].id, 3);
        assert_eq!(board[2].rank, 3);
        assert_eq!(board[2].quota_prize_money, 40);
        assert_eq!(board[2].skins, 0);
        assert_eq!(board[2].skin_prize_money, 0);
        assert_eq!(board[2].total_strokes, 9);
        assert_eq!(board[2].holes_played, 2);
    }

    #[test]
    fn test_nine_hole_fee_used() {
        let rows = vec![row(1, 1, 4, 3, 1)];
        let settings = settings();
        let prizes = PrizeSettings::default();
        let context = PrizeContext {
            number_of_holes: 9,
            settings: &settings,
            paid_player_count: 4,
            prizes: &prizes,
        };

        let board = build_leaderboard(&rows, context);

        // pot 80, quota pot 40, sole player takes first place
        assert_eq!(board[0].quota_prize_money, 20);
        // skins pot 24 for the only skin
        assert_eq!(board[0].skin_prize_money, 24);
    }

    #[test]
    fn test_empty_rows_empty_board() {
        let settings = settings();
        let prizes = PrizeSettings::default();
        let context = PrizeContext {
            number_of_holes: 18,
            settings: &settings,
            paid_player_count: 8,
            prizes: &prizes,
        };

        assert!(build_leaderboard(&[], context).is_empty());
    }
}
