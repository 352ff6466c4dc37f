use crate::config::settings::PrizeSettings;

use super::types::Placement;

// Percentage sums such as 0.5 + 0.3 are not exact in binary; this keeps a
// payout that lands on a whole unit from flooring one below it.
const FLOOR_TOLERANCE: f64 = 1e-9;

/// Money available for one tournament, derived from entry fees.
///
/// Half the pot pays quota placings, 60% of the other half pays skins and the
/// remainder stays with the league.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrizePool {
    pub total_pot: i64,
    pub quota_prize_pot: f64,
    pub skin_prize_pot: f64,
    pub skin_price_per_skin: f64,
}

impl PrizePool {
    pub fn new(
        settings: &PrizeSettings,
        tournament_fee: i64,
        paid_player_count: i64,
        total_skins_awarded: usize,
    ) -> Self {
        let total_pot = paid_player_count * tournament_fee;
        let quota_prize_pot = total_pot as f64 * settings.quota_pot_share;
        let skin_prize_pot = (total_pot as f64 - quota_prize_pot) * settings.skins_share_of_remainder;
        let skin_price_per_skin = if total_skins_awarded == 0 {
            0.0
        } else {
            skin_prize_pot / total_skins_awarded as f64
        };

        Self {
            total_pot,
            quota_prize_pot,
            skin_prize_pot,
            skin_price_per_skin,
        }
    }

    pub fn quota_prize_money(&self, prize_share: f64) -> i64 {
        floor_money(self.quota_prize_pot * prize_share)
    }

    pub fn skin_prize_money(&self, skins: usize) -> i64 {
        floor_money(skins as f64 * self.skin_price_per_skin)
    }
}

fn floor_money(amount: f64) -> i64 {
    (amount + FLOOR_TOLERANCE).floor() as i64
}

/// Assigns ranks to over/under values already sorted best first.
///
/// Consecutive equal values form a tied block sharing the rank of its first
/// member. The block pools the place percentages of the positions it covers
/// and splits them evenly; positions past the paid places add nothing.
pub fn assign_placements(sorted_over_unders: &[i32], place_percentages: &[f64]) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(sorted_over_unders.len());
    let mut start = 0;

    while start < sorted_over_unders.len() {
        let value = sorted_over_unders[start];
        let end = sorted_over_unders[start..]
            .iter()
            .position(|v| *v != value)
            .map_or(sorted_over_unders.len(), |offset| start + offset);

        let block_len = end - start;
        let pooled: f64 = (start..end)
            .filter_map(|position| place_percentages.get(position))
            .sum();
        let prize_share = pooled / block_len as f64;

        placements.extend((start..end).map(|_| Placement {
            rank: start + 1,
            prize_share,
        }));
        start = end;
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACES: [f64; 3] = [0.5, 0.3, 0.2];

    #[test]
    fn test_pot_split_for_eighteen_hole_event() {
        let pool = PrizePool::new(&PrizeSettings::default(), 40, 10, 5);

        assert_eq!(pool.total_pot, 400);
        assert_eq!(pool.quota_prize_pot, 200.0);
        assert_eq!(pool.skin_prize_pot, 120.0);
        assert_eq!(pool.skin_price_per_skin, 24.0);
        assert_eq!(pool.skin_prize_money(2), 48);
    }

    #[test]
    fn test_no_skins_means_zero_price() {
        let pool = PrizePool::new(&PrizeSettings::default(), 40, 10, 0);

        assert_eq!(pool.skin_price_per_skin, 0.0);
        assert_eq!(pool.skin_prize_money(0), 0);
    }

    #[test]
    fn test_distinct_values_take_their_own_places() {
        let placements = assign_placements(&[5, 3, 1, -2], &PLACES);

        let ranks: Vec<usize> = placements.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(placements[0].prize_share, 0.5);
        assert_eq!(placements[1].prize_share, 0.3);
        assert_eq!(placements[2].prize_share, 0.2);
        assert_eq!(placements[3].prize_share, 0.0);
    }

    #[test]
    fn test_three_way_tie_for_first_pools_all_places() {
        let placements = assign_placements(&[4, 4, 4, 1], &PLACES);
        let pool = PrizePool::new(&PrizeSettings::default(), 40, 10, 0);

        for placement in &placements[..3] {
            assert_eq!(placement.rank, 1);
            assert_eq!(pool.quota_prize_money(placement.prize_share), 66);
        }
        assert_eq!(placements[3].rank, 4);
        assert_eq!(placements[3].prize_share, 0.0);
    }

    #[test]
    fn test_tie_straddling_last_paid_place() {
        let placements = assign_placements(&[6, 2, 0, 0, -1], &PLACES);
        let pool = PrizePool::new(&PrizeSettings::default(), 20, 10, 0);

        assert_eq!(placements[2].rank, 3);
        assert_eq!(placements[3].rank, 3);
        assert!((placements[2].prize_share - 0.1).abs() < 1e-12);
        assert_eq!(pool.quota_prize_money(placements[3].prize_share), 10);
        assert_eq!(placements[4].rank, 5);
    }

    #[test]
    fn test_tie_for_second_shares_second_and_third() {
        let placements = assign_placements(&[9, 7, 7], &PLACES);
        let pool = PrizePool::new(&PrizeSettings::default(), 40, 10, 0);

        assert_eq!(pool.quota_prize_money(placements[0].prize_share), 100);
        assert_eq!(placements[1].rank, 2);
        assert_eq!(pool.quota_prize_money(placements[1].prize_share), 50);
        assert_eq!(pool.quota_prize_money(placements[2].prize_share), 50);
    }
}
