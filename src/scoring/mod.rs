pub mod aggregation;
pub mod leaderboard;
pub mod prizes;
pub mod skins;
pub mod types;

pub use leaderboard::{build_leaderboard, PrizeContext};
pub use prizes::PrizePool;
pub use types::{LeaderboardEntry, Placement, PlayerAggregate};
