pub mod completion;
pub mod courses;
pub mod leaderboard;
pub mod scores;
pub mod server;
pub mod tournaments;

pub use completion::CompletionService;
pub use courses::CourseService;
pub use leaderboard::LeaderboardService;
pub use scores::ScoreEntryService;
pub use server::ServerService;
pub use tournaments::TournamentService;
