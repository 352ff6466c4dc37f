use log::debug;

use crate::config::settings::PrizeSettings;
use crate::domain::TournamentId;
use crate::errors::{LeagueError, LeagueResult};
use crate::scoring::{build_leaderboard, LeaderboardEntry, PrizeContext};
use crate::storage::{LeagueStore, TxMode};

pub struct LeaderboardService<S> {
    store: S,
    prizes: PrizeSettings,
}

impl<S: LeagueStore> LeaderboardService<S> {
    pub fn new(store: S, prizes: PrizeSettings) -> Self {
        Self { store, prizes }
    }

    /// Ranked, prize-annotated standings computed from one consistent read.
    pub fn compute_leaderboard(&self, tournament_id: TournamentId) -> LeagueResult<Vec<LeaderboardEntry>> {
        let prizes = &self.prizes;

        let board = self.store.with_transaction(TxMode::Read, |session| {
            let tournament = session
                .tournament(tournament_id)?
                .ok_or_else(|| LeagueError::not_found(format!("Tournament {}", tournament_id)))?;
            let settings = session
                .settings()?
                .ok_or_else(|| LeagueError::not_found("Settings"))?;
            let rows = session.scores_for_tournament(tournament_id)?;
            let paid_player_count = session.paid_participant_count(tournament_id)?;

            let context = PrizeContext {
                number_of_holes: tournament.number_of_holes,
                settings: &settings,
                paid_player_count,
                prizes,
            };
            Ok(build_leaderboard(&rows, context))
        })?;

        debug!(
            "Leaderboard for tournament {} has {} players",
            tournament_id,
            board.len()
        );
        Ok(board)
    }
}
