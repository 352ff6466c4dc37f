use anyhow::Context;
use log::info;
use rusqlite::TransactionBehavior;

use crate::database::{self, courses, players, tournaments, DbPool};
use crate::domain::{NewTournament, PlayerId, Tournament, TournamentId};
use crate::errors::{LeagueError, LeagueResult};

const ROUND_LENGTHS: [i32; 2] = [9, 18];

/// Tournament set-up and roster upkeep.
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Creates a tournament whose round fits on the chosen course.
    pub fn create_tournament(&self, new: &NewTournament) -> LeagueResult<Tournament> {
        if !ROUND_LENGTHS.contains(&new.number_of_holes) {
            return Err(LeagueError::precondition(format!(
                "A tournament plays 9 or 18 holes, not {}",
                new.number_of_holes
            )));
        }

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to begin transaction")?;

        if courses::find_by_id(&tx, new.course_id)?.is_none() {
            return Err(LeagueError::not_found(format!("Course {}", new.course_id)));
        }
        let available = courses::count_holes(&tx, new.course_id)?;
        if available < i64::from(new.number_of_holes) {
            return Err(LeagueError::precondition(format!(
                "Course {} has {} holes, a {}-hole round does not fit",
                new.course_id, available, new.number_of_holes
            )));
        }

        let tournament = tournaments::insert_tournament(&tx, new.date, new.course_id, new.number_of_holes)?;
        tx.commit().context("Failed to commit tournament")?;

        info!(
            "Created tournament {} on {} ({} holes)",
            tournament.id, tournament.date, tournament.number_of_holes
        );
        Ok(tournament)
    }

    pub fn register_player(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
        paid: bool,
    ) -> LeagueResult<()> {
        let conn = database::get_connection(&self.pool)?;

        if tournaments::find_by_id(&conn, tournament_id)?.is_none() {
            return Err(LeagueError::not_found(format!("Tournament {}", tournament_id)));
        }
        if players::find_by_id(&conn, player_id)?.is_none() {
            return Err(LeagueError::not_found(format!("Player {}", player_id)));
        }

        tournaments::register_player(&conn, tournament_id, player_id, paid).map_err(|e| {
            LeagueError::from_write(
                e,
                format!("Player {} is already registered for tournament {}", player_id, tournament_id),
            )
        })?;

        info!("Registered player {} for tournament {} (paid: {})", player_id, tournament_id, paid);
        Ok(())
    }

    pub fn set_paid(&self, tournament_id: TournamentId, player_id: PlayerId, paid: bool) -> LeagueResult<()> {
        let conn = database::get_connection(&self.pool)?;

        if !tournaments::set_paid(&conn, tournament_id, player_id, paid)? {
            return Err(LeagueError::not_found(format!(
                "Player {} on the roster of tournament {}",
                player_id, tournament_id
            )));
        }
        Ok(())
    }
}
