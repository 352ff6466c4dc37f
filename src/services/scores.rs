use anyhow::Context;
use log::info;
use rusqlite::TransactionBehavior;

use crate::database::{self, DbPool};
use crate::domain::NewScore;
use crate::errors::{LeagueError, LeagueResult};

pub struct ScoreEntryService {
    pool: DbPool,
}

impl ScoreEntryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Saves a batch of hole scores atomically, overwriting earlier entries.
    pub fn record_scores(&self, scores: &[NewScore]) -> LeagueResult<usize> {
        if scores.is_empty() {
            return Err(LeagueError::precondition("Scores array is required"));
        }

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to begin transaction")?;

        for score in scores {
            let on_course = database::scores::hole_belongs_to_tournament(&tx, score.tournament_id, score.hole_id)?;
            if !on_course {
                return Err(LeagueError::precondition(format!(
                    "Hole {} is not played in tournament {}",
                    score.hole_id, score.tournament_id
                )));
            }
            database::scores::upsert_score(&tx, score)?;
        }

        tx.commit().context("Failed to commit scores")?;
        info!("Saved {} scores", scores.len());
        Ok(scores.len())
    }
}
