use anyhow::{Context, Result};
use log::error;
use rusqlite::{Connection, TransactionBehavior};

use crate::domain::{PlayerId, ScoreRow, Settings, Tournament, TournamentId};
use crate::errors::LeagueResult;
use crate::ledger::{LedgerEntry, LedgerKind};
use crate::storage::{LeagueSession, LeagueStore, LedgerSlots, TxMode};

use super::connection::{get_connection, DbPool};
use super::{ledgers, scores, settings, tournaments};

/// `LeagueStore` backed by the SQLite pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl LeagueStore for SqliteStore {
    fn with_transaction<T, F>(&self, mode: TxMode, f: F) -> LeagueResult<T>
    where
        F: FnOnce(&mut dyn LeagueSession) -> LeagueResult<T>,
    {
        let behavior = match mode {
            TxMode::Read => TransactionBehavior::Deferred,
            TxMode::Write => TransactionBehavior::Immediate,
        };

        let mut conn = get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(behavior)
            .context("Failed to begin transaction")?;

        let mut session = SqliteSession { conn: &tx };
        match f(&mut session) {
            Ok(output) => {
                tx.commit().context("Failed to commit transaction")?;
                Ok(output)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback() {
                    error!("Failed to roll back transaction: {:?}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

struct SqliteSession<'a> {
    conn: &'a Connection,
}

impl LeagueSession for SqliteSession<'_> {
    fn tournament(&mut self, tournament_id: TournamentId) -> Result<Option<Tournament>> {
        tournaments::find_by_id(self.conn, tournament_id)
    }

    fn scores_for_tournament(&mut self, tournament_id: TournamentId) -> Result<Vec<ScoreRow>> {
        scores::list_for_tournament(self.conn, tournament_id)
    }

    fn settings(&mut self) -> Result<Option<Settings>> {
        settings::get_settings(self.conn)
    }

    fn paid_participant_count(&mut self, tournament_id: TournamentId) -> Result<i64> {
        tournaments::count_paid_players(self.conn, tournament_id)
    }

    fn ledger(&mut self, player_id: PlayerId, kind: LedgerKind) -> Result<Option<LedgerSlots>> {
        ledgers::load_slots(self.conn, player_id, kind)
    }

    fn upsert_ledger(
        &mut self,
        player_id: PlayerId,
        kind: LedgerKind,
        slots: &[Option<LedgerEntry>],
    ) -> Result<()> {
        ledgers::write_slots(self.conn, player_id, kind, slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::PrizeSettings;
    use crate::database::fixtures::{seed_league, SeededLeague};
    use crate::database::{create_memory_pool, scores as score_queries};
    use crate::errors::LeagueError;
    use crate::services::{CompletionService, LeaderboardService};

    fn seeded_store() -> (SqliteStore, SeededLeague) {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();
        let league = seed_league(&conn);
        // Alice +1 and a skin on hole 1, Bruno level, Chen -2 with a skin on hole 2
        for score in [
            league.score(0, 1, 3, 4),
            league.score(0, 2, 5, 2),
            league.score(1, 1, 4, 2),
            league.score(1, 2, 5, 2),
            league.score(2, 1, 5, 2),
            league.score(2, 2, 4, 2),
        ] {
            score_queries::upsert_score(&conn, &score).unwrap();
        }
        drop(conn);
        (SqliteStore::new(pool), league)
    }

    #[test]
    fn test_leaderboard_from_sqlite() {
        let (store, league) = seeded_store();
        let service = LeaderboardService::new(store, PrizeSettings::default());

        let board = service.compute_leaderboard(league.tournament.id).unwrap();

        let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bruno", "Chen"]);
        assert_eq!(board[0].over_under, 1);
        assert_eq!(board[0].email, "alice@club.test");
        // three paid at $40: quota pot 60, skins pot 36 over two skins
        assert_eq!(board[0].quota_prize_money, 30);
        assert_eq!(board[0].skin_holes, vec![1]);
        assert_eq!(board[0].skin_prize_money, 18);
        assert_eq!(board[1].quota_prize_money, 18);
        assert_eq!(board[2].over_under, -2);
        assert_eq!(board[2].quota_prize_money, 12);
        assert_eq!(board[2].skin_holes, vec![2]);
    }

    #[test]
    fn test_completion_writes_both_ledgers() {
        let (store, league) = seeded_store();
        let service = CompletionService::new(store.clone());

        let summary = service.complete_tournament(league.tournament.id).unwrap();

        assert_eq!(summary.players_updated, 3);
        let conn = get_connection(store.pool()).unwrap();
        let season = ledgers::load_slots(&conn, league.players[0], LedgerKind::Season)
            .unwrap()
            .unwrap();
        assert_eq!(season.len(), 7);
        let latest = season[0].unwrap();
        assert_eq!(latest.date, league.tournament.date);
        // (3 - 4) + (5 - 2)
        assert_eq!(latest.points, 2);
        assert_eq!(latest.quota_diff, 2);

        let skins = ledgers::load_slots(&conn, league.players[2], LedgerKind::Skins)
            .unwrap()
            .unwrap();
        assert_eq!(skins.len(), 20);
        assert_eq!(skins[0].map(|e| e.points), Some(5));
    }

    #[test]
    fn test_completion_rolls_back_on_write_failure() {
        let (store, league) = seeded_store();
        {
            let conn = get_connection(store.pool()).unwrap();
            let trigger = format!(
                "CREATE TRIGGER reject_ledger BEFORE INSERT ON quota_ledger WHEN NEW.player_id = {} BEGIN SELECT RAISE(ABORT, 'ledger locked'); END",
                league.players[2]
            );
            conn.execute_batch(&trigger).unwrap();
        }
        let service = CompletionService::new(store.clone());

        let result = service.complete_tournament(league.tournament.id);

        assert!(matches!(result, Err(LeagueError::Storage(_))));
        let conn = get_connection(store.pool()).unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM quota_ledger", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[test]
    fn test_completion_without_scores_writes_nothing() {
        let pool = create_memory_pool().unwrap();
        let league = seed_league(&get_connection(&pool).unwrap());
        let store = SqliteStore::new(pool);

        let result = CompletionService::new(store.clone()).complete_tournament(league.tournament.id);

        assert!(matches!(result, Err(LeagueError::PreconditionFailed(_))));
        let conn = get_connection(store.pool()).unwrap();
        assert_eq!(
            ledgers::load_slots(&conn, league.players[0], LedgerKind::Season).unwrap(),
            None
        );
    }
}
