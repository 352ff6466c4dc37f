pub mod memory;

use anyhow::Result;

use crate::domain::{PlayerId, ScoreRow, Settings, Tournament, TournamentId};
use crate::errors::LeagueResult;
use crate::ledger::{LedgerEntry, LedgerKind};

pub use memory::{MemoryState, MemoryStore};

/// Stored ledger slots, most recent first
pub type LedgerSlots = Vec<Option<LedgerEntry>>;

/// Reads and writes available inside one storage transaction
pub trait LeagueSession {
    fn tournament(&mut self, tournament_id: TournamentId) -> Result<Option<Tournament>>;

    fn scores_for_tournament(&mut self, tournament_id: TournamentId) -> Result<Vec<ScoreRow>>;

    fn settings(&mut self) -> Result<Option<Settings>>;

    fn paid_participant_count(&mut self, tournament_id: TournamentId) -> Result<i64>;

    fn ledger(&mut self, player_id: PlayerId, kind: LedgerKind) -> Result<Option<LedgerSlots>>;

    fn upsert_ledger(
        &mut self,
        player_id: PlayerId,
        kind: LedgerKind,
        slots: &[Option<LedgerEntry>],
    ) -> Result<()>;
}

/// Whether a transaction only reads or also writes.
///
/// Write transactions take the store's write lock when they begin, so two
/// writers queue up instead of failing on lock upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    Read,
    Write,
}

/// Storage capability handed to the services.
///
/// `with_transaction` commits only when the closure returns `Ok`; any error
/// leaves the store exactly as it was before the call.
pub trait LeagueStore {
    fn with_transaction<T, F>(&self, mode: TxMode, f: F) -> LeagueResult<T>
    where
        F: FnOnce(&mut dyn LeagueSession) -> LeagueResult<T>;
}

impl<S: LeagueStore> LeagueStore for &S {
    fn with_transaction<T, F>(&self, mode: TxMode, f: F) -> LeagueResult<T>
    where
        F: FnOnce(&mut dyn LeagueSession) -> LeagueResult<T>,
    {
        (**self).with_transaction(mode, f)
    }
}
