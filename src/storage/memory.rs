use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{anyhow, bail, Result};

use crate::domain::{PlayerId, ScoreRow, Settings, Tournament, TournamentId};
use crate::errors::LeagueResult;
use crate::ledger::{LedgerEntry, LedgerKind};

use super::{LeagueSession, LeagueStore, LedgerSlots, TxMode};

#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    pub tournaments: BTreeMap<TournamentId, Tournament>,
    pub scores: BTreeMap<TournamentId, Vec<ScoreRow>>,
    pub settings: Option<Settings>,
    pub paid_players: BTreeMap<TournamentId, i64>,
    pub ledgers: BTreeMap<(PlayerId, LedgerKind), LedgerSlots>,
    /// Ledger writes for this player fail, for exercising rollback
    pub failing_player: Option<PlayerId>,
}

/// Store kept entirely in memory.
///
/// A transaction works on a copy of the state that replaces the live state
/// only when the closure succeeds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new(state: MemoryState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn snapshot(&self) -> Result<MemoryState> {
        self.state
            .lock()
            .map(|state| state.clone())
            .map_err(|_| anyhow!("Memory store lock poisoned"))
    }
}

impl LeagueStore for MemoryStore {
    fn with_transaction<T, F>(&self, _mode: TxMode, f: F) -> LeagueResult<T>
    where
        F: FnOnce(&mut dyn LeagueSession) -> LeagueResult<T>,
    {
        let mut live = self
            .state
            .lock()
            .map_err(|_| anyhow!("Memory store lock poisoned"))?;

        let mut working = live.clone();
        let output = f(&mut working)?;
        *live = working;
        Ok(output)
    }
}

impl LeagueSession for MemoryState {
    fn tournament(&mut self, tournament_id: TournamentId) -> Result<Option<Tournament>> {
        Ok(self.tournaments.get(&tournament_id).cloned())
    }

    fn scores_for_tournament(&mut self, tournament_id: TournamentId) -> Result<Vec<ScoreRow>> {
        Ok(self.scores.get(&tournament_id).cloned().unwrap_or_default())
    }

    fn settings(&mut self) -> Result<Option<Settings>> {
        Ok(self.settings)
    }

    fn paid_participant_count(&mut self, tournament_id: TournamentId) -> Result<i64> {
        Ok(self.paid_players.get(&tournament_id).copied().unwrap_or(0))
    }

    fn ledger(&mut self, player_id: PlayerId, kind: LedgerKind) -> Result<Option<LedgerSlots>> {
        Ok(self.ledgers.get(&(player_id, kind)).cloned())
    }

    fn upsert_ledger(
        &mut self,
        player_id: PlayerId,
        kind: LedgerKind,
        slots: &[Option<LedgerEntry>],
    ) -> Result<()> {
        if self.failing_player == Some(player_id) {
            bail!("Failed to write {} ledger for player {}", kind.as_str(), player_id);
        }
        self.ledgers.insert((player_id, kind), slots.to_vec());
        Ok(())
    }
}
