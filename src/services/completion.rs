use anyhow::Context;
use log::{debug, info, warn};

use crate::domain::TournamentId;
use crate::errors::{LeagueError, LeagueResult};
use crate::ledger::{quota_differentials, roll_entry, CompletionSummary, LedgerKind};
use crate::storage::{LeagueStore, TxMode};

/// Rolls a finished tournament into every participant's quota ledgers.
///
/// Nothing guards against completing the same tournament twice; a second call
/// records the result again.
pub struct CompletionService<S> {
    store: S,
}

impl<S: LeagueStore> CompletionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn complete_tournament(&self, tournament_id: TournamentId) -> LeagueResult<CompletionSummary> {
        info!("Completing tournament {}", tournament_id);

        let result = self.store.with_transaction(TxMode::Write, |session| {
            let tournament = session
                .tournament(tournament_id)?
                .ok_or_else(|| LeagueError::not_found(format!("Tournament {}", tournament_id)))?;

            let rows = session.scores_for_tournament(tournament_id)?;
            if rows.is_empty() {
                return Err(LeagueError::precondition(format!(
                    "No scores found for tournament {}",
                    tournament_id
                )));
            }

            let differentials = quota_differentials(&rows);
            for differential in &differentials {
                let entry = differential.entry_on(tournament.date);

                for kind in LedgerKind::ALL {
                    let existing = session.ledger(differential.player_id, kind)?;
                    let slots = roll_entry(kind, existing.as_deref(), entry);
                    session
                        .upsert_ledger(differential.player_id, kind, &slots)
                        .with_context(|| {
                            format!(
                                "Failed to roll {} ledger for player {}",
                                kind.as_str(),
                                differential.player_id
                            )
                        })?;
                }
                debug!(
                    "  → Player {} ledgers rolled with {:+}",
                    differential.player_id, differential.total
                );
            }

            Ok(CompletionSummary {
                players_updated: differentials.len(),
            })
        });

        match &result {
            Ok(summary) => info!(
                "Tournament {} completed, {} players updated",
                tournament_id, summary.players_updated
            ),
            Err(e) => warn!("Tournament {} not completed, rolled back: {}", tournament_id, e),
        }
        result
    }
}
