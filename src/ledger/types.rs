use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

pub const SEASON_SLOTS: usize = 7;
pub const SKINS_SLOTS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    Season,
    Skins,
}

impl LedgerKind {
    pub const ALL: [LedgerKind; 2] = [LedgerKind::Season, LedgerKind::Skins];

    pub fn capacity(&self) -> usize {
        match self {
            LedgerKind::Season => SEASON_SLOTS,
            LedgerKind::Skins => SKINS_SLOTS,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LedgerKind::Season => "season",
            LedgerKind::Skins => "skins",
        }
    }
}

/// One completed tournament as remembered by a ledger slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub points: i32,
    pub quota_diff: i32,
}

/// Summed (strokes - quota points) for one player in one tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDifferential {
    pub player_id: PlayerId,
    pub total: i32,
}

impl PlayerDifferential {
    pub fn entry_on(&self, date: NaiveDate) -> LedgerEntry {
        LedgerEntry {
            date,
            points: self.total,
            quota_diff: self.total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub players_updated: usize,
}
