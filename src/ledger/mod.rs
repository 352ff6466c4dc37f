pub mod differential;
pub mod rolling;
pub mod types;

pub use differential::quota_differentials;
pub use rolling::{roll_entry, RollingLedger, SeasonLedger, SkinsLedger};
pub use types::{CompletionSummary, LedgerEntry, LedgerKind, PlayerDifferential};
