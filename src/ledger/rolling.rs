use super::types::{LedgerEntry, LedgerKind, SEASON_SLOTS, SKINS_SLOTS};

/// Fixed-width history, most recent entry in slot 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingLedger<const N: usize> {
    slots: [Option<LedgerEntry>; N],
}

pub type SeasonLedger = RollingLedger<SEASON_SLOTS>;
pub type SkinsLedger = RollingLedger<SKINS_SLOTS>;

impl<const N: usize> RollingLedger<N> {
    pub fn new() -> Self {
        Self { slots: [None; N] }
    }

    /// Loads stored slots; anything beyond the capacity is dropped.
    pub fn from_slots(stored: &[Option<LedgerEntry>]) -> Self {
        let mut ledger = Self::new();
        for (slot, entry) in ledger.slots.iter_mut().zip(stored) {
            *slot = *entry;
        }
        ledger
    }

    /// Ages every entry by one slot, dropping the oldest, and stores `entry` first.
    pub fn push(&mut self, entry: LedgerEntry) {
        if N == 0 {
            return;
        }
        self.slots.rotate_right(1);
        self.slots[0] = Some(entry);
    }

    pub fn slots(&self) -> &[Option<LedgerEntry>; N] {
        &self.slots
    }

    pub fn latest(&self) -> Option<&LedgerEntry> {
        self.slots.first().and_then(Option::as_ref)
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<const N: usize> Default for RollingLedger<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolls `entry` into the ledger of the given kind and returns the slots to store.
pub fn roll_entry(
    kind: LedgerKind,
    existing: Option<&[Option<LedgerEntry>]>,
    entry: LedgerEntry,
) -> Vec<Option<LedgerEntry>> {
    match kind {
        LedgerKind::Season => roll::<SEASON_SLOTS>(existing, entry),
        LedgerKind::Skins => roll::<SKINS_SLOTS>(existing, entry),
    }
}

fn roll<const N: usize>(
    existing: Option<&[Option<LedgerEntry>]>,
    entry: LedgerEntry,
) -> Vec<Option<LedgerEntry>> {
    let mut ledger = existing
        .map(RollingLedger::<N>::from_slots)
        .unwrap_or_default();
    ledger.push(entry);
    ledger.slots().to_vec()
}
