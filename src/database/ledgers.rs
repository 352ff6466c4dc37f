use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::PlayerId;
use crate::ledger::{LedgerEntry, LedgerKind};
use crate::storage::LedgerSlots;

/// Stored slots for the player, or `None` when no ledger exists yet.
pub fn load_slots(conn: &Connection, player_id: PlayerId, kind: LedgerKind) -> Result<Option<LedgerSlots>> {
    let sql = "SELECT slot, date, points, quota_diff FROM quota_ledger WHERE player_id = ?1 AND kind = ?2 ORDER BY slot";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id, kind.as_str()], |row| {
            let slot: i64 = row.get(0)?;
            let entry = LedgerEntry {
                date: row.get(1)?,
                points: row.get(2)?,
                quota_diff: row.get(3)?,
            };
            Ok((slot, entry))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to load {} ledger for player {}", kind.as_str(), player_id))?;

    if rows.is_empty() {
        return Ok(None);
    }

    let mut slots: LedgerSlots = vec![None; kind.capacity()];
    for (slot, entry) in rows {
        let target = usize::try_from(slot - 1).ok().and_then(|idx| slots.get_mut(idx));
        if let Some(target) = target {
            *target = Some(entry);
        }
    }
    Ok(Some(slots))
}

/// Replaces the player's ledger with `slots`; slot numbering starts at 1.
pub fn write_slots(
    conn: &Connection,
    player_id: PlayerId,
    kind: LedgerKind,
    slots: &[Option<LedgerEntry>],
) -> Result<()> {
    conn.execute(
        "DELETE FROM quota_ledger WHERE player_id = ?1 AND kind = ?2",
        params![player_id, kind.as_str()],
    )
    .with_context(|| format!("Failed to clear {} ledger for player {}", kind.as_str(), player_id))?;

    let sql = "INSERT INTO quota_ledger (player_id, kind, slot, date, points, quota_diff) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
    let mut stmt = conn.prepare(sql)?;
    for (idx, entry) in slots.iter().enumerate() {
        if let Some(entry) = entry {
            stmt.execute(params![
                player_id,
                kind.as_str(),
                (idx + 1) as i64,
                entry.date,
                entry.points,
                entry.quota_diff
            ])
            .with_context(|| format!("Failed to write slot {} of {} ledger", idx + 1, kind.as_str()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{players, setup::reset_database};
    use crate::domain::NewPlayer;
    use chrono::NaiveDate;

    fn setup() -> (Connection, PlayerId) {
        let conn = Connection::open_in_memory().unwrap();
        reset_database(&conn).unwrap();
        let player = NewPlayer {
            name: "Lou".to_string(),
            email: "lou@club.test".to_string(),
            phone: None,
            sex: None,
            quota: Some(24),
        };
        let id = players::insert_player(&conn, &player).unwrap().id;
        (conn, id)
    }

    fn entry(day: u32, points: i32) -> LedgerEntry {
        LedgerEntry {
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            points,
            quota_diff: points,
        }
    }

    #[test]
    fn test_absent_ledger() {
        let (conn, player_id) = setup();
        assert_eq!(load_slots(&conn, player_id, LedgerKind::Season).unwrap(), None);
    }

    #[test]
    fn test_slots_keep_positions_and_kinds_stay_apart() {
        let (conn, player_id) = setup();
        let mut slots = vec![None; 7];
        slots[0] = Some(entry(9, 3));
        slots[2] = Some(entry(2, -4));

        write_slots(&conn, player_id, LedgerKind::Season, &slots).unwrap();

        assert_eq!(load_slots(&conn, player_id, LedgerKind::Season).unwrap(), Some(slots));
        assert_eq!(load_slots(&conn, player_id, LedgerKind::Skins).unwrap(), None);
    }

    #[test]
    fn test_rewrite_replaces_previous_slots() {
        let (conn, player_id) = setup();
        write_slots(&conn, player_id, LedgerKind::Skins, &[Some(entry(1, 1)), Some(entry(2, 2))]).unwrap();

        write_slots(&conn, player_id, LedgerKind::Skins, &[Some(entry(3, 3))]).unwrap();

        let slots = load_slots(&conn, player_id, LedgerKind::Skins).unwrap().unwrap();
        assert_eq!(slots.len(), 20);
        assert_eq!(slots.iter().flatten().count(), 1);
        assert_eq!(slots[0], Some(entry(3, 3)));
    }
}
