use anyhow::{bail, Context, Result};
use rusqlite::{params_from_iter, Connection, OptionalExtension};

use crate::domain::patch::set_clause;
use crate::domain::{Settings, SettingsPatch};

pub fn get_settings(conn: &Connection) -> Result<Option<Settings>> {
    let sql = "SELECT tournament_fee_18_holes, tournament_fee_9_holes FROM settings WHERE id = 1";

    conn.query_row(sql, [], |row| {
        Ok(Settings {
            tournament_fee_18_holes: row.get(0)?,
            tournament_fee_9_holes: row.get(1)?,
        })
    })
    .optional()
    .context("Failed to query settings")
}

pub fn apply_patch(conn: &Connection, patch: &SettingsPatch) -> Result<Option<Settings>> {
    let assignments = patch.assignments();
    if assignments.is_empty() {
        bail!("No settings provided to update");
    }

    let sql = format!("UPDATE settings SET {} WHERE id = 1", set_clause(&assignments));
    let changed = conn
        .execute(&sql, params_from_iter(assignments.iter().map(|(_, value)| value)))
        .context("Failed to update settings")?;

    if changed == 0 {
        return Ok(None);
    }
    get_settings(conn)
}
