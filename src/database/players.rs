use anyhow::{bail, Context, Result};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::domain::patch::set_clause;
use crate::domain::{NewPlayer, Player, PlayerId, PlayerPatch, Role, Sex};

const PLAYER_COLUMNS: &str = "id, name, email, phone, sex, quota, active, role, fedex_points, tournaments_played, prize_money, created_at";

pub fn insert_player(conn: &Connection, player: &NewPlayer) -> Result<Player> {
    let sql = format!(
        "INSERT INTO players (name, email, phone, sex, quota) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {}",
        PLAYER_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            player.name,
            player.email,
            player.phone,
            player.sex.as_ref().map(Sex::as_str),
            player.quota.unwrap_or(0)
        ],
        parse_player_row,
    )
    .with_context(|| format!("Failed to insert player {}", player.email))
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    let sex: Option<String> = row.get(4)?;
    let role: String = row.get(7)?;

    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        sex: sex.as_deref().and_then(Sex::parse),
        quota: row.get(5)?,
        active: row.get(6)?,
        role: Role::parse(&role).unwrap_or_default(),
        fedex_points: row.get(8)?,
        tournaments_played: row.get(9)?,
        prize_money: row.get(10)?,
        created_at: row.get(11)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let sql = format!("SELECT {} FROM players WHERE id = ?1", PLAYER_COLUMNS);

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_active(conn: &Connection) -> Result<Vec<Player>> {
    let sql = format!(
        "SELECT {} FROM players WHERE active = 1 ORDER BY fedex_points DESC, name ASC",
        PLAYER_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Applies only the fields present in `patch`; `None` when the player does not exist.
pub fn apply_patch(conn: &Connection, id: PlayerId, patch: &PlayerPatch) -> Result<Option<Player>> {
    let assignments = patch.assignments();
    if assignments.is_empty() {
        bail!("No fields to update for player {}", id);
    }

    let sql = format!(
        "UPDATE players SET {} WHERE id = ?{}",
        set_clause(&assignments),
        assignments.len() + 1
    );
    let mut values: Vec<Value> = assignments.into_iter().map(|(_, value)| value).collect();
    values.push(Value::Integer(i64::from(id)));

    let changed = conn
        .execute(&sql, params_from_iter(values.iter()))
        .with_context(|| format!("Failed to update player {}", id))?;

    if changed == 0 {
        return Ok(None);
    }
    find_by_id(conn, id)
}
