use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{HoleId, NewScore, ScoreRow, TournamentId};

/// Inserts the score, or overwrites the existing one for the same player and hole.
pub fn upsert_score(conn: &Connection, score: &NewScore) -> Result<()> {
    let sql = "
        INSERT INTO scores (tournament_id, player_id, hole_id, score, quota, foursome_group)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT (tournament_id, player_id, hole_id) DO UPDATE SET
            score = excluded.score,
            quota = excluded.quota,
            foursome_group = excluded.foursome_group,
            entered_at = CURRENT_TIMESTAMP
    ";

    conn.execute(
        sql,
        params![
            score.tournament_id,
            score.player_id,
            score.hole_id,
            score.score,
            score.quota,
            score.foursome_group
        ],
    )
    .with_context(|| {
        format!(
            "Failed to save score for player {} on hole {}",
            score.player_id, score.hole_id
        )
    })
    .map(|_| ())
}

/// True when the hole is on the tournament's course and within its round length.
pub fn hole_belongs_to_tournament(
    conn: &Connection,
    tournament_id: TournamentId,
    hole_id: HoleId,
) -> Result<bool> {
    let sql = "
        SELECT COUNT(*)
        FROM tournament t
        JOIN hole h ON h.course_id = t.course_id
        WHERE t.id = ?1 AND h.id = ?2 AND h.hole_number <= t.number_of_holes
    ";

    conn.query_row(sql, params![tournament_id, hole_id], |row| row.get::<_, i64>(0))
        .context("Failed to check hole against tournament course")
        .map(|count| count > 0)
}

pub fn list_for_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<ScoreRow>> {
    let sql = "
        SELECT
            s.player_id,
            s.hole_id,
            h.hole_number,
            s.score,
            s.quota,
            p.name,
            p.email,
            p.quota
        FROM scores s
        JOIN hole h ON s.hole_id = h.id
        JOIN players p ON s.player_id = p.id
        WHERE s.tournament_id = ?1
        ORDER BY h.hole_number, s.player_id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            Ok(ScoreRow {
                player_id: row.get(0)?,
                hole_id: row.get(1)?,
                hole_number: row.get(2)?,
                score: row.get(3)?,
                quota: row.get(4)?,
                player_name: row.get(5)?,
                player_email: row.get(6)?,
                player_quota: row.get(7)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to load scores for tournament {}", tournament_id))?;

    Ok(rows)
}
