use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{CourseId, PlayerId, Tournament, TournamentId};

pub fn insert_tournament(
    conn: &Connection,
    date: NaiveDate,
    course_id: CourseId,
    number_of_holes: i32,
) -> Result<Tournament> {
    let sql = "INSERT INTO tournament (date, course_id, number_of_holes) VALUES (?1, ?2, ?3) RETURNING id, date, course_id, number_of_holes";

    conn.query_row(
        sql,
        params![date, course_id, number_of_holes],
        parse_tournament_row,
    )
    .context("Failed to insert new tournament")
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        date: row.get(1)?,
        course_id: row.get(2)?,
        number_of_holes: row.get(3)?,
    })
}

pub fn find_by_id(conn: &Connection, id: TournamentId) -> Result<Option<Tournament>> {
    let sql = "SELECT id, date, course_id, number_of_holes FROM tournament WHERE id = ?1";

    conn.query_row(sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn register_player(
    conn: &Connection,
    tournament_id: TournamentId,
    player_id: PlayerId,
    paid: bool,
) -> Result<()> {
    let sql = "INSERT INTO tournament_players (tournament_id, player_id, paid) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![tournament_id, player_id, paid])
        .with_context(|| {
            format!(
                "Failed to register player {} for tournament {}",
                player_id, tournament_id
            )
        })
        .map(|_| ())
}

/// Returns false when the player is not on the tournament roster.
pub fn set_paid(
    conn: &Connection,
    tournament_id: TournamentId,
    player_id: PlayerId,
    paid: bool,
) -> Result<bool> {
    let sql = "UPDATE tournament_players SET paid = ?3 WHERE tournament_id = ?1 AND player_id = ?2";

    conn.execute(sql, params![tournament_id, player_id, paid])
        .context("Failed to update paid flag")
        .map(|changed| changed > 0)
}

pub fn count_paid_players(conn: &Connection, tournament_id: TournamentId) -> Result<i64> {
    let sql = "SELECT COUNT(*) FROM tournament_players WHERE tournament_id = ?1 AND paid = 1";

    conn.query_row(sql, params![tournament_id], |row| row.get(0))
        .context("Failed to count paid players")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{courses, players, setup::reset_database};
    use crate::domain::NewPlayer;

    fn setup() -> (Connection, Tournament) {
        let conn = Connection::open_in_memory().unwrap();
        reset_database(&conn).unwrap();
        let course = courses::insert_course(&conn, "Lakeside", None, None).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        let tournament = insert_tournament(&conn, date, course.id, 9).unwrap();
        (conn, tournament)
    }

    fn add_player(conn: &Connection, name: &str) -> PlayerId {
        let player = NewPlayer {
            name: name.to_string(),
            email: format!("{}@club.test", name),
            phone: None,
            sex: None,
            quota: None,
        };
        players::insert_player(conn, &player).unwrap().id
    }

    #[test]
    fn test_paid_count_follows_roster() {
        let (conn, tournament) = setup();
        let a = add_player(&conn, "a");
        let b = add_player(&conn, "b");
        let c = add_player(&conn, "c");
        register_player(&conn, tournament.id, a, true).unwrap();
        register_player(&conn, tournament.id, b, false).unwrap();
        register_player(&conn, tournament.id, c, true).unwrap();

        assert_eq!(count_paid_players(&conn, tournament.id).unwrap(), 2);

        assert!(set_paid(&conn, tournament.id, b, true).unwrap());
        assert_eq!(count_paid_players(&conn, tournament.id).unwrap(), 3);
        assert!(!set_paid(&conn, tournament.id, 999, true).unwrap());
    }

    #[test]
    fn test_double_registration_rejected() {
        let (conn, tournament) = setup();
        let a = add_player(&conn, "a");

        register_player(&conn, tournament.id, a, false).unwrap();
        assert!(register_player(&conn, tournament.id, a, true).is_err());
    }

    #[test]
    fn test_find_round_trips_date() {
        let (conn, tournament) = setup();

        let found = find_by_id(&conn, tournament.id).unwrap().unwrap();

        assert_eq!(found, tournament);
        assert_eq!(found.date, NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
    }
}
