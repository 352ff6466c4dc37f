use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{Course, CourseId, Hole};

const HOLE_COLUMNS: &str = "id, course_id, hole_number, mens_distance, mens_par, mens_handicap, ladies_distance, ladies_par, ladies_handicap";

pub fn insert_course(
    conn: &Connection,
    name: &str,
    address: Option<&str>,
    phone: Option<&str>,
) -> Result<Course> {
    let sql = "INSERT INTO course (name, address, phone) VALUES (?1, ?2, ?3) RETURNING id, name, address, phone";

    conn.query_row(sql, params![name, address, phone], parse_course_row)
        .context("Failed to insert course")
}

fn parse_course_row(row: &rusqlite::Row) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        phone: row.get(3)?,
    })
}

pub fn find_by_id(conn: &Connection, id: CourseId) -> Result<Option<Course>> {
    let sql = "SELECT id, name, address, phone FROM course WHERE id = ?1";

    conn.query_row(sql, params![id], parse_course_row)
        .optional()
        .context("Failed to query course by id")
}

pub fn add_holes(conn: &Connection, course_id: CourseId, holes: &[Hole]) -> Result<Vec<Hole>> {
    let sql = format!(
        "INSERT INTO hole (course_id, hole_number, mens_distance, mens_par, mens_handicap, ladies_distance, ladies_par, ladies_handicap) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING {}",
        HOLE_COLUMNS
    );

    holes
        .iter()
        .map(|hole| {
            conn.query_row(
                &sql,
                params![
                    course_id,
                    hole.hole_number,
                    hole.mens_distance,
                    hole.mens_par,
                    hole.mens_handicap,
                    hole.ladies_distance,
                    hole.ladies_par,
                    hole.ladies_handicap
                ],
                parse_hole_row,
            )
            .with_context(|| format!("Failed to insert hole {} for course {}", hole.hole_number, course_id))
        })
        .collect()
}

fn parse_hole_row(row: &rusqlite::Row) -> rusqlite::Result<Hole> {
    Ok(Hole {
        id: row.get(0)?,
        course_id: row.get(1)?,
        hole_number: row.get(2)?,
        mens_distance: row.get(3)?,
        mens_par: row.get(4)?,
        mens_handicap: row.get(5)?,
        ladies_distance: row.get(6)?,
        ladies_par: row.get(7)?,
        ladies_handicap: row.get(8)?,
    })
}

pub fn find_hole(conn: &Connection, course_id: CourseId, hole_number: i32) -> Result<Option<Hole>> {
    let sql = format!(
        "SELECT {} FROM hole WHERE course_id = ?1 AND hole_number = ?2",
        HOLE_COLUMNS
    );

    conn.query_row(&sql, params![course_id, hole_number], parse_hole_row)
        .optional()
        .context("Failed to query hole by number")
}

pub fn list_holes(conn: &Connection, course_id: CourseId) -> Result<Vec<Hole>> {
    let sql = format!(
        "SELECT {} FROM hole WHERE course_id = ?1 ORDER BY hole_number",
        HOLE_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![course_id], parse_hole_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_holes(conn: &Connection, course_id: CourseId) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM hole WHERE course_id = ?1",
        params![course_id],
        |row| row.get(0),
    )
    .context("Failed to count course holes")
}
