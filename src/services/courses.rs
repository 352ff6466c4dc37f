use anyhow::Context;
use log::info;
use rusqlite::TransactionBehavior;

use crate::database::{self, courses, DbPool};
use crate::domain::{Course, CourseId, Hole, NewCourse};
use crate::errors::{LeagueError, LeagueResult};

pub struct CourseService {
    pool: DbPool,
}

impl CourseService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create_course(&self, course: &NewCourse) -> LeagueResult<Course> {
        let conn = database::get_connection(&self.pool)?;
        let created = courses::insert_course(
            &conn,
            &course.name,
            course.address.as_deref(),
            course.phone.as_deref(),
        )?;

        info!("Created course {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Adds the holes as one batch; a repeated hole number rejects all of them.
    pub fn add_holes(&self, course_id: CourseId, holes: &[Hole]) -> LeagueResult<Vec<Hole>> {
        if holes.is_empty() {
            return Err(LeagueError::precondition("Holes array is required"));
        }

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to begin transaction")?;

        if courses::find_by_id(&tx, course_id)?.is_none() {
            return Err(LeagueError::not_found(format!("Course {}", course_id)));
        }

        let added = courses::add_holes(&tx, course_id, holes).map_err(|e| {
            LeagueError::from_write(e, format!("Course {} already has one of these hole numbers", course_id))
        })?;
        tx.commit().context("Failed to commit holes")?;

        Ok(added)
    }

    pub fn find_hole(&self, course_id: CourseId, hole_number: i32) -> LeagueResult<Hole> {
        let conn = database::get_connection(&self.pool)?;

        courses::find_hole(&conn, course_id, hole_number)?.ok_or_else(|| {
            LeagueError::not_found(format!("Hole {} of course {}", hole_number, course_id))
        })
    }

    pub fn list_holes(&self, course_id: CourseId) -> LeagueResult<Vec<Hole>> {
        let conn = database::get_connection(&self.pool)?;

        if courses::find_by_id(&conn, course_id)?.is_none() {
            return Err(LeagueError::not_found(format!("Course {}", course_id)));
        }
        Ok(courses::list_holes(&conn, course_id)?)
    }
}
