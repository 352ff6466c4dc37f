use thiserror::Error;

pub type LeagueResult<T> = Result<T, LeagueError>;

#[derive(Debug, Error)]
pub enum LeagueError {
    /// Tournament, player or settings row is missing
    #[error("{0} not found")]
    NotFound(String),

    /// The request is well formed but the league state does not allow it
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl LeagueError {
    pub fn not_found(what: impl Into<String>) -> Self {
        LeagueError::NotFound(what.into())
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        LeagueError::PreconditionFailed(reason.into())
    }

    /// A write SQLite refused on a UNIQUE or FOREIGN KEY constraint becomes
    /// `PreconditionFailed(conflict)`; anything else stays a storage failure.
    pub fn from_write(err: anyhow::Error, conflict: impl Into<String>) -> Self {
        let code = err
            .downcast_ref::<rusqlite::Error>()
            .and_then(rusqlite::Error::sqlite_error_code);

        if code == Some(rusqlite::ErrorCode::ConstraintViolation) {
            LeagueError::precondition(conflict)
        } else {
            LeagueError::Storage(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_keeps_context_chain() {
        let err: LeagueError = anyhow::anyhow!("disk full")
            .context("Failed to upsert ledger")
            .into();

        assert_eq!(
            err.to_string(),
            "storage failure: Failed to upsert ledger: disk full"
        );
    }

    #[test]
    fn test_constraint_violation_becomes_precondition() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (email TEXT UNIQUE); INSERT INTO t VALUES ('a@b');")
            .unwrap();
        let err = conn
            .execute("INSERT INTO t VALUES ('a@b')", [])
            .map_err(anyhow::Error::from)
            .map_err(|e| e.context("Failed to insert"))
            .unwrap_err();

        let mapped = LeagueError::from_write(err, "Email already in use");

        assert!(matches!(mapped, LeagueError::PreconditionFailed(reason) if reason == "Email already in use"));
    }

    #[test]
    fn test_other_write_failures_stay_storage() {
        let err = anyhow::anyhow!("disk full");

        assert!(matches!(
            LeagueError::from_write(err, "unused"),
            LeagueError::Storage(_)
        ));
    }

    #[test]
    fn test_not_found_message() {
        let err = LeagueError::not_found("tournament 7");
        assert_eq!(err.to_string(), "tournament 7 not found");
    }
}
