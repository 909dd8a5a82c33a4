use std::path::PathBuf;

use thiserror::Error;

use super::tables::EventTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Distinct devices of a table.
    Count,

    /// Devices ordered by message count.
    Ranking
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count   => f.write_str("count statement"),
            Self::Ranking => f.write_str("statement")
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Database file does not exist at path: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Can't open database: {source}")]
    ConnectionFailed {
        path: PathBuf,
        source: rusqlite::Error
    },

    #[error("Failed to prepare {query} for table {table}: {source}")]
    QueryPrepareFailed {
        table: EventTable,
        query: QueryKind,
        source: rusqlite::Error
    },

    #[error("Error selecting from table {table}: {source}")]
    QueryStepFailed {
        table: EventTable,
        source: rusqlite::Error
    }
}

impl ReportError {
    /// Fatal errors abort the whole run, everything else only skips a table.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::ConnectionFailed { .. })
    }

    pub fn table(&self) -> Option<EventTable> {
        match self {
            Self::QueryPrepareFailed { table, .. } |
            Self::QueryStepFailed { table, .. } => Some(*table),

            _ => None
        }
    }

    /// Process exit status for a fatal error.
    ///
    /// A failed connection reports the primary SQLite result code, so any
    /// `SQLITE_CANTOPEN` flavour ends the process with status 14.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { source: rusqlite::Error::SqliteFailure(err, _), .. }
                if err.extended_code & 0xff != 0 => err.extended_code & 0xff,

            _ => 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(code), Some(String::from("unable to open database file")))
    }

    #[test]
    fn missing_file_exits_with_one() {
        let err = ReportError::FileNotFound(PathBuf::from("/nowhere/data.db"));

        assert!(err.is_fatal());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Database file does not exist at path: /nowhere/data.db");
    }

    #[test]
    fn connection_failure_exits_with_driver_code() {
        let err = ReportError::ConnectionFailed {
            path: PathBuf::from("data.db"),
            source: sqlite_failure(rusqlite::ffi::SQLITE_CANTOPEN)
        };

        assert!(err.is_fatal());
        assert_eq!(err.exit_code(), rusqlite::ffi::SQLITE_CANTOPEN);
        assert!(err.to_string().starts_with("Can't open database: "));
    }

    #[test]
    fn extended_codes_exit_with_primary_code() {
        // SQLITE_CANTOPEN_ISDIR
        let err = ReportError::ConnectionFailed {
            path: PathBuf::from("data.db"),
            source: sqlite_failure(rusqlite::ffi::SQLITE_CANTOPEN | (2 << 8))
        };

        assert_eq!(err.exit_code(), 14);
    }

    #[test]
    fn connection_failure_without_code_exits_with_one() {
        let err = ReportError::ConnectionFailed {
            path: PathBuf::from("data.db"),
            source: rusqlite::Error::InvalidQuery
        };

        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn query_errors_are_recoverable() {
        let err = ReportError::QueryPrepareFailed {
            table: EventTable::Sia,
            query: QueryKind::Ranking,
            source: sqlite_failure(rusqlite::ffi::SQLITE_ERROR)
        };

        assert!(!err.is_fatal());
        assert_eq!(err.table(), Some(EventTable::Sia));
        assert!(err.to_string().starts_with("Failed to prepare statement for table event_sia: "));

        let err = ReportError::QueryPrepareFailed {
            table: EventTable::Sia,
            query: QueryKind::Count,
            source: sqlite_failure(rusqlite::ffi::SQLITE_ERROR)
        };

        assert!(err.to_string().starts_with("Failed to prepare count statement for table event_sia: "));

        let err = ReportError::QueryStepFailed {
            table: EventTable::Dozor,
            source: rusqlite::Error::QueryReturnedNoRows
        };

        assert!(!err.is_fatal());
        assert!(err.to_string().starts_with("Error selecting from table event_dozor: "));
    }
}
