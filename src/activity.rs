use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, Rows, Statement};

use super::error::{QueryKind, ReportError};
use super::tables::{DeviceRecord, EventTable};

/// Open the database for reading.
pub fn connect(path: &Path) -> Result<Connection, ReportError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;

    Connection::open_with_flags(path, flags)
        .map_err(|source| ReportError::ConnectionFailed {
            path: path.to_path_buf(),
            source
        })
}

// The join doesn't filter anything the count looks at, the number stays
// the amount of distinct device ids present in the event table.
pub fn count_query(table: EventTable) -> String {
    format!("
        SELECT COUNT(DISTINCT `{table}`.device_id) AS devices
        FROM `{table}`
        LEFT JOIN device ON device.device_id = `{table}`.device_id
    ")
}

pub fn ranking_query(table: EventTable) -> String {
    format!("
        SELECT device.number AS number, COUNT(`{table}`.device_id) AS messages
        FROM `{table}`
        LEFT JOIN device ON device.device_id = `{table}`.device_id
        GROUP BY `{table}`.device_id
        ORDER BY messages DESC
        LIMIT ?1
    ")
}

/// Amount of distinct devices which have sent messages into the table.
pub fn count_devices(connection: &Connection, table: EventTable) -> Result<u64, ReportError> {
    let mut query = connection.prepare(&count_query(table))
        .map_err(|source| ReportError::QueryPrepareFailed { table, query: QueryKind::Count, source })?;

    let devices = query.query_row([], |row| row.get::<_, Option<u64>>("devices"))
        .optional()
        .map_err(|source| ReportError::QueryStepFailed { table, source })?;

    Ok(devices.flatten().unwrap_or(0))
}

pub fn prepare_ranking(connection: &Connection, table: EventTable) -> Result<Statement<'_>, ReportError> {
    connection.prepare(&ranking_query(table))
        .map_err(|source| ReportError::QueryPrepareFailed { table, query: QueryKind::Ranking, source })
}

/// Read a ranking query row.
pub fn device_record(row: &Row<'_>) -> rusqlite::Result<DeviceRecord> {
    let number = match row.get_ref("number")? {
        ValueRef::Null       => None,
        ValueRef::Integer(n) => Some(n.to_string()),
        ValueRef::Real(n)    => Some(n.to_string()),

        ValueRef::Text(text) |
        ValueRef::Blob(text) => Some(String::from_utf8_lossy(text).to_string())
    };

    Ok(DeviceRecord {
        number,
        messages: row.get::<_, u64>("messages")?
    })
}

pub fn next_device(rows: &mut Rows<'_>) -> rusqlite::Result<Option<DeviceRecord>> {
    rows.next()?
        .map(device_record)
        .transpose()
}
