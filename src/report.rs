use rusqlite::Connection;

use super::activity;
use super::config::ReportConfig;
use super::console::{self, Console, Role};
use super::error::ReportError;
use super::tables::{EventTable, Report};

#[derive(Debug)]
pub enum TableOutcome {
    /// Section was printed.
    Reported(Report),

    /// Table has no devices, nothing was printed.
    Empty(EventTable),

    /// A query couldn't be prepared or executed, the table was skipped.
    Skipped(ReportError)
}

/// Print the most active devices of every configured table.
///
/// Query failures only skip the table they happened in. The returned
/// error is a console write failure.
pub fn run(connection: &Connection, config: &ReportConfig, console: &mut impl Console) -> anyhow::Result<Vec<TableOutcome>> {
    config.tables.iter()
        .map(|&table| report_table(connection, config, table, console))
        .collect()
}

fn skip(console: &mut impl Console, err: ReportError) -> anyhow::Result<TableOutcome> {
    debug_assert!(!err.is_fatal());

    tracing::debug!(table = ?err.table(), ?err, "table skipped");

    console.print(Role::Status, &err.to_string())?;

    Ok(TableOutcome::Skipped(err))
}

fn report_table(connection: &Connection, config: &ReportConfig, table: EventTable, console: &mut impl Console) -> anyhow::Result<TableOutcome> {
    let row_count = match activity::count_devices(connection, table) {
        Ok(row_count) => row_count,
        Err(err) => return skip(console, err)
    };

    let limit = config.limit(row_count);

    tracing::debug!(%table, row_count, limit, "counted devices");

    if limit == 0 {
        return Ok(TableOutcome::Empty(table));
    }

    let mut query = match activity::prepare_ranking(connection, table) {
        Ok(query) => query,
        Err(err) => return skip(console, err)
    };

    console.line("")?;
    console.print(Role::SectionHeader, &console::section_header(limit, table))?;
    console.print(Role::ColumnHeader, &console::column_header())?;
    console.print(Role::Separator, &console::separator())?;

    let mut report = Report {
        table,
        limit,
        devices: Vec::with_capacity(limit as usize),
        interrupted: None
    };

    let mut failure = None;

    match query.query([limit]) {
        Ok(mut rows) => loop {
            match activity::next_device(&mut rows) {
                Ok(Some(device)) => {
                    console.print(Role::DataRow, &console::data_row(&device))?;

                    report.devices.push(device);
                }

                Ok(None) => break,

                Err(err) => {
                    failure = Some(err);

                    break;
                }
            }
        }

        Err(err) => failure = Some(err)
    }

    console.print(Role::Separator, &console::separator())?;

    if let Some(source) = failure {
        let err = ReportError::QueryStepFailed { table, source };

        tracing::debug!(%table, ?err, "ranking interrupted");

        console.print(Role::Status, &err.to_string())?;

        report.interrupted = Some(err);
    }

    Ok(TableOutcome::Reported(report))
}
