use std::path::Path;

use tracing_subscriber::EnvFilter;

pub mod activity;
pub mod config;
pub mod console;
pub mod error;
pub mod paths;
pub mod report;
pub mod tables;

use config::ReportConfig;
use console::{Console, Role, TerminalConsole};
use report::TableOutcome;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix into the report.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut console = TerminalConsole::stdout();

    let status = run(&mut console, &ReportConfig::default(), std::env::current_dir()?)?;

    // Restore terminal colors before leaving.
    drop(console);

    if status != 0 {
        std::process::exit(status);
    }

    Ok(())
}

/// Resolve, connect, report, disconnect. Returns the process exit status.
fn run(console: &mut impl Console, config: &ReportConfig, dir: impl AsRef<Path>) -> anyhow::Result<i32> {
    let path = match paths::resolve_database_path(dir, &config.database_file) {
        Ok(path) => path,

        Err(err) => {
            console.print(Role::Status, &err.to_string())?;
            console.pause(None)?;

            return Ok(err.exit_code());
        }
    };

    let connection = match activity::connect(&path) {
        Ok(connection) => connection,

        Err(err) => {
            console.print(Role::Status, &err.to_string())?;

            return Ok(err.exit_code());
        }
    };

    tracing::info!(?path, "connected");

    console.print(Role::Status, "Connected to DB!")?;

    let outcomes = report::run(&connection, config, console);

    if let Err((_, err)) = connection.close() {
        tracing::warn!(?err, "failed to close database");
    }

    let outcomes = outcomes?;

    for outcome in &outcomes {
        match outcome {
            TableOutcome::Reported(report) => tracing::info!(
                table = %report.table,
                limit = report.limit,
                devices = report.devices.len(),
                interrupted = report.interrupted.is_some(),
                "table reported"
            ),

            TableOutcome::Empty(table) => tracing::info!(%table, "table is empty"),

            TableOutcome::Skipped(err) => tracing::info!(table = ?err.table(), "table skipped")
        }
    }

    console.line("")?;
    console.print(Role::Status, "Disconnected from DB!")?;
    console.pause(Some("Press Enter to exit..."))?;

    Ok(0)
}
