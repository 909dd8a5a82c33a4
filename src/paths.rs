use std::path::{Path, PathBuf};

use super::error::ReportError;

/// Build `<dir>/<file_name>` and check that it exists.
pub fn resolve_database_path(dir: impl AsRef<Path>, file_name: &str) -> Result<PathBuf, ReportError> {
    let path = dir.as_ref().join(file_name);

    tracing::debug!(?path, "resolving database path");

    if !path.exists() {
        return Err(ReportError::FileNotFound(path));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_file_resolves() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        std::fs::write(dir.path().join("data.db"), [])?;

        let path = resolve_database_path(dir.path(), "data.db")?;

        assert_eq!(path, dir.path().join("data.db"));

        Ok(())
    }

    #[test]
    fn missing_file_is_reported() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let err = resolve_database_path(dir.path(), "data.db").unwrap_err();

        assert!(matches!(&err, ReportError::FileNotFound(path) if path == &dir.path().join("data.db")));
        assert!(err.to_string().contains("does not exist"));
        assert_eq!(err.exit_code(), 1);

        Ok(())
    }
}
