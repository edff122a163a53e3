//! Scoping a stylesheet in place on disk.

use crate::error::{Result, ScopeError};
use crate::prefix::ScopePrefix;
use crate::scope::{transform_with_report, ScopeReport};
use log::{debug, info};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// How [`scope_file`] treats the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeOptions {
    /// Copy the original text to `<file>.backup` before overwriting it.
    pub backup: bool,
    /// Compute the result without touching the file system.
    pub dry_run: bool,
}

impl Default for ScopeOptions {
    fn default() -> Self {
        ScopeOptions {
            backup: true,
            dry_run: false,
        }
    }
}

/// Result of scoping one file.
#[derive(Debug)]
pub struct ScopeOutcome {
    pub scoped_css: String,
    pub report: ScopeReport,
    /// Where the original was saved, if a backup was written.
    pub backup_path: Option<PathBuf>,
}

/// `styles.css` -> `styles.css.backup`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".backup");
    PathBuf::from(name)
}

/// Reads `path`, scopes it under `prefix` and writes it back.
///
/// Nothing is written when the file cannot be read. With `dry_run` set
/// neither the backup nor the scoped file is written.
pub fn scope_file(
    path: &Path,
    prefix: &ScopePrefix,
    options: ScopeOptions,
) -> Result<ScopeOutcome> {
    let css = fs::read_to_string(path).map_err(|source| ScopeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", css.len(), path.display());

    let (scoped_css, report) = transform_with_report(&css, prefix.as_str());
    debug!(
        "Scoped {}: {} lines, {} selectors rewritten, {} left as is",
        path.display(),
        report.lines,
        report.rewritten,
        report.skipped
    );

    if options.dry_run {
        return Ok(ScopeOutcome {
            scoped_css,
            report,
            backup_path: None,
        });
    }

    let backup_path = if options.backup {
        let backup = backup_path(path);
        fs::write(&backup, &css).map_err(|source| ScopeError::Backup {
            path: backup.clone(),
            source,
        })?;
        info!("Backup written to {}", backup.display());
        Some(backup)
    } else {
        None
    };

    fs::write(path, &scoped_css).map_err(|source| ScopeError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ScopeOutcome {
        scoped_css,
        report,
        backup_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("src/pages/Dashboard.css")),
            PathBuf::from("src/pages/Dashboard.css.backup")
        );
    }

    #[test]
    fn test_default_options_keep_backup() {
        let options = ScopeOptions::default();
        assert!(options.backup);
        assert!(!options.dry_run);
    }
}
