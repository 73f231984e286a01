// src/strip/mod.rs
//! Header removal for every CSV file in a directory.
//!
//! A run works in two scans. The first finds the inputs; each one is
//! stripped into a `_new_` sibling and the original is moved into `old/`.
//! The second scan then picks up whatever staged files actually exist and
//! renames them back to the original names. The rename set comes from the
//! directory, never from the first scan's list.
//!
//! Running twice on the same directory strips a second row from each file.

pub mod archive;
pub mod header;
pub mod rename;
pub mod scan;

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::error::StripError;

/// Subdirectory that receives the untouched originals.
pub const ARCHIVE_DIR_NAME: &str = "old";
/// Prefix carried by stripped output until it takes over the original name.
pub const STAGING_PREFIX: &str = "_new_";
/// Any file name containing this is treated as CSV.
pub const TABULAR_MARKER: &str = ".csv";

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files stripped and archived, from the first scan.
    pub processed: Vec<String>,
    /// Final names of the renamed staged files, from the second scan.
    pub renamed: Vec<String>,
    /// Data records written across all outputs.
    pub records_written: u64,
    pub archive_dir: PathBuf,
}

/// Strips headers from the CSV files of one working directory.
#[derive(Debug, Clone)]
pub struct HeaderStripper {
    dir: PathBuf,
    archive_name: String,
    prefix: String,
    marker: String,
}

impl HeaderStripper {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            archive_name: ARCHIVE_DIR_NAME.to_string(),
            prefix: STAGING_PREFIX.to_string(),
            marker: TABULAR_MARKER.to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.dir.join(&self.archive_name)
    }

    /// First scan. Fails with [`StripError::NoInput`] when nothing qualifies,
    /// before anything on disk has changed.
    pub fn discover(&self) -> Result<Vec<String>, StripError> {
        let found = scan::find_tabular_files(&self.dir, &self.marker)?;
        if found.is_empty() {
            return Err(StripError::NoInput);
        }
        info!(count = found.len(), "found CSV files");
        Ok(found)
    }

    /// Strip and archive each of `found`, then rescan and rename the staged outputs.
    ///
    /// Stops at the first error. Work already done is not rolled back.
    #[instrument(level = "info", skip_all, fields(dir = %self.dir.display()))]
    pub fn process(&self, found: &[String]) -> Result<RunSummary, StripError> {
        let mut records_written = 0;
        for name in found {
            let staged = format!("{}{}", self.prefix, name);
            records_written +=
                header::strip_header(&self.dir.join(name), &self.dir.join(&staged))?;
            archive::archive_file(name, &self.dir, &self.archive_name)?;
        }

        // shortest first: `_new__new_a.csv` must wait until `_new_a.csv` has become `a.csv`
        let mut staged = scan::find_tabular_files(&self.dir, &self.marker)?;
        staged.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        let mut renamed = Vec::new();
        for name in staged {
            if !name.starts_with(&self.prefix) {
                warn!(%name, "not a staged file, leaving it in place");
                continue;
            }
            renamed.push(rename::rename_staged(&self.dir, &name, &self.prefix)?);
        }

        info!(
            processed = found.len(),
            renamed = renamed.len(),
            records_written,
            "headers removed"
        );
        Ok(RunSummary {
            processed: found.to_vec(),
            renamed,
            records_written,
            archive_dir: self.archive_dir(),
        })
    }

    /// [`discover`](Self::discover) followed by [`process`](Self::process).
    pub fn run(&self) -> Result<RunSummary, StripError> {
        let found = self.discover()?;
        self.process(&found)
    }
}
