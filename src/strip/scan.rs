// src/strip/scan.rs

use std::{fs, path::Path};
use tracing::{debug, instrument};

use crate::error::StripError;

/// List the regular files directly inside `dir` whose name contains `marker`.
///
/// The match is a substring match, so `data.csv.bak` qualifies alongside
/// `data.csv`. Subdirectories are neither returned nor descended into.
/// Names come back sorted; an empty result is not an error here.
#[instrument(level = "debug", skip(dir), fields(dir = %dir.display()))]
pub fn find_tabular_files(dir: &Path, marker: &str) -> Result<Vec<String>, StripError> {
    let scan_err = |source| StripError::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(name = ?entry.file_name(), "skipping non UTF-8 file name");
            continue;
        };
        if name.contains(marker) && entry.path().is_file() {
            names.push(name);
        }
    }

    names.sort();
    debug!(count = names.len(), "scan complete");
    Ok(names)
}
