// src/strip/rename.rs

use std::{fs, io, path::Path};
use tracing::{debug, instrument};

use crate::error::StripError;

/// Rename `dir/staged` to the same name with one leading `prefix` removed.
/// Returns the final name.
///
/// Refuses to overwrite: the final name must be free, which holds once the
/// original has been archived.
#[instrument(level = "debug", skip(dir))]
pub fn rename_staged(dir: &Path, staged: &str, prefix: &str) -> Result<String, StripError> {
    let from = dir.join(staged);
    let final_name = staged.strip_prefix(prefix).unwrap_or(staged);
    let to = dir.join(final_name);

    let rename_err = |source| StripError::Rename {
        from: from.clone(),
        to: to.clone(),
        source,
    };

    if final_name == staged || final_name.is_empty() {
        return Err(rename_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{staged:?} is not a staged file name for prefix {prefix:?}"),
        )));
    }
    if fs::symlink_metadata(&to).is_ok() {
        return Err(rename_err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "target name is already taken",
        )));
    }

    fs::rename(&from, &to).map_err(rename_err)?;
    debug!(to = %to.display(), "renamed");
    Ok(final_name.to_string())
}
