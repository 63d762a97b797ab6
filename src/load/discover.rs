use glob::glob;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::LoadError;

/// Find the cleaned file in `dir`: any filename ending in `<suffix>.csv`.
///
/// `glob` yields paths in alphabetical order, so taking the first match keeps
/// the selection stable across platforms and repeated calls. A directory that
/// does not exist reports the same "dataset not found" condition as an empty
/// one: either way the cleaning step has not produced anything here yet.
pub fn find_cleaned_file(dir: &Path, suffix: &str) -> Result<PathBuf, LoadError> {
    let pattern = format!("{}/*{}.csv", dir.display(), suffix);
    let paths = glob(&pattern)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut candidates = Vec::new();
    for entry in paths {
        candidates.push(entry.map_err(|e| LoadError::Io(e.into_error()))?);
    }

    match candidates.first() {
        None => Err(LoadError::DatasetNotFound {
            dir: dir.to_path_buf(),
            suffix: suffix.to_string(),
        }),
        Some(first) => {
            if candidates.len() > 1 {
                warn!(
                    "{} files match `*{}.csv` in {}; using {}",
                    candidates.len(),
                    suffix,
                    dir.display(),
                    first.display()
                );
            }
            Ok(first.clone())
        }
    }
}
