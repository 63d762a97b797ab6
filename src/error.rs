use arrow::error::ArrowError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading a cleaned dataset.
///
/// Closed set so callers can branch on cause: a missing prerequisite file is
/// user-actionable, a coercion failure points at the offending value, and
/// I/O or parse errors are surfaced verbatim.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No `*<suffix>.csv` file is present in the dataset directory.
    #[error(
        "no `*{suffix}.csv` file found in `{}`; run the cleaning pipeline first to produce one",
        .dir.display()
    )]
    DatasetNotFound { dir: PathBuf, suffix: String },

    /// The header row lacks one of the declared columns.
    #[error("column `{column}` missing from `{}`", .path.display())]
    MissingColumn { column: &'static str, path: PathBuf },

    /// A value in a typed column could not be converted.
    #[error("column `{column}` row {row}: cannot convert `{value}` to {target}")]
    Coercion {
        column: String,
        row: usize,
        value: String,
        target: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
