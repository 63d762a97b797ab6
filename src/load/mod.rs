mod convert;
mod date_parser;
mod discover;
mod read;
mod utils;

pub use discover::find_cleaned_file;

use arrow::record_batch::RecordBatch;
use std::path::PathBuf;
use tracing::info;

use crate::config::LoaderConfig;
use crate::error::LoadError;

/// A fully materialized, fully typed dataset.
#[derive(Debug)]
pub struct LoadedDataset {
    /// The typed table. Declared columns carry their mapped Arrow types;
    /// anything else in the file is Utf8 passthrough.
    pub batch: RecordBatch,
    /// The cleaned file the table was read from.
    pub source_path: PathBuf,
}

impl LoadedDataset {
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// In-memory footprint of the typed table, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.batch.get_array_memory_size()
    }
}

/// Loads the cleaned file of one dataset directory into a typed table.
pub struct DatasetLoader {
    config: LoaderConfig,
}

impl DatasetLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Resolve the dataset directory, pick the cleaned file, parse it, and
    /// coerce every declared column to its semantic type.
    ///
    /// One linear pass, no retries, no partial result: any failure leaves the
    /// caller with an error instead of a table.
    #[tracing::instrument(level = "info", skip(self), fields(dataset = %self.config.dataset_name))]
    pub fn load(&self) -> Result<LoadedDataset, LoadError> {
        let dir = self.config.dataset_dir();
        let path = discover::find_cleaned_file(&dir, &self.config.suffix)?;
        info!("loading dataset: {}", path.display());

        let raw = read::read_utf8_batch(&path)?;
        let typed = convert::convert_to_typed(&raw, &path)?;

        info!(rows = typed.num_rows(), "dataset loaded");
        info!(
            "typed table memory: {:.2} MB",
            typed.get_array_memory_size() as f64 / (1024.0 * 1024.0)
        );

        Ok(LoadedDataset {
            batch: typed,
            source_path: path,
        })
    }
}
