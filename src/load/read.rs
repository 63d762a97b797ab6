use arrow::{
    csv::ReaderBuilder,
    datatypes::{DataType, Field, Schema},
    error::ArrowError,
    record_batch::RecordBatch,
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use crate::error::LoadError;
use crate::load::utils::clean_str;

const BATCH_SIZE: usize = 65_536;

/// Parse the file as delimited text with a header row, every column Utf8.
/// Type coercion happens afterwards so a bad value can be reported with its
/// column and row rather than lost inside the reader.
pub fn read_utf8_batch(path: &Path) -> Result<RecordBatch, LoadError> {
    let headers = read_headers(path)?;

    let fields: Vec<Field> = headers
        .iter()
        .map(|n| Field::new(n, DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let file = File::open(path)?;
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_batch_size(BATCH_SIZE)
        .with_quote(b'"')
        .with_delimiter(b',')
        .build(BufReader::new(file))?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }

    arrow::compute::concat_batches(&schema, &batches).map_err(Into::into)
}

/// Column names from the first line of the file.
fn read_headers(path: &Path) -> Result<Vec<String>, LoadError> {
    let file = File::open(path)?;
    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line)?;

    let trimmed = first_line.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        return Err(LoadError::Arrow(ArrowError::CsvError(format!(
            "`{}` has no header row",
            path.display()
        ))));
    }

    Ok(trimmed.split(',').map(|h| clean_str(h).to_string()).collect())
}
