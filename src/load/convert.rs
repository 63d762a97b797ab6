use arrow::{
    array::{
        Array, ArrayRef, Float64Builder, Int64Builder, StringArray, StringDictionaryBuilder,
        TimestampNanosecondBuilder,
    },
    datatypes::Int32Type,
    error::ArrowError,
    record_batch::RecordBatch,
};
use std::{path::Path, sync::Arc};

use crate::error::LoadError;
use crate::load::{date_parser, utils::clean_str};
use crate::schema::{build_target_schema, column_type, declared_columns, ColumnType};

/// Convert the all-Utf8 batch into its final column types.
///
/// Every declared column must be present in the batch; undeclared columns are
/// passed through untouched. A value that cannot be coerced aborts the load
/// with the column name, 0-based data-row index, and offending text rather
/// than turning into a silent null. Empty values become nulls in timestamp,
/// float, and categorical columns; integer columns admit no missing values.
pub fn convert_to_typed(batch: &RecordBatch, path: &Path) -> Result<RecordBatch, LoadError> {
    for name in declared_columns() {
        if batch.schema().column_with_name(name).is_none() {
            return Err(LoadError::MissingColumn {
                column: name,
                path: path.to_path_buf(),
            });
        }
    }

    let headers: Vec<String> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let target = Arc::new(build_target_schema(&headers));

    let mut out: Vec<ArrayRef> = Vec::with_capacity(batch.num_columns());
    for (i, name) in headers.iter().enumerate() {
        let arr = batch.column(i);
        let Some(ty) = column_type(name) else {
            out.push(arr.clone());
            continue;
        };

        let sarr = arr
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| ArrowError::CastError(format!("column `{name}` is not Utf8")))?;

        let typed = match ty {
            ColumnType::Timestamp => timestamp_column(sarr, name)?,
            ColumnType::Int64 => int_column(sarr, name)?,
            ColumnType::Float64 => float_column(sarr, name)?,
            ColumnType::Categorical => categorical_column(sarr)?,
        };
        out.push(typed);
    }

    RecordBatch::try_new(target, out).map_err(Into::into)
}

fn coercion(name: &str, row: usize, value: &str, target: &'static str) -> LoadError {
    LoadError::Coercion {
        column: name.to_string(),
        row,
        value: value.to_string(),
        target,
    }
}

fn timestamp_column(sarr: &StringArray, name: &str) -> Result<ArrayRef, LoadError> {
    let mut b = TimestampNanosecondBuilder::with_capacity(sarr.len());
    for (row, opt) in sarr.iter().enumerate() {
        match opt.map(clean_str) {
            None | Some("") => b.append_null(),
            Some(s) => match date_parser::parse_timestamp_nanos(s) {
                Some(ts) => b.append_value(ts),
                None => return Err(coercion(name, row, s, "timestamp")),
            },
        }
    }
    Ok(Arc::new(b.finish()) as ArrayRef)
}

fn int_column(sarr: &StringArray, name: &str) -> Result<ArrayRef, LoadError> {
    let mut b = Int64Builder::with_capacity(sarr.len());
    for (row, opt) in sarr.iter().enumerate() {
        let s = opt.map(clean_str).unwrap_or("");
        if s.is_empty() {
            return Err(coercion(name, row, s, "int64"));
        }
        let v = match s.parse::<i64>() {
            Ok(v) => v,
            // cleaned files written from an inferred float column carry
            // integral values like "2.0"
            Err(_) => match s.parse::<f64>() {
                Ok(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
                _ => return Err(coercion(name, row, s, "int64")),
            },
        };
        b.append_value(v);
    }
    Ok(Arc::new(b.finish()) as ArrayRef)
}

fn float_column(sarr: &StringArray, name: &str) -> Result<ArrayRef, LoadError> {
    let mut b = Float64Builder::with_capacity(sarr.len());
    for (row, opt) in sarr.iter().enumerate() {
        match opt.map(clean_str) {
            None | Some("") => b.append_null(),
            Some(s) => match s.parse::<f64>() {
                Ok(v) => b.append_value(v),
                Err(_) => return Err(coercion(name, row, s, "float64")),
            },
        }
    }
    Ok(Arc::new(b.finish()) as ArrayRef)
}

fn categorical_column(sarr: &StringArray) -> Result<ArrayRef, LoadError> {
    let mut b = StringDictionaryBuilder::<Int32Type>::new();
    for opt in sarr.iter() {
        match opt.map(clean_str) {
            None | Some("") => b.append_null(),
            Some(s) => {
                b.append(s)?;
            }
        }
    }
    Ok(Arc::new(b.finish()) as ArrayRef)
}
