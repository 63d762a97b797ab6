// src/schema/arrow.rs

use arrow::datatypes::{DataType, Field, Schema, TimeUnit};

use super::types::{column_type, ColumnType};

/// Map a semantic column type into an Arrow DataType.
///
/// - Timestamp    → Timestamp(ns), zone-naive
/// - Int64        → Int64
/// - Float64      → Float64
/// - Categorical  → Dictionary(Int32, Utf8)
pub fn map_to_arrow_type(ty: ColumnType) -> DataType {
    match ty {
        ColumnType::Timestamp => DataType::Timestamp(TimeUnit::Nanosecond, None),
        ColumnType::Int64 => DataType::Int64,
        ColumnType::Float64 => DataType::Float64,
        ColumnType::Categorical => {
            DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8))
        }
    }
}

/// Build the target schema for a header row: declared columns get their mapped
/// type, anything else stays Utf8 and passes through untouched.
pub fn build_target_schema(headers: &[String]) -> Schema {
    let fields: Vec<Field> = headers
        .iter()
        .map(|name| {
            let dt = match column_type(name) {
                Some(ty) => map_to_arrow_type(ty),
                None => DataType::Utf8,
            };
            Field::new(name, dt, /* nullable = */ true)
        })
        .collect();

    Schema::new(fields)
}
