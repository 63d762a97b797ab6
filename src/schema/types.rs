// src/schema/types.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Semantic type a declared column is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Naive timestamp, nanosecond precision.
    Timestamp,
    /// Discrete identifier or count.
    Int64,
    /// Continuous financial/distance metric.
    Float64,
    /// Flag drawn from a small set of recurring values, dictionary-encoded.
    Categorical,
}

pub const TIMESTAMP_COLUMNS: [&str; 2] = ["tpep_pickup_datetime", "tpep_dropoff_datetime"];

pub const INT_COLUMNS: [&str; 6] = [
    "VendorID",
    "passenger_count",
    "RatecodeID",
    "PULocationID",
    "DOLocationID",
    "payment_type",
];

pub const FLOAT_COLUMNS: [&str; 12] = [
    "trip_distance",
    "fare_amount",
    "extra",
    "mta_tax",
    "tip_amount",
    "tolls_amount",
    "improvement_surcharge",
    "total_amount",
    "congestion_surcharge",
    "Airport_fee",
    "fare_per_mile",
    "trip_duration",
];

pub const CATEGORICAL_COLUMNS: [&str; 1] = ["store_and_fwd_flag"];

static COLUMN_TYPES: Lazy<HashMap<&'static str, ColumnType>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for name in TIMESTAMP_COLUMNS {
        map.insert(name, ColumnType::Timestamp);
    }
    for name in INT_COLUMNS {
        map.insert(name, ColumnType::Int64);
    }
    for name in FLOAT_COLUMNS {
        map.insert(name, ColumnType::Float64);
    }
    for name in CATEGORICAL_COLUMNS {
        map.insert(name, ColumnType::Categorical);
    }
    map
});

/// Look up the declared type for a column name, `None` for passthrough columns.
/// Case-sensitive: the cleaned file carries the TLC header names verbatim.
pub fn column_type(name: &str) -> Option<ColumnType> {
    COLUMN_TYPES.get(name).copied()
}

/// All declared columns, in a fixed order (timestamps, ints, floats, flags).
pub fn declared_columns() -> impl Iterator<Item = &'static str> {
    TIMESTAMP_COLUMNS
        .iter()
        .chain(INT_COLUMNS.iter())
        .chain(FLOAT_COLUMNS.iter())
        .chain(CATEGORICAL_COLUMNS.iter())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_column_has_a_type() {
        assert_eq!(declared_columns().count(), 21);
        for name in declared_columns() {
            assert!(column_type(name).is_some(), "no type for {name}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(column_type("VendorID"), Some(ColumnType::Int64));
        assert_eq!(column_type("vendorid"), None);
        assert_eq!(column_type("fare_amount"), Some(ColumnType::Float64));
        assert_eq!(column_type("store_and_fwd_flag"), Some(ColumnType::Categorical));
        assert_eq!(column_type("tpep_pickup_datetime"), Some(ColumnType::Timestamp));
        assert_eq!(column_type("not_a_column"), None);
    }
}
