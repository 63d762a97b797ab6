pub mod arrow;
pub mod types;

pub use arrow::{build_target_schema, map_to_arrow_type};
pub use types::{column_type, declared_columns, ColumnType};
