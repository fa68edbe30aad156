//! Tabular input: scalar cell values, rows and datasets.
//!
//! - `value`: the tagged scalar stored in every cell
//! - `row`: a single record plus the dataset/schema built from many of them
//! - `decode`: turning a JSON payload into rows

pub mod decode;
pub mod row;
pub mod value;

pub use decode::parse_rows;
pub use row::{Dataset, Row, Schema};
pub use value::Value;
