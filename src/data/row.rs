use crate::{
    data::Value,
    error::{Error, Result},
};
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

/// One record of tabular data: column name to cell value, in column order.
///
/// Column names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(column.into(), value.into());
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<IndexMap<String, Value>> for Row {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

/// Column names known for a dataset, in first-row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema(IndexSet<String>);

impl Schema {
    /// The schema of "no dataset yet": every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_row(row: &Row) -> Self {
        row.columns().collect()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains(column)
    }

    /// The first column, used to name exported files.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Schema {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A fetched, non-empty sequence of rows together with its schema.
///
/// The schema is taken from the first row once, at construction. Later rows
/// may carry other columns; they are rendered as-is but never widen the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
    schema: Schema,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        let schema = rows.first().map(Schema::from_row).ok_or(Error::EmptyDataset)?;
        Ok(Self { rows, schema })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Row at a 0-based index.
    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows
            .get(index)
            .ok_or(Error::RowOutOfRange { row: index + 1, total: self.rows.len() })
    }

    pub fn first_column(&self) -> Option<&str> {
        self.schema.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Never true for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
