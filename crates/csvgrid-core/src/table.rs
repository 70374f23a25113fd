use std::{borrow::Cow, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One record of the dataset: a mapping from column name to scalar value.
/// A column missing from the map reads as absent/empty everywhere in the
/// engine; it is never a hard failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Canonical text of one cell. Absent columns read as the empty string.
    pub fn text(&self, column: &str) -> Cow<'_, str> {
        self.values
            .get(column)
            .map_or(Cow::Borrowed(""), Value::display)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<C: Into<String>, V: Into<Value>> FromIterator<(C, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (C, V)>>(iter: T) -> Self {
        Row {
            values: iter
                .into_iter()
                .map(|(c, v)| (c.into(), v.into()))
                .collect(),
        }
    }
}

/// The Row Store: the immutable full dataset plus its header list, as
/// produced by ingestion. Populated once at load time and read-only for
/// the remainder of the process; every derived view is recomputed from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Table { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Row indices in ingestion order, the starting order of the
    /// filter -> search -> sort -> paginate pipeline.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }
}
