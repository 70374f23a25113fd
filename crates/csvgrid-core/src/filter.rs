use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Per-column allowed-value sets.
///
/// A column absent from the map, or mapped to an empty set, imposes no
/// constraint. Values are canonical display strings; their order is
/// preserved for display but matching is plain membership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    columns: HashMap<String, Vec<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the allowed values for one column. An empty vec keeps the
    /// column listed (the dropdown still shows it) but unconstrained.
    pub fn set(&mut self, column: impl Into<String>, values: Vec<String>) {
        self.columns.insert(column.into(), values);
    }

    pub fn values(&self, column: &str) -> Option<&[String]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    /// Drop a column's entry entirely. Unlike `set` with an empty vec, the
    /// column no longer reports stored values at all.
    pub fn remove(&mut self, column: &str) {
        self.columns.remove(column);
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// True when no column carries a non-empty allowed set.
    pub fn is_unconstrained(&self) -> bool {
        self.columns.values().all(Vec::is_empty)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns.iter().map(|(c, v)| (c.as_str(), v.as_slice()))
    }
}

impl<C: Into<String>, V: Into<String>, I: IntoIterator<Item = V>> FromIterator<(C, I)>
    for FilterState
{
    fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
        FilterState {
            columns: iter
                .into_iter()
                .map(|(c, vs)| (c.into(), vs.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

/// Filter Engine: AND semantics across columns, OR semantics within a
/// column's allowed set. Returns matching row indices in input order.
///
/// Membership compares canonical display strings, so a typed number and
/// its textual form match each other. Constrained columns that are not in
/// the header are no-ops, and a row missing a constrained column reads as
/// the empty string.
pub fn apply(table: &Table, filters: &FilterState) -> Vec<usize> {
    apply_excluding(table, filters, None)
}

/// Same as [`apply`], with one column's own constraint ignored. The Option
/// Resolver uses this to keep a column's option list independent of the
/// user's own selection for that column.
pub(crate) fn apply_excluding(
    table: &Table,
    filters: &FilterState,
    excluded: Option<&str>,
) -> Vec<usize> {
    let constraints: Vec<(&str, HashSet<&str>)> = filters
        .iter()
        .filter(|(column, values)| {
            !values.is_empty() && Some(*column) != excluded && table.has_column(column)
        })
        .map(|(column, values)| (column, values.iter().map(String::as_str).collect()))
        .collect();

    if constraints.is_empty() {
        return table.all_indices();
    }

    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            constraints
                .iter()
                .all(|(column, allowed)| allowed.contains(row.text(column).as_ref()))
        })
        .map(|(i, _)| i)
        .collect()
}
