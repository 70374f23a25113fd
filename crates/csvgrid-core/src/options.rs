use itertools::Itertools;

use crate::{
    filter::{self, FilterState},
    table::Table,
};

/// Option Resolver: the distinct values reachable for `column` under all
/// *other* active filters, in first-occurrence order, empty cells excluded.
///
/// The column's own constraint is deliberately ignored so that selecting a
/// value can never remove it from its own dropdown; the search term plays
/// no part either. Unknown columns resolve to an empty list.
pub fn options_for(column: &str, table: &Table, filters: &FilterState) -> Vec<String> {
    if !table.has_column(column) {
        return Vec::new();
    }

    filter::apply_excluding(table, filters, Some(column))
        .into_iter()
        .filter_map(|i| table.row(i))
        .map(|row| row.text(column).into_owned())
        .filter(|v| !v.is_empty())
        .unique()
        .collect()
}
