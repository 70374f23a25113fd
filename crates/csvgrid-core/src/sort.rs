use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    table::{Row, Table},
    value::Value,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

/// At most one active (column, direction) pair. `None` direction is
/// equivalent to no active sort column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some() && self.direction != SortDirection::None
    }

    /// The 3-state header toggle: selecting the active column cycles
    /// none -> ascending -> descending -> none; selecting a different
    /// column always restarts at ascending on that column.
    pub fn toggle(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            match self.direction {
                SortDirection::None => self.direction = SortDirection::Ascending,
                SortDirection::Ascending => self.direction = SortDirection::Descending,
                SortDirection::Descending => {
                    self.column = None;
                    self.direction = SortDirection::None;
                },
            }
        } else {
            self.column = Some(column.to_string());
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Sort Engine: order `indices` by the named column.
///
/// No column, a `None` direction, or a column missing from the header all
/// leave the input order untouched. The sort is stable, so equal keys keep
/// their pre-sort (filtered + searched) relative order.
pub fn sort(
    table: &Table,
    mut indices: Vec<usize>,
    column: Option<&str>,
    direction: SortDirection,
) -> Vec<usize> {
    let Some(column) = column else {
        return indices;
    };
    if direction == SortDirection::None || !table.has_column(column) {
        return indices;
    }

    indices.sort_by(|&x, &y| {
        let ord = match (table.row(x), table.row(y)) {
            (Some(a), Some(b)) => cell_cmp(a, b, column),
            (None, None) => Ordering::Equal,
            (None, _) => Ordering::Less,
            (_, None) => Ordering::Greater,
        };
        match direction {
            SortDirection::Descending => ord.reverse(),
            _ => ord,
        }
    });
    indices
}

/// Compare one column of two rows: numeric when both cells read as
/// numbers, otherwise case-insensitive lexicographic over canonical text.
fn cell_cmp(a: &Row, b: &Row, column: &str) -> Ordering {
    let a_val = a.get(column);
    let b_val = b.get(column);

    if let (Some(x), Some(y)) = (
        a_val.and_then(Value::as_num),
        b_val.and_then(Value::as_num),
    ) {
        return compare_float(x, y);
    }

    let a_text = a_val.map_or_else(String::new, |v| v.display().to_lowercase());
    let b_text = b_val.map_or_else(String::new, |v| v.display().to_lowercase());
    a_text.cmp(&b_text)
}

// `as_num` never yields NaN, and `total_cmp` is total regardless, so the
// numeric branch cannot break `sort_by`'s ordering requirements.
#[inline]
fn compare_float(f1: f64, f2: f64) -> Ordering {
    f1.total_cmp(&f2)
}
