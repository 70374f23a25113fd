use crate::table::Table;

/// Search Engine: keep rows where any header column's canonical text,
/// lower-cased, contains the lower-cased `term` as a substring. Order is
/// preserved.
///
/// An empty term returns the input unchanged. This is the identity fast
/// path, not a degenerate match: no per-cell work happens at all.
pub fn search(table: &Table, mut indices: Vec<usize>, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return indices;
    }

    let needle = term.to_lowercase();
    indices.retain(|&i| {
        table.row(i).is_some_and(|row| {
            table
                .headers()
                .iter()
                .any(|h| row.text(h).to_lowercase().contains(&needle))
        })
    });
    indices
}
