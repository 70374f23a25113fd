use bon::Builder;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    filter, options,
    page::{self, DEFAULT_PAGE_SIZE},
    search, sort,
    state::GridState,
    table::{Row, Table},
};

/// Knobs the presentation layer fixes once at startup.
///
/// `skip_filter_columns` lists header columns that get no filter dropdown
/// (and therefore no option list in the view model); the rows themselves
/// still show those columns.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct GridOptions {
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    #[builder(default)]
    pub skip_filter_columns: Vec<String>,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            page_size: DEFAULT_PAGE_SIZE,
            skip_filter_columns: Vec::new(),
        }
    }
}

/// Everything the presentation layer needs to render one state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    /// The rows of the effective page, in display order.
    pub visible_rows: Vec<Row>,
    /// Effective (clamped) page index.
    pub current_page: usize,
    pub total_pages: usize,
    /// Row count after filtering and searching, before pagination.
    pub total_rows: usize,
    /// Option lists per filterable column, in header order.
    pub options_by_column: Vec<(String, Vec<String>)>,
}

impl ViewModel {
    pub fn options(&self, column: &str) -> Option<&[String]> {
        self.options_by_column
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_slice())
    }
}

/// Derive the complete view for one interaction state: filter -> search ->
/// sort -> paginate, plus the per-column option lists.
///
/// Pure function of its inputs; the row store is never mutated. Called on
/// every state change, a full re-derivation each time.
pub fn derive_view(table: &Table, state: &GridState, opts: &GridOptions) -> ViewModel {
    let filtered = filter::apply(table, &state.filters);
    let searched = search::search(table, filtered, &state.search);
    let total_rows = searched.len();
    let ordered = sort::sort(
        table,
        searched,
        state.sort.column.as_deref(),
        state.sort.direction,
    );

    let page = page::paginate(ordered.len(), state.page, opts.page_size);
    let visible_rows: Vec<Row> = ordered[page.start..page.end]
        .iter()
        .filter_map(|&i| table.row(i))
        .cloned()
        .collect();

    let options_by_column = table
        .headers()
        .iter()
        .filter(|h| !opts.skip_filter_columns.contains(*h))
        .map(|h| (h.clone(), options::options_for(h, table, &state.filters)))
        .collect();

    debug!(
        total = table.len(),
        matched = total_rows,
        page = page.page_index,
        pages = page.total_pages,
        "derived view"
    );

    ViewModel {
        visible_rows,
        current_page: page.page_index,
        total_pages: page.total_pages,
        total_rows,
        options_by_column,
    }
}

/// Recency memoization over [`derive_view`].
///
/// The row store is immutable for the process lifetime, so equality of
/// `(GridState, GridOptions)` with the previous call is enough to reuse
/// the last view. Only the most recent derivation is kept; anything older
/// has been superseded by a newer state change anyway. A caller that
/// swaps in a different row store must [`invalidate`](Self::invalidate)
/// first, since the table itself is not part of the key.
#[derive(Debug, Default)]
pub struct ViewCache {
    last: Option<(GridState, GridOptions, ViewModel)>,
    hits: u64,
    misses: u64,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn derive(&mut self, table: &Table, state: &GridState, opts: &GridOptions) -> ViewModel {
        if let Some((cached_state, cached_opts, view)) = &self.last {
            if cached_state == state && cached_opts == opts {
                self.hits += 1;
                trace!(hits = self.hits, "view cache hit");
                return view.clone();
            }
        }
        self.misses += 1;
        let view = derive_view(table, state, opts);
        self.last = Some((state.clone(), opts.clone(), view.clone()));
        view
    }

    /// Forget the last derivation. Required before deriving against a
    /// different table with the same cache.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
