#![deny(unused_must_use)]
// Don't allow dbg! prints in release.
#![cfg_attr(not(debug_assertions), deny(clippy::dbg_macro))]

pub use crate::{
    err::IngestError,
    filter::FilterState,
    page::{DEFAULT_PAGE_SIZE, Page},
    sort::{SortDirection, SortState},
    state::GridState,
    table::{Row, Table},
    value::Value,
    view::{GridOptions, ViewCache, ViewModel, derive_view},
};

pub mod err;
pub mod filter;
pub mod ingest;
pub mod options;
pub mod page;
pub mod search;
pub mod sort;
pub mod state;
pub mod table;
pub mod value;
pub mod view;
