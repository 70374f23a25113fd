use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
};

use anyhow::{Context, bail};
use clap::Parser;
use csvgrid_core::{
    FilterState, GridOptions, GridState, SortDirection, derive_view, ingest, options,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Browse a CSV dataset as a filtered, searched, sorted, paginated grid.
///
/// Prints the requested page as CSV, header row included. With
/// `--options COLUMN` it prints the filter dropdown values for that column
/// instead, one per line, narrowed by the other columns' filters.
#[derive(Debug, Parser)]
#[command(name = "csvgrid", version, about)]
struct Cli {
    /// CSV file with a header row
    input: PathBuf,

    /// Column filter as COLUMN=VALUE[,VALUE...]. Repeatable; filters on
    /// different columns are ANDed, values within one are ORed
    #[arg(long = "filter", value_name = "COLUMN=VALUES")]
    filters: Vec<String>,

    /// Case-insensitive free-text search across all columns
    #[arg(long, default_value = "")]
    search: String,

    /// Sort by this column (numeric when both cells are numbers)
    #[arg(long, value_name = "COLUMN")]
    sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Zero-based page index, clamped into the valid range
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Rows per page
    #[arg(long, default_value_t = csvgrid_core::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Print the filter options for COLUMN instead of a page of rows
    #[arg(long, value_name = "COLUMN")]
    options: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn parse_filters(specs: &[String]) -> anyhow::Result<FilterState> {
    let mut filters = FilterState::new();
    for spec in specs {
        let Some((column, values)) = spec.split_once('=') else {
            bail!("invalid --filter `{spec}`: expected COLUMN=VALUE[,VALUE...]");
        };
        filters.set(column, values.split(',').map(str::to_string).collect());
    }
    Ok(filters)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let table = ingest::read_csv(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let mut state = GridState::new();
    state.filters = parse_filters(&cli.filters)?;
    state.search = cli.search.clone();
    if let Some(column) = &cli.sort {
        state.sort.column = Some(column.clone());
        state.sort.direction = if cli.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
    }
    state.page = cli.page;

    let out: Box<dyn io::Write> = match &cli.output {
        Some(path) => Box::new(
            fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    if let Some(column) = &cli.options {
        let mut out = out;
        for value in options::options_for(column, &table, &state.filters) {
            writeln!(out, "{value}")?;
        }
        return Ok(out.flush()?);
    }

    let opts = GridOptions::builder().page_size(cli.page_size).build();
    let view = derive_view(&table, &state, &opts);
    info!(
        page = view.current_page,
        pages = view.total_pages,
        rows = view.total_rows,
        "serving page"
    );

    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(table.headers())?;
    for row in &view.visible_rows {
        wtr.write_record(table.headers().iter().map(|h| row.text(h).into_owned()))?;
    }
    Ok(wtr.flush()?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}
