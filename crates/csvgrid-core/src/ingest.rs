use std::{io, path::Path};

use tracing::debug;

use crate::{
    err::IngestError,
    table::{Row, Table},
};

/// Load a delimited text source with a header row into a [`Table`].
///
/// Values are kept as verbatim text; numeric typing is inferred later,
/// per value, at comparison time. Short records are accepted: the missing
/// trailing columns are simply absent from the row, which the engine
/// treats as empty. Blank lines are skipped by the reader.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Table, IngestError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path.as_ref())?;
    from_csv_reader(rdr)
}

/// Same as [`read_csv`] over any `io::Read` source.
pub fn from_reader<R: io::Read>(reader: R) -> Result<Table, IngestError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    from_csv_reader(rdr)
}

fn from_csv_reader<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Table, IngestError> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, field)| (h.clone(), field))
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "loaded CSV");
    Ok(Table::new(headers, rows))
}
