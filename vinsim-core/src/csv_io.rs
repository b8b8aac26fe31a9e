//! Flat CSV export and import of the daily record table.
//!
//! The CSV file is the single persistence surface of the toolkit: the
//! simulator writes it once, reporting commands read it back. Reads
//! validate the full column set up front so that schema drift fails loudly
//! instead of producing half-empty aggregates.

use crate::error::{Error, Result};
use crate::record::{DailyRecord, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Serialize records to CSV with the canonical header row.
pub fn write_records<W: Write>(writer: W, records: &[DailyRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write records to a CSV file at `path`, creating or truncating it.
pub fn write_records_to_path<P: AsRef<Path>>(path: P, records: &[DailyRecord]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_records(file, records)?;
    log::info!(
        "Wrote {} daily records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Deserialize records from CSV, validating the schema first.
///
/// Fails with [`Error::MissingColumns`] when any required column is absent
/// and with [`Error::EmptyTable`] when the file holds a header but no rows.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<DailyRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing));
    }

    let records = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<DailyRecord>, _>>()?;
    if records.is_empty() {
        return Err(Error::EmptyTable);
    }
    Ok(records)
}

/// Read records from a CSV file at `path`.
pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DailyRecord>> {
    let file = File::open(path.as_ref())?;
    let records = read_records(file)?;
    log::info!(
        "Read {} daily records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}
