//! Reading the lap table from CSV and writing the top drivers back out.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Writer};
use snafu::ResultExt;

use crate::errors::{CustomResult, ReadInputSnafu, WriteOutputSnafu};
use crate::modules::models::driver::TopDriverRow;
use crate::modules::models::table::{Row, Table, Value};

/// # Read a table from a CSV file
/// the first line holds the column names. empty cells, and cells missing from a
/// short row, are read as null.
pub fn read_table(path: &Path) -> CustomResult<Table> {
    let file = File::open(path)
        .map_err(csv::Error::from)
        .context(ReadInputSnafu { path })?;

    read_table_from_reader(file).context(ReadInputSnafu { path })
}

pub fn read_table_from_reader<R: Read>(reader: R) -> Result<Table, csv::Error> {
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut table = Table {
        columns,
        rows: Vec::new(),
    };

    for record in reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (column, cell) in table.columns.iter().zip(record.iter()) {
            let value = if cell.is_empty() { Value::Null } else { Value::from(cell) };
            row.set(column, value);
        }
        table.push(row);
    }

    Ok(table)
}

/// # Write the top drivers to a CSV file
/// writes a header line followed by one line per driver, no index column.
pub fn write_top_drivers(path: &Path, rows: &[TopDriverRow]) -> CustomResult<()> {
    let file = File::create(path)
        .map_err(csv::Error::from)
        .context(WriteOutputSnafu { path })?;

    write_top_drivers_to_writer(file, rows).context(WriteOutputSnafu { path })
}

pub fn write_top_drivers_to_writer<W: Write>(writer: W, rows: &[TopDriverRow]) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(writer);

    if rows.is_empty() {
        writer.write_record(["driver", "average_lap_time", "fastest_lap_time"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
