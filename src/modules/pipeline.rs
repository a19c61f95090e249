//! The full run: read laps, validate, rank, write the top drivers.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::errors::CustomResult;
use crate::modules::csv_table::{read_table, write_top_drivers};
use crate::modules::helpers::driver::DriverHelpers;
use crate::modules::helpers::time::{format_lap_time, time_conversion};
use crate::modules::models::driver::{DriverSummary, TopDriverRow};
use crate::modules::models::lap::LapRecord;
use crate::modules::models::table::Table;
use crate::modules::quality_control::{validity_and_completeness, Schema};

pub const TIME_COLUMN: &str = "time";

/// typed laps of a validated table
pub fn lap_records(table: &Table) -> CustomResult<Vec<LapRecord>> {
    table.rows.iter().map(LapRecord::try_from).collect()
}

/// # Top 3 drivers of a raw lap table
/// converts the time column, validates every row against `schema` and ranks the
/// drivers on their average lap time. does no logging and no I/O.
///
/// ## Arguments
/// * `table` - raw `driver,time` table, times still text
/// * `schema` - schema to validate the converted rows against
///
/// ## Returns
/// * `Vec<DriverSummary>` - at most 3 drivers, fastest average first
pub fn top_3_drivers(table: Table, schema: Schema) -> CustomResult<Vec<DriverSummary>> {
    top_3_drivers_with_progress(table, schema, |_| {})
}

/// same as `top_3_drivers`, `progress` is called with a description before each stage
pub fn top_3_drivers_with_progress<F>(table: Table, schema: Schema, mut progress: F) -> CustomResult<Vec<DriverSummary>>
where
    F: FnMut(&str),
{
    progress("Transforming Inputs...");
    let table = time_conversion(table, TIME_COLUMN)?;

    progress("Validating Inputs...");
    validity_and_completeness(&table, schema)?;
    let laps = lap_records(&table)?;

    progress("Calculating average lap time per driver...");
    let averages = DriverHelpers::average_time_per_driver(&laps);

    progress("Calculating best lap time per driver...");
    let best_laps = DriverHelpers::best_lap_per_driver(&laps);

    progress("Extracting top 3 drivers by average time");
    let drivers = DriverHelpers::join_on_driver(&averages, &best_laps);

    Ok(DriverHelpers::top_3_drivers_by_average_time(&drivers))
}

/// format the lap times of the ranked drivers for output
pub fn format_output(drivers: &[DriverSummary]) -> Vec<TopDriverRow> {
    drivers
        .iter()
        .map(|driver| TopDriverRow {
            driver: driver.driver.clone(),
            average_lap_time: format_lap_time(driver.average_lap_time),
            fastest_lap_time: format_lap_time(driver.fastest_lap_time),
        })
        .collect()
}

/// elapsed run time as `H:MM:SS`
fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}:{:02}", seconds / 3600, (seconds / 60) % 60, seconds % 60)
}

/// # Run the analysis
/// reads the input CSV, computes the top 3 drivers and writes them to the output
/// CSV. nothing is written when any step fails.
///
/// ## Arguments
/// * `input_path` - CSV with `driver` and `time` columns
/// * `output_path` - where the top 3 drivers are written
/// * `schema` - schema to validate the input rows against
///
/// ## Returns
/// * `Vec<TopDriverRow>` - the rows that were written
pub fn run(input_path: &Path, output_path: &Path, schema: Schema) -> CustomResult<Vec<TopDriverRow>> {
    let start = Instant::now();
    info!(target: "pipeline:run", "Starting F1 drivers analysis execution");

    info!(target: "pipeline:run", "Reading input CSV {}", input_path.display());
    let inputs = read_table(input_path)?;

    let top_drivers = top_3_drivers_with_progress(inputs, schema, |stage| {
        info!(target: "pipeline:run", "{}", stage);
    })?;

    info!(target: "pipeline:run", "Exporting top 3 drivers data to CSV: {}", output_path.display());
    let rows = format_output(&top_drivers);
    write_top_drivers(output_path, &rows)?;

    info!(target: "pipeline:run", "Run completed in: {}", format_elapsed(start.elapsed().as_secs()));
    Ok(rows)
}
