use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use snafu::ensure;

use crate::errors::{CustomResult, MissingColumnSnafu, ParseSnafu};
use crate::modules::models::table::{Table, Value};

const NANOS_PER_MILLI: u32 = 1_000_000;

fn clock_regex() -> &'static Regex {
    static CLOCK: OnceLock<Regex> = OnceLock::new();
    CLOCK.get_or_init(|| {
        Regex::new(r"^([0-9]+):([0-9]+):([0-9]+)(?:\.([0-9]{1,9}))?$").expect("clock pattern is valid")
    })
}

/// # Parse a raw lap time
/// parse a lap time as written in the input, `M:SS.mmm`. the value is read as
/// `HH:MM:SS.fffffffff` with an hour field of `00`, so up to nanosecond precision
/// is kept.
///
/// ## Arguments
/// * `raw` - the lap time as text
///
/// ## Returns
/// * `Duration` - the lap time
pub fn parse_lap_time(raw: &str) -> CustomResult<Duration> {
    let clock = format!("00:{}", raw.trim());

    let captures = clock_regex().captures(&clock).ok_or_else(|| {
        ParseSnafu {
            value: raw,
            reason: "expected a lap time like M:SS.mmm",
        }
        .build()
    })?;

    let parse_digits = |digits: &str| -> CustomResult<u64> {
        digits.parse::<u64>().map_err(|error| {
            ParseSnafu {
                value: raw,
                reason: error.to_string(),
            }
            .build()
        })
    };
    let hours = parse_digits(&captures[1])?;
    let minutes = parse_digits(&captures[2])?;
    let seconds = parse_digits(&captures[3])?;

    ensure!(
        minutes < 60 && seconds < 60,
        ParseSnafu {
            value: raw,
            reason: "minutes and seconds must be below 60",
        }
    );

    // right pad the fraction to nanoseconds, "0012" -> 001_200_000
    let nanos = match captures.get(4) {
        Some(fraction) => parse_digits(&format!("{:0<9}", fraction.as_str()))? as u32,
        None => 0,
    };

    Ok(Duration::new(hours * 3600 + minutes * 60 + seconds, nanos))
}

/// # Format a lap time for output
/// format a duration as `MM:SS.mmm`. minutes are not wrapped at an hour and the
/// milliseconds are truncated, so this can not be parsed back into the exact value.
pub fn format_lap_time(time: Duration) -> String {
    let total_seconds = time.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let milliseconds = time.subsec_nanos() / NANOS_PER_MILLI;

    format!("{minutes:02}:{seconds:02}.{milliseconds:03}")
}

/// # Convert a text column into lap times
/// every text cell of `column` is parsed with `parse_lap_time`. null cells are kept
/// so validation can report them, cells that already hold a duration are left alone.
///
/// ## Arguments
/// * `table` - the table to convert, consumed
/// * `column` - name of the column holding the lap times
///
/// ## Returns
/// * `Table` - the table with the converted column
pub fn time_conversion(mut table: Table, column: &str) -> CustomResult<Table> {
    ensure!(table.has_column(column), MissingColumnSnafu { column });

    for row in table.rows.iter_mut() {
        if let Value::Text(raw) = row.get(column) {
            let time = parse_lap_time(raw)?;
            row.set(column, time);
        }
    }

    Ok(table)
}
