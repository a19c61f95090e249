//! Row level data quality gate.
//!
//! Every row of a table is checked against a [`Schema`] before any lap times are
//! aggregated. The first row that breaks a rule stops the run with a
//! `DQFailure` naming the driver of that row and every broken field rule.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use snafu::ensure;

use crate::errors::{CustomResult, DQFailureSnafu, Error};
use crate::modules::models::table::{Row, Table, Value};

const MISSING_FIELD: &str = "Missing data for required field.";

/// Validation rule applied to a single field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldRule {
    /// A string that is not empty or whitespace only.
    DriverName,
    /// A parsed lap time.
    LapTime,
}

impl FieldRule {
    fn check(&self, value: &Value) -> CustomResult<()> {
        match self {
            FieldRule::DriverName => validate_driver(value).map(|_| ()),
            FieldRule::LapTime => validate_time(value).map(|_| ()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
}

/// The set of schemas rows can be validated against.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Schema {
    /// `driver` name plus parsed lap `time`.
    #[default]
    DriverInput,
}

impl Schema {
    pub fn name(&self) -> &'static str {
        match self {
            Schema::DriverInput => "DriverInputSchema",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Schema::DriverInput => &[
                FieldSpec { name: "driver", rule: FieldRule::DriverName },
                FieldSpec { name: "time", rule: FieldRule::LapTime },
            ],
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Schema {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "DriverInputSchema" => Ok(Schema::DriverInput),
            _ => DQFailureSnafu {
                message: format!("Unknown validation schema: {name}"),
            }
            .fail(),
        }
    }
}

/// A broken rule on one field of a row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// # Validate a driver name
/// the value has to be a string that is not empty or only whitespace
///
/// ## Returns
/// * `&str` - the validated name
pub fn validate_driver(value: &Value) -> CustomResult<&str> {
    let name = value.as_text().filter(|name| !name.trim().is_empty());

    name.ok_or_else(|| {
        DQFailureSnafu {
            message: "Invalid driver name: value is None or not a string or is empty or whitespace!",
        }
        .build()
    })
}

/// # Validate a lap time
/// the value has to be a parsed duration, raw text is rejected
///
/// ## Returns
/// * `Duration` - the validated lap time
pub fn validate_time(value: &Value) -> CustomResult<Duration> {
    value.as_duration().ok_or_else(|| {
        DQFailureSnafu {
            message: format!("Invalid time format: expected a duration, got {}!", value.kind()),
        }
        .build()
    })
}

/// # Validate a single row
/// run every field rule of the schema against the row
///
/// ## Returns
/// * `Vec<FieldError>` - the broken rules, empty for a valid row
pub fn validate_row(row: &Row, schema: Schema) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for spec in schema.fields() {
        let value = row.get(spec.name);
        let message = if value.is_null() {
            Some(MISSING_FIELD.to_string())
        } else {
            spec.rule.check(value).err().map(|error| error.to_string())
        };

        if let Some(message) = message {
            errors.push(FieldError { field: spec.name, message });
        }
    }

    errors
}

fn failure_message(row: &Row, row_number: usize, schema: Schema, errors: &[FieldError]) -> String {
    let details = errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Invalid or incomplete data for {{driver: {}}} (row {row_number}). \nAs per {schema}: {{{details}}}",
        row.get("driver"),
    )
}

/// # Validate every row of a table
/// rows are checked in order and the first row breaking a rule aborts with a
/// `DQFailure`. nothing is returned when all rows pass.
///
/// ## Arguments
/// * `table` - the table to check, time column already converted
/// * `schema` - the schema to check the rows against
pub fn validity_and_completeness(table: &Table, schema: Schema) -> CustomResult<()> {
    for (index, row) in table.rows.iter().enumerate() {
        let errors = validate_row(row, schema);

        ensure!(
            errors.is_empty(),
            DQFailureSnafu {
                message: failure_message(row, index + 1, schema, &errors),
            }
        );
    }

    Ok(())
}
