use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// A raw lap time could not be turned into a duration.
    #[snafu(display("Unable to parse lap time {value:?}: {reason}"))]
    ParseError { value: String, reason: String },

    /// A record failed schema validation. The message is meant to be shown as is.
    #[snafu(display("{message}"))]
    DQFailure { message: String },

    #[snafu(display("Column {column:?} is missing from the input table"))]
    MissingColumn { column: String },

    #[snafu(display("Unable to read input CSV {}: {source}", path.display()))]
    ReadInput { path: PathBuf, source: csv::Error },

    #[snafu(display("Unable to write output CSV {}: {source}", path.display()))]
    WriteOutput { path: PathBuf, source: csv::Error },

    #[snafu(display("Unable to create log directory {}: {source}", path.display()))]
    CreateLogDirectory { path: PathBuf, source: std::io::Error },

    #[snafu(display("F1HOME must be set when input, output or log paths are not given: {source}"))]
    MissingHome { source: std::env::VarError },

    #[snafu(display("Unable to set up logging: {source}"))]
    Logging { source: fern::InitError },
}

pub type CustomResult<T, E = Error> = Result<T, E>;
