use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, log_enabled, Level};

use f1_lap_analytics::errors::CustomResult;
use f1_lap_analytics::modules::config::{Config, Overrides};
use f1_lap_analytics::modules::csv_table::write_top_drivers_to_writer;
use f1_lap_analytics::modules::helpers::logging::setup_logging;
use f1_lap_analytics::modules::pipeline;
use f1_lap_analytics::Schema;

/// Top 3 drivers by average lap time, with their fastest lap.
#[derive(Parser, Debug)]
#[command(name = "f1-top-drivers")]
#[command(author, version, about)]
struct Args {
    /// Input CSV with `driver` and `time` columns (defaults to $F1HOME/data/f1_drivers_input.csv)
    input: Option<PathBuf>,

    /// Output CSV (defaults to $F1HOME/data/top_3_drivers.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the run log (defaults to $F1HOME/logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// .env file to load instead of the default lookup
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Schema the input rows are validated against
    #[arg(long, default_value = "DriverInputSchema")]
    schema: Schema,
}

fn run(args: Args) -> CustomResult<()> {
    let config = Config::load(
        args.env_file.as_deref(),
        Overrides {
            input_path: args.input,
            output_path: args.output,
            log_directory: args.log_dir,
        },
    )?;
    setup_logging(&config.log_directory, config.logging_level)?;

    let rows = pipeline::run(&config.input_path, &config.output_path, args.schema)?;

    if let Err(err) = write_top_drivers_to_writer(io::stdout(), &rows) {
        error!(target: "main", "Unable to print the top drivers: {}", err);
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // before logging is set up the message still has to reach the user
            if log_enabled!(target: "main", Level::Error) {
                error!(target: "main", "{}", err);
            } else {
                eprintln!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}
