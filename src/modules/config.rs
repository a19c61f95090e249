use std::env;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use snafu::ResultExt;

use crate::errors::{CustomResult, MissingHomeSnafu};

pub const HOME_VAR: &str = "F1HOME";
pub const LOGGING_LEVEL_VAR: &str = "LOGGING_LEVEL";

/// Paths and settings of one run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub log_directory: PathBuf,
    pub logging_level: LevelFilter,
}

/// Values given on the command line, these win over the environment.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Overrides {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub log_directory: Option<PathBuf>,
}

impl Config {
    /// # Load the configuration
    /// loads the `.env` file (the given one, or the default lookup) and reads
    /// `F1HOME` and `LOGGING_LEVEL` from the environment.
    pub fn load(env_file: Option<&Path>, overrides: Overrides) -> CustomResult<Config> {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path).ok();
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }

        let home = env::var(HOME_VAR).map(PathBuf::from);
        let logging_level = parse_level(env::var(LOGGING_LEVEL_VAR).ok().as_deref());

        Config::resolve(home, logging_level, overrides)
    }

    /// fill in every path not overridden from the home directory
    pub fn resolve(
        home: Result<PathBuf, env::VarError>,
        logging_level: LevelFilter,
        overrides: Overrides,
    ) -> CustomResult<Config> {
        let needs_home = overrides.input_path.is_none()
            || overrides.output_path.is_none()
            || overrides.log_directory.is_none();

        let home = if needs_home {
            Some(home.context(MissingHomeSnafu)?)
        } else {
            None
        };
        let from_home = |path: Option<PathBuf>, default: &str| -> PathBuf {
            match (path, &home) {
                (Some(path), _) => path,
                (None, Some(home)) => home.join(default),
                (None, None) => PathBuf::from(default),
            }
        };

        Ok(Config {
            input_path: from_home(overrides.input_path, "data/f1_drivers_input.csv"),
            output_path: from_home(overrides.output_path, "data/top_3_drivers.csv"),
            log_directory: from_home(overrides.log_directory, "logs"),
            logging_level,
        })
    }
}

/// map a `LOGGING_LEVEL` value to a level, anything unknown is `Info`
pub fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.map(str::trim) {
        Some("OFF") => LevelFilter::Off,
        Some("ERROR") => LevelFilter::Error,
        Some("WARN") => LevelFilter::Warn,
        Some("DEBUG") => LevelFilter::Debug,
        Some("TRACE") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
