use std::time::Duration;

use serde::Serialize;

/// Mean lap time of one driver.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DriverAverage {
    pub driver: String,
    pub average_lap_time: Duration,
}

/// Fastest lap time of one driver.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DriverBestLap {
    pub driver: String,
    pub fastest_lap_time: Duration,
}

/// Average and fastest lap of one driver, joined on the driver name.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DriverSummary {
    pub driver: String,
    pub average_lap_time: Duration,
    pub fastest_lap_time: Duration,
}

impl DriverSummary {
    pub fn new(driver: &str, average_lap_time: Duration, fastest_lap_time: Duration) -> DriverSummary {
        DriverSummary {
            driver: driver.to_string(),
            average_lap_time,
            fastest_lap_time,
        }
    }
}

/// A row of the output table, lap times already formatted as `MM:SS.mmm`.
#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct TopDriverRow {
    pub driver: String,
    pub average_lap_time: String,
    pub fastest_lap_time: String,
}
