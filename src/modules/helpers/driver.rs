use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::modules::helpers::math::Math;
use crate::modules::models::driver::{DriverAverage, DriverBestLap, DriverSummary};
use crate::modules::models::lap::LapRecord;

pub const TOP_DRIVER_COUNT: usize = 3;

pub struct DriverHelpers {}

impl DriverHelpers {
    /// group the lap times by the exact driver name, keyed in name order
    fn laps_by_driver(laps: &[LapRecord]) -> BTreeMap<&str, Vec<Duration>> {
        let mut grouped: BTreeMap<&str, Vec<Duration>> = BTreeMap::new();
        for lap in laps {
            grouped.entry(lap.driver.as_str()).or_default().push(lap.time);
        }

        grouped
    }

    /// # Average lap time per driver
    /// one row per distinct driver with the mean of all their laps.
    ///
    /// ## Arguments
    /// * `laps` - validated laps
    ///
    /// ## Returns
    /// * `Vec<DriverAverage>` - averages, ordered by driver name
    pub fn average_time_per_driver(laps: &[LapRecord]) -> Vec<DriverAverage> {
        DriverHelpers::laps_by_driver(laps)
            .into_iter()
            .filter_map(|(driver, times)| {
                Math::mean(&times).map(|average_lap_time| DriverAverage {
                    driver: driver.to_string(),
                    average_lap_time,
                })
            })
            .collect()
    }

    /// # Fastest lap per driver
    /// one row per distinct driver with their quickest lap. on equal times the
    /// earliest lap in the input is the one kept.
    ///
    /// ## Arguments
    /// * `laps` - validated laps
    ///
    /// ## Returns
    /// * `Vec<DriverBestLap>` - fastest laps, ordered by driver name
    pub fn best_lap_per_driver(laps: &[LapRecord]) -> Vec<DriverBestLap> {
        DriverHelpers::laps_by_driver(laps)
            .into_iter()
            .filter_map(|(driver, times)| {
                Math::min(&times).map(|fastest_lap_time| DriverBestLap {
                    driver: driver.to_string(),
                    fastest_lap_time,
                })
            })
            .collect()
    }

    /// # Join averages with fastest laps
    /// inner join on the driver name, drivers missing on either side are dropped.
    /// rows keep the order of `averages`.
    pub fn join_on_driver(averages: &[DriverAverage], best_laps: &[DriverBestLap]) -> Vec<DriverSummary> {
        let fastest: HashMap<&str, Duration> = best_laps
            .iter()
            .map(|best| (best.driver.as_str(), best.fastest_lap_time))
            .collect();

        averages
            .iter()
            .filter_map(|average| {
                fastest.get(average.driver.as_str()).map(|fastest_lap_time| {
                    DriverSummary::new(&average.driver, average.average_lap_time, *fastest_lap_time)
                })
            })
            .collect()
    }

    /// # Top 3 drivers by average lap time
    /// sorted on average lap time, the fastest lap breaks ties. the sort is stable so
    /// drivers equal on both keep their input order. fewer than 3 rows are returned
    /// when there are fewer drivers.
    pub fn top_3_drivers_by_average_time(drivers: &[DriverSummary]) -> Vec<DriverSummary> {
        let mut sorted = drivers.to_vec();
        sorted.sort_by_key(|driver| (driver.average_lap_time, driver.fastest_lap_time));
        sorted.truncate(TOP_DRIVER_COUNT);

        sorted
    }
}
