use std::time::Duration;

use snafu::OptionExt;

use crate::errors::{DQFailureSnafu, Error};
use crate::modules::models::table::Row;

/// One timed lap of a driver.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct LapRecord {
    pub driver: String,
    pub time: Duration,
}

impl LapRecord {
    pub fn new(driver: &str, time: Duration) -> LapRecord {
        LapRecord {
            driver: driver.to_string(),
            time,
        }
    }
}

impl TryFrom<&Row> for LapRecord {
    type Error = Error;

    /// # Build a lap from a table row
    /// expects a row that already passed validation, a row without a text driver
    /// or a duration time is reported as a `DQFailure`
    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        let driver = row.get("driver").as_text().context(DQFailureSnafu {
            message: format!("Row has no driver name: {}", row.get("driver")),
        })?;
        let time = row.get("time").as_duration().context(DQFailureSnafu {
            message: format!("Row for {driver:?} has no parsed lap time: {}", row.get("time")),
        })?;

        Ok(LapRecord::new(driver, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_converted_row() {
        let row = Row::new()
            .with("driver", "Zaid Khalid")
            .with("time", Duration::from_millis(60_001));
        let lap = LapRecord::try_from(&row).unwrap();
        assert_eq!(lap, LapRecord::new("Zaid Khalid", Duration::from_millis(60_001)));
    }

    #[test]
    fn rejects_unconverted_time() {
        let row = Row::new().with("driver", "Zaid Khalid").with("time", "1:00.001");
        assert!(matches!(LapRecord::try_from(&row), Err(Error::DQFailure { .. })));
    }
}
