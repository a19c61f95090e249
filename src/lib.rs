pub mod errors;
pub mod modules;

pub use errors::{CustomResult, Error};
pub use modules::models::driver::{DriverAverage, DriverBestLap, DriverSummary, TopDriverRow};
pub use modules::models::lap::LapRecord;
pub use modules::models::table::{Row, Table, Value};
pub use modules::quality_control::Schema;
