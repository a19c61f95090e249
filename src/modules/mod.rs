pub mod config;
pub mod csv_table;
pub mod pipeline;
pub mod quality_control;

pub mod models {
    pub mod driver;
    pub mod lap;
    pub mod table;
}

pub mod helpers {
    pub mod driver;
    pub mod logging;
    pub mod math;
    pub mod time;
}
