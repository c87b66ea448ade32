pub mod domain;
pub mod queries;

pub use domain::{CombinedRecord, Horse, TemperatureReading, WaterReading};
