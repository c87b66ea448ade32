pub mod combined_record;
pub mod horse;
pub mod temperature_reading;
pub mod water_reading;

pub use combined_record::CombinedRecord;
pub use horse::Horse;
pub use temperature_reading::TemperatureReading;
pub use water_reading::WaterReading;
