use herd_client::domain::{Horse, TemperatureReading, WaterReading};
use time::{macros::datetime, Duration, OffsetDateTime};

/// Timestamp of the first reading in the simulated window.
pub const BASE_TS: OffsetDateTime = datetime!(2026-01-05 06:00:00 UTC);

/// Hours of readings generated per horse.
pub const WINDOW_HOURS: i64 = 24;

pub const WATER_SOURCE: &str = "drinking-station";
pub const TEMPERATURE_SOURCE: &str = "thermo-collar";

/// The three simulated source tables. Built once per process, read-only after.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub horses: Vec<Horse>,
    pub water: Vec<WaterReading>,
    pub temperature: Vec<TemperatureReading>,
}

/// Simulates the stable's IoT sources: the horse dimension plus one water and
/// one temperature reading per horse per hour over a fixed 24 h window.
///
/// The values follow small per-horse and per-hour offsets so the series stay
/// visually distinguishable. Pure arithmetic over constant inputs; repeated
/// calls return identical tables.
pub fn generate_dataset() -> Dataset {
    let horses = vec![
        horse("H-001", "Aava", "Stall A"),
        horse("H-002", "Utu", "Stall B"),
        horse("H-003", "Routa", "Stall A"),
        horse("H-004", "Säde", "Stall C"),
    ];

    let rows = horses.len() * WINDOW_HOURS as usize;
    let mut water = Vec::with_capacity(rows);
    let mut temperature = Vec::with_capacity(rows);

    for (idx, h) in horses.iter().enumerate() {
        for hour in 0..WINDOW_HOURS {
            let ts = BASE_TS + Duration::hours(hour);
            water.push(WaterReading {
                ts,
                horse_id: h.horse_id.clone(),
                liters: round2(1.4 + idx as f64 * 0.25 + (hour % 6) as f64 * 0.15),
                source: WATER_SOURCE.to_string(),
            });
            temperature.push(TemperatureReading {
                ts,
                horse_id: h.horse_id.clone(),
                celsius: round2(36.8 + idx as f64 * 0.08 + (hour % 8) as f64 * 0.05),
                source: TEMPERATURE_SOURCE.to_string(),
            });
        }
    }

    Dataset {
        horses,
        water,
        temperature,
    }
}

fn horse(horse_id: &str, name: &str, stall: &str) -> Horse {
    Horse {
        horse_id: horse_id.to_string(),
        name: name.to_string(),
        stall: stall.to_string(),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
