use serde::Serialize;
use time::OffsetDateTime;

/// One water and one temperature reading sharing `(ts, horse_id)`, enriched
/// with dimension attributes. `name` and `stall` are `None` when the horse id
/// has no dimension row; the row itself is kept.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedRecord {
    #[serde(with = "time::serde::rfc3339")]
    pub ts: OffsetDateTime,
    pub horse_id: String,
    pub name: Option<String>,
    pub stall: Option<String>,
    pub liters: f64,
    pub celsius: f64,
    pub water_source: String,
    pub temperature_source: String,
}
