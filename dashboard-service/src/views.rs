use std::collections::BTreeMap;

use herd_client::domain::{CombinedRecord, Horse};
use herd_client::queries::{SeriesPoint, SummaryMeans};
use serde::Serialize;
use time::OffsetDateTime;

/// Filter-widget payload: the full roster plus the distinct stall labels,
/// sorted.
#[derive(Debug, Clone, Serialize)]
pub struct MetaView {
    pub horses: Vec<Horse>,
    pub stalls: Vec<String>,
}

/// Wide, timestamp-indexed pivot of one metric: one column per horse id in
/// `horse_ids` order, one row per distinct timestamp. `None` cells are gaps
/// where a horse has no reading at that timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTable {
    pub horse_ids: Vec<String>,
    pub rows: Vec<ChartRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    #[serde(with = "time::serde::rfc3339")]
    pub ts: OffsetDateTime,
    pub values: Vec<Option<f64>>,
}

/// One row of the combined detail table. Field order is the rendered column
/// order; the two source labels are disambiguated by metric.
#[derive(Debug, Clone, Serialize)]
pub struct DetailRow {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub horse_id: String,
    pub horse_name: Option<String>,
    pub stall: Option<String>,
    pub water_liters: f64,
    pub temperature_c: f64,
    pub water_source: String,
    pub temperature_source: String,
}

/// Everything one dashboard query produces for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub tracked_horses: usize,
    pub means: SummaryMeans,
    pub water_chart: ChartTable,
    pub temperature_chart: ChartTable,
    pub detail: Vec<DetailRow>,
}

/// Reshapes per-horse series into the wide chart table consumed by the
/// charting widget.
pub fn chart_table(series: &BTreeMap<String, Vec<SeriesPoint>>) -> ChartTable {
    let horse_ids: Vec<String> = series.keys().cloned().collect();

    let mut by_ts: BTreeMap<OffsetDateTime, Vec<Option<f64>>> = BTreeMap::new();
    for (col, points) in series.values().enumerate() {
        for point in points {
            by_ts
                .entry(point.ts)
                .or_insert_with(|| vec![None; horse_ids.len()])[col] = Some(point.value);
        }
    }

    ChartTable {
        horse_ids,
        rows: by_ts
            .into_iter()
            .map(|(ts, values)| ChartRow { ts, values })
            .collect(),
    }
}

pub fn detail_rows(rows: &[CombinedRecord]) -> Vec<DetailRow> {
    rows.iter()
        .map(|r| DetailRow {
            timestamp: r.ts,
            horse_id: r.horse_id.clone(),
            horse_name: r.name.clone(),
            stall: r.stall.clone(),
            water_liters: r.liters,
            temperature_c: r.celsius,
            water_source: r.water_source.clone(),
            temperature_source: r.temperature_source.clone(),
        })
        .collect()
}
