use std::collections::BTreeMap;

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::CombinedRecord;

/// Which measurement column of a [`CombinedRecord`] a query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Water,
    Temperature,
}

impl Metric {
    pub fn value(self, record: &CombinedRecord) -> f64 {
        match self {
            Metric::Water => record.liters,
            Metric::Temperature => record.celsius,
        }
    }
}

/// One point of a per-horse time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    #[serde(with = "time::serde::rfc3339")]
    pub ts: OffsetDateTime,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMeans {
    pub water_liters: f64,
    pub temperature_c: f64,
}

/// Latest row per distinct horse id, in horse-id order.
///
/// Expects `rows` sorted ascending by `ts` (the join engine's output order),
/// so the last occurrence per horse carries that horse's maximum timestamp.
pub fn latest_snapshot(rows: &[CombinedRecord]) -> Vec<CombinedRecord> {
    let mut latest: BTreeMap<&str, &CombinedRecord> = BTreeMap::new();
    for row in rows {
        latest.insert(row.horse_id.as_str(), row);
    }
    latest.into_values().cloned().collect()
}

/// Scalar means of both measurement columns across all rows, or `None` when
/// the slice is empty.
pub fn summary_means(rows: &[CombinedRecord]) -> Option<SummaryMeans> {
    if rows.is_empty() {
        return None;
    }

    let n = rows.len() as f64;
    let water: f64 = rows.iter().map(|r| r.liters).sum();
    let temperature: f64 = rows.iter().map(|r| r.celsius).sum();

    Some(SummaryMeans {
        water_liters: water / n,
        temperature_c: temperature / n,
    })
}

/// Per-horse time series of one metric.
///
/// Groups by `(ts, horse_id)` with a mean, collapsing any duplicate keys,
/// then splits into one ascending-`ts` series per horse id. Timestamps a
/// horse has no row for are absent from its series, never zero-filled.
pub fn metric_series(
    rows: &[CombinedRecord],
    metric: Metric,
) -> BTreeMap<String, Vec<SeriesPoint>> {
    let mut grouped: BTreeMap<(String, OffsetDateTime), (f64, u32)> = BTreeMap::new();
    for row in rows {
        let entry = grouped
            .entry((row.horse_id.clone(), row.ts))
            .or_insert((0.0, 0));
        entry.0 += metric.value(row);
        entry.1 += 1;
    }

    let mut series: BTreeMap<String, Vec<SeriesPoint>> = BTreeMap::new();
    for ((horse_id, ts), (sum, count)) in grouped {
        series.entry(horse_id).or_default().push(SeriesPoint {
            ts,
            value: sum / f64::from(count),
        });
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record(ts: OffsetDateTime, horse_id: &str, liters: f64, celsius: f64) -> CombinedRecord {
        CombinedRecord {
            ts,
            horse_id: horse_id.to_string(),
            name: Some("Aava".to_string()),
            stall: Some("Stall A".to_string()),
            liters,
            celsius,
            water_source: "drinking-station".to_string(),
            temperature_source: "thermo-collar".to_string(),
        }
    }

    #[test]
    fn latest_snapshot_keeps_one_row_per_horse_at_max_ts() {
        let rows = vec![
            record(datetime!(2026-01-05 06:00:00 UTC), "H-001", 1.4, 36.8),
            record(datetime!(2026-01-05 06:00:00 UTC), "H-002", 1.65, 36.88),
            record(datetime!(2026-01-05 07:00:00 UTC), "H-001", 1.55, 36.85),
        ];

        let latest = latest_snapshot(&rows);

        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].horse_id, "H-001");
        assert_eq!(latest[0].ts, datetime!(2026-01-05 07:00:00 UTC));
        assert_eq!(latest[1].horse_id, "H-002");
        assert_eq!(latest[1].ts, datetime!(2026-01-05 06:00:00 UTC));
    }

    #[test]
    fn summary_means_average_both_columns() {
        let rows = vec![
            record(datetime!(2026-01-05 06:00:00 UTC), "H-001", 1.0, 36.0),
            record(datetime!(2026-01-05 07:00:00 UTC), "H-001", 2.0, 38.0),
        ];

        let means = summary_means(&rows).unwrap();
        assert!((means.water_liters - 1.5).abs() < 1e-12);
        assert!((means.temperature_c - 37.0).abs() < 1e-12);
    }

    #[test]
    fn summary_means_empty_input_yields_none() {
        assert!(summary_means(&[]).is_none());
    }

    #[test]
    fn metric_series_splits_per_horse_in_ts_order() {
        let rows = vec![
            record(datetime!(2026-01-05 07:00:00 UTC), "H-001", 1.55, 36.85),
            record(datetime!(2026-01-05 06:00:00 UTC), "H-001", 1.4, 36.8),
            record(datetime!(2026-01-05 06:00:00 UTC), "H-002", 1.65, 36.88),
        ];

        let series = metric_series(&rows, Metric::Water);

        assert_eq!(series.len(), 2);
        let h1 = &series["H-001"];
        assert_eq!(h1.len(), 2);
        assert_eq!(h1[0].ts, datetime!(2026-01-05 06:00:00 UTC));
        assert_eq!(h1[0].value, 1.4);
        assert_eq!(h1[1].value, 1.55);
        assert_eq!(series["H-002"].len(), 1);
    }

    #[test]
    fn metric_series_collapses_duplicate_keys_to_their_mean() {
        let ts = datetime!(2026-01-05 06:00:00 UTC);
        let rows = vec![
            record(ts, "H-001", 1.0, 36.0),
            record(ts, "H-001", 2.0, 37.0),
        ];

        let water = metric_series(&rows, Metric::Water);
        assert_eq!(water["H-001"], vec![SeriesPoint { ts, value: 1.5 }]);

        let temperature = metric_series(&rows, Metric::Temperature);
        assert_eq!(temperature["H-001"], vec![SeriesPoint { ts, value: 36.5 }]);
    }
}
