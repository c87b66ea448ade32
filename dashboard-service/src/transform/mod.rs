use std::collections::{HashMap, HashSet};

use herd_client::domain::{CombinedRecord, Horse, TemperatureReading, WaterReading};
use serde::Deserialize;
use time::OffsetDateTime;

/// The presentation layer's current selection.
///
/// A row must match on both axes to pass; an empty set on either axis selects
/// nothing rather than everything.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterSelection {
    pub horse_ids: Vec<String>,
    pub stalls: Vec<String>,
}

impl FilterSelection {
    /// Selection covering every horse and stall in the dimension table, the
    /// session-start default on the presentation side.
    pub fn all(horses: &[Horse]) -> Self {
        let mut stalls: Vec<String> = horses.iter().map(|h| h.stall.clone()).collect();
        stalls.sort();
        stalls.dedup();

        Self {
            horse_ids: horses.iter().map(|h| h.horse_id.clone()).collect(),
            stalls,
        }
    }
}

/// Inner-joins water and temperature readings on `(ts, horse_id)`, then
/// left-joins the horse dimension on `horse_id`.
///
/// A reading without a counterpart on the other measurement side is dropped.
/// A reading pair whose horse id has no dimension row is kept with `None`
/// name/stall fields. Output is sorted ascending by `ts`, stable within
/// equal timestamps.
pub fn join_readings(
    water: &[WaterReading],
    temperature: &[TemperatureReading],
    horses: &[Horse],
) -> Vec<CombinedRecord> {
    let temperature_by_key: HashMap<(OffsetDateTime, &str), &TemperatureReading> = temperature
        .iter()
        .map(|t| ((t.ts, t.horse_id.as_str()), t))
        .collect();
    let dimension: HashMap<&str, &Horse> =
        horses.iter().map(|h| (h.horse_id.as_str(), h)).collect();

    let mut combined: Vec<CombinedRecord> = water
        .iter()
        .filter_map(|w| {
            let t = temperature_by_key.get(&(w.ts, w.horse_id.as_str()))?;
            let dim = dimension.get(w.horse_id.as_str());
            Some(CombinedRecord {
                ts: w.ts,
                horse_id: w.horse_id.clone(),
                name: dim.map(|h| h.name.clone()),
                stall: dim.map(|h| h.stall.clone()),
                liters: w.liters,
                celsius: t.celsius,
                water_source: w.source.clone(),
                temperature_source: t.source.clone(),
            })
        })
        .collect();

    combined.sort_by_key(|r| r.ts);
    combined
}

/// Keeps rows whose horse id and stall are both in the selection.
///
/// Rows with no stall (dimension hole) never match a stall selection.
pub fn filter_combined(rows: &[CombinedRecord], selection: &FilterSelection) -> Vec<CombinedRecord> {
    let ids: HashSet<&str> = selection.horse_ids.iter().map(String::as_str).collect();
    let stalls: HashSet<&str> = selection.stalls.iter().map(String::as_str).collect();

    rows.iter()
        .filter(|r| {
            ids.contains(r.horse_id.as_str())
                && r.stall.as_deref().is_some_and(|s| stalls.contains(s))
        })
        .cloned()
        .collect()
}
