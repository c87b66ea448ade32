use herd_client::domain::CombinedRecord;
use herd_client::queries::{self, Metric};

use crate::sources::synthetic::{self, Dataset};
use crate::transform::{self, FilterSelection};
use crate::views::{self, DashboardView, MetaView};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DashboardError {
    /// The current selection matched no rows. The presentation layer shows a
    /// notice instead of metrics, charts, and the detail table.
    #[error("no rows matched the selected filters")]
    NoData,
}

/// Memoization boundary for the generate + join stages.
///
/// Built once per process; every query borrows the cached combined table and
/// recomputes only the filter and aggregation stages.
pub struct Dashboard {
    dataset: Dataset,
    combined: Vec<CombinedRecord>,
}

impl Dashboard {
    pub fn build() -> Self {
        let dataset = synthetic::generate_dataset();
        let combined =
            transform::join_readings(&dataset.water, &dataset.temperature, &dataset.horses);
        Self { dataset, combined }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn combined(&self) -> &[CombinedRecord] {
        &self.combined
    }

    /// Selection covering the whole roster, the session-start default.
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection::all(&self.dataset.horses)
    }

    pub fn meta(&self) -> MetaView {
        let mut stalls: Vec<String> = self
            .dataset
            .horses
            .iter()
            .map(|h| h.stall.clone())
            .collect();
        stalls.sort();
        stalls.dedup();

        MetaView {
            horses: self.dataset.horses.clone(),
            stalls,
        }
    }

    /// Runs the filter, aggregation, and pivot stages over the cached
    /// combined table.
    ///
    /// All parts of the returned view derive from the same filtered rows, so
    /// counts, means, charts, and the detail table stay mutually consistent.
    pub fn query(&self, selection: &FilterSelection) -> Result<DashboardView, DashboardError> {
        let rows = transform::filter_combined(&self.combined, selection);
        let means = queries::summary_means(&rows).ok_or(DashboardError::NoData)?;

        let latest = queries::latest_snapshot(&rows);
        let water = queries::metric_series(&rows, Metric::Water);
        let temperature = queries::metric_series(&rows, Metric::Temperature);

        Ok(DashboardView {
            tracked_horses: latest.len(),
            means,
            water_chart: views::chart_table(&water),
            temperature_chart: views::chart_table(&temperature),
            detail: views::detail_rows(&rows),
        })
    }
}
