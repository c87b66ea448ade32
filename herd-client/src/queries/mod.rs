pub mod dashboard_queries;

pub use dashboard_queries::{
    latest_snapshot, metric_series, summary_means, Metric, SeriesPoint, SummaryMeans,
};
