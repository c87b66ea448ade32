pub mod pipeline;
pub mod config;
pub mod sources;
pub mod transform;
pub mod views;
pub mod http;
pub mod observability;
pub mod metrics_server;

pub use pipeline::{Dashboard, DashboardError};
