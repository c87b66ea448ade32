use anyhow::Result;
use dashboard_service::{observability, pipeline::Dashboard};

/// Offline recompute tool: builds the dataset, runs a full-roster query, and
/// prints the resulting dashboard payload as pretty JSON.
fn main() -> Result<()> {
    observability::init_tracing();

    let dashboard = Dashboard::build();
    let view = dashboard.query(&dashboard.default_selection())?;

    tracing::info!(
        tracked_horses = view.tracked_horses,
        detail_rows = view.detail.len(),
        "full-roster dashboard snapshot computed"
    );

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
