use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::pipeline::{Dashboard, DashboardError};
use crate::transform::FilterSelection;
use crate::views::{DashboardView, MetaView};

#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard>,
}

pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/api/meta", get(meta))
        .route("/api/dashboard", post(dashboard_query))
        .with_state(AppState { dashboard })
}

/// Tagged query payload: either the full view or the no-data notice. Both
/// are HTTP 200; an empty result is a warning for the user, not a protocol
/// error.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResponse {
    Ok(DashboardView),
    NoData { message: String },
}

async fn meta(State(state): State<AppState>) -> Json<MetaView> {
    metrics::counter!("meta_requests_total").increment(1);
    Json(state.dashboard.meta())
}

async fn dashboard_query(
    State(state): State<AppState>,
    Json(selection): Json<FilterSelection>,
) -> Json<QueryResponse> {
    metrics::counter!("dashboard_query_requests_total").increment(1);

    match state.dashboard.query(&selection) {
        Ok(view) => Json(QueryResponse::Ok(view)),
        Err(e @ DashboardError::NoData) => {
            metrics::counter!("dashboard_empty_result_total").increment(1);
            tracing::debug!(
                horses = selection.horse_ids.len(),
                stalls = selection.stalls.len(),
                "dashboard query matched no rows"
            );
            Json(QueryResponse::NoData {
                message: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_response_is_tagged_with_its_status() {
        let response = QueryResponse::NoData {
            message: "no rows matched the selected filters".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"no_data\""));
        assert!(json.contains("no rows matched"));
    }

    #[test]
    fn ok_response_flattens_the_view_next_to_its_status() {
        let dashboard = Dashboard::build();
        let view = dashboard.query(&dashboard.default_selection()).unwrap();

        let json = serde_json::to_string(&QueryResponse::Ok(view)).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"tracked_horses\":4"));
        assert!(json.contains("\"water_chart\""));
    }
}
