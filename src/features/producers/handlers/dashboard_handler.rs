use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::producers::dtos::DashboardEntryDto;
use crate::features::producers::services::DashboardService;
use crate::shared::types::ErrorResponse;

/// Get the producer dashboards
///
/// Returns five statistics in a fixed order: producer count, total area,
/// producers by state, producers by crop, and soil use percentages.
#[utoipa::path(
    get,
    path = "/producer/dashboards",
    responses(
        (status = 200, description = "Dashboard statistics", body = [DashboardEntryDto]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboards(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<Vec<DashboardEntryDto>>> {
    let dashboards = service.get_dashboards().await?;
    Ok(Json(dashboards))
}
