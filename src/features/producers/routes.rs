use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::producers::handlers;
use crate::features::producers::services::{DashboardService, ProducerService};

/// Create routes for the producers feature
pub fn routes(
    producer_service: Arc<ProducerService>,
    dashboard_service: Arc<DashboardService>,
) -> Router {
    let producers = Router::new()
        .route(
            "/producer",
            get(handlers::list_producers).post(handlers::create_producer),
        )
        .route(
            "/producer/{id}",
            get(handlers::get_producer)
                .put(handlers::update_producer)
                .delete(handlers::delete_producer),
        )
        .with_state(producer_service);

    let dashboards = Router::new()
        .route("/producer/dashboards", get(handlers::get_dashboards))
        .with_state(dashboard_service);

    producers.merge(dashboards)
}
