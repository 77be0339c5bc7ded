mod dashboard_service;
mod producer_service;

pub use dashboard_service::{DashboardKind, DashboardService};
pub use producer_service::ProducerService;
