pub mod dashboard_handler;
pub mod producer_handler;

pub use dashboard_handler::*;
pub use producer_handler::*;
