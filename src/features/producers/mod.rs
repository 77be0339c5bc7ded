//! Farm producer records and the aggregate dashboards computed over them.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/producer` | Paginated list (`page`, `limit`) |
//! | GET | `/producer/dashboards` | Five aggregate statistics, fixed order |
//! | GET | `/producer/{id}` | Single producer |
//! | POST | `/producer` | Create (CPF/CNPJ and area checks) |
//! | PUT | `/producer/{id}` | Partial update |
//! | DELETE | `/producer/{id}` | Delete, returns the removed record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgProducerRepository, ProducerRepository};
pub use services::{DashboardService, ProducerService};
