//! Storage seam for producer records.
//!
//! Services hold an `Arc<dyn ProducerRepository>` built once in `main`, so the
//! Postgres implementation can be swapped for the in-memory one in tests.

#[cfg(test)]
pub mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::producers::dtos::{CreateProducerDto, UpdateProducerDto};
use crate::features::producers::models::{CropCount, Producer, SoilUseTotals, StateCount};

pub use postgres::PgProducerRepository;

#[async_trait]
pub trait ProducerRepository: Send + Sync {
    /// Insert a producer; the store assigns id and timestamps
    async fn create(&self, dto: &CreateProducerDto) -> Result<Producer>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Producer>>;

    /// Producers in creation order, `limit` rows starting at `offset`
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Producer>>;

    /// Apply the fields present in `dto`; `None` if no producer has this id
    async fn update(&self, id: Uuid, dto: &UpdateProducerDto) -> Result<Option<Producer>>;

    /// Remove and return the producer; `None` if no producer has this id
    async fn delete(&self, id: Uuid) -> Result<Option<Producer>>;

    async fn count(&self) -> Result<i64>;

    /// Sum of `total_area`, `None` when there are no rows
    async fn sum_total_area(&self) -> Result<Option<f64>>;

    /// Producers per distinct state, in order of first appearance
    async fn count_by_state(&self) -> Result<Vec<StateCount>>;

    /// Producers per distinct crop, in order of first appearance
    async fn count_by_crop(&self) -> Result<Vec<CropCount>>;

    async fn soil_use_totals(&self) -> Result<SoilUseTotals>;
}
