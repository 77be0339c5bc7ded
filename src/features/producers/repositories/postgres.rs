use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::producers::dtos::{CreateProducerDto, UpdateProducerDto};
use crate::features::producers::models::{CropCount, Producer, SoilUseTotals, StateCount};
use crate::features::producers::repositories::ProducerRepository;

/// Producer storage backed by the `producers` table
pub struct PgProducerRepository {
    pool: PgPool,
}

impl PgProducerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        tracing::error!("Failed to {}: {:?}", context, e);
        AppError::Database(e)
    }
}

#[async_trait]
impl ProducerRepository for PgProducerRepository {
    async fn create(&self, dto: &CreateProducerDto) -> Result<Producer> {
        sqlx::query_as::<_, Producer>(
            r#"
            INSERT INTO producers (
                name, tax_id, farm_name, city, state,
                total_area, agricultural_area, vegetation_area, crops
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, tax_id, farm_name, city, state,
                      total_area, agricultural_area, vegetation_area, crops,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.tax_id)
        .bind(&dto.farm_name)
        .bind(&dto.city)
        .bind(&dto.state)
        .bind(dto.total_area)
        .bind(dto.agricultural_area)
        .bind(dto.vegetation_area)
        .bind(&dto.crops)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("insert producer"))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Producer>> {
        sqlx::query_as::<_, Producer>(
            r#"
            SELECT id, name, tax_id, farm_name, city, state,
                   total_area, agricultural_area, vegetation_area, crops,
                   created_at, updated_at
            FROM producers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("get producer"))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Producer>> {
        sqlx::query_as::<_, Producer>(
            r#"
            SELECT id, name, tax_id, farm_name, city, state,
                   total_area, agricultural_area, vegetation_area, crops,
                   created_at, updated_at
            FROM producers
            ORDER BY created_at, id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list producers"))
    }

    async fn update(&self, id: Uuid, dto: &UpdateProducerDto) -> Result<Option<Producer>> {
        sqlx::query_as::<_, Producer>(
            r#"
            UPDATE producers
            SET name = COALESCE($1, name),
                tax_id = COALESCE($2, tax_id),
                farm_name = COALESCE($3, farm_name),
                city = COALESCE($4, city),
                state = COALESCE($5, state),
                total_area = COALESCE($6, total_area),
                agricultural_area = COALESCE($7, agricultural_area),
                vegetation_area = COALESCE($8, vegetation_area),
                crops = COALESCE($9, crops),
                updated_at = clock_timestamp()
            WHERE id = $10
            RETURNING id, name, tax_id, farm_name, city, state,
                      total_area, agricultural_area, vegetation_area, crops,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.tax_id)
        .bind(&dto.farm_name)
        .bind(&dto.city)
        .bind(&dto.state)
        .bind(dto.total_area)
        .bind(dto.agricultural_area)
        .bind(dto.vegetation_area)
        .bind(&dto.crops)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("update producer"))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Producer>> {
        sqlx::query_as::<_, Producer>(
            r#"
            DELETE FROM producers
            WHERE id = $1
            RETURNING id, name, tax_id, farm_name, city, state,
                      total_area, agricultural_area, vegetation_area, crops,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("delete producer"))
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM producers")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count producers"))
    }

    async fn sum_total_area(&self) -> Result<Option<f64>> {
        sqlx::query_scalar::<_, Option<f64>>("SELECT SUM(total_area) FROM producers")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("sum total area"))
    }

    async fn count_by_state(&self) -> Result<Vec<StateCount>> {
        sqlx::query_as::<_, StateCount>(
            r#"
            SELECT state, COUNT(*) AS count
            FROM producers
            GROUP BY state
            ORDER BY MIN(created_at), state
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("count producers by state"))
    }

    async fn count_by_crop(&self) -> Result<Vec<CropCount>> {
        // DISTINCT guards against a crop listed twice on the same producer
        sqlx::query_as::<_, CropCount>(
            r#"
            SELECT c.crop AS crop, COUNT(DISTINCT p.id) AS count
            FROM producers p
            CROSS JOIN LATERAL unnest(p.crops) AS c(crop)
            GROUP BY c.crop
            ORDER BY MIN(p.created_at), c.crop
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("count producers by crop"))
    }

    async fn soil_use_totals(&self) -> Result<SoilUseTotals> {
        sqlx::query_as::<_, SoilUseTotals>(
            r#"
            SELECT SUM(total_area) AS total_area,
                   SUM(agricultural_area) AS agricultural_area,
                   SUM(vegetation_area) AS vegetation_area
            FROM producers
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("sum soil use"))
    }
}
