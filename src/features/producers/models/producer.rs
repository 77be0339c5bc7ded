use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for producer
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Producer {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub farm_name: String,
    pub city: String,
    pub state: String,
    pub total_area: f64,
    pub agricultural_area: f64,
    pub vegetation_area: f64,
    pub crops: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Number of producers registered in one state
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StateCount {
    pub state: String,
    pub count: i64,
}

/// Number of producers growing one crop
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CropCount {
    pub crop: String,
    pub count: i64,
}

/// Area sums across all producers; every field is NULL on an empty table
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct SoilUseTotals {
    pub total_area: Option<f64>,
    pub agricultural_area: Option<f64>,
    pub vegetation_area: Option<f64>,
}
