use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::producers::models::Producer;

/// Request DTO for creating a producer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProducerDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// CPF (11 digits) or CNPJ (14 digits), punctuation allowed
    #[validate(length(min = 1, message = "taxId must not be empty"))]
    pub tax_id: String,

    #[validate(length(min = 1, message = "farmName must not be empty"))]
    pub farm_name: String,

    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,

    #[validate(length(min = 1, message = "state must not be empty"))]
    pub state: String,

    #[validate(range(min = 0.0, message = "totalArea must not be negative"))]
    pub total_area: f64,

    #[validate(range(min = 0.0, message = "agriculturalArea must not be negative"))]
    pub agricultural_area: f64,

    #[validate(range(min = 0.0, message = "vegetationArea must not be negative"))]
    pub vegetation_area: f64,

    #[validate(custom(function = "validate_crops"))]
    pub crops: Vec<String>,
}

/// Request DTO for a partial producer update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProducerDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "taxId must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,

    #[validate(length(min = 1, message = "farmName must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_name: Option<String>,

    #[validate(length(min = 1, message = "city must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[validate(length(min = 1, message = "state must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[validate(range(min = 0.0, message = "totalArea must not be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area: Option<f64>,

    #[validate(range(min = 0.0, message = "agriculturalArea must not be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agricultural_area: Option<f64>,

    #[validate(range(min = 0.0, message = "vegetationArea must not be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetation_area: Option<f64>,

    #[validate(custom(function = "validate_crops"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crops: Option<Vec<String>>,
}

#[allow(clippy::ptr_arg)]
fn validate_crops(crops: &Vec<String>) -> Result<(), ValidationError> {
    if crops.iter().any(|crop| crop.trim().is_empty()) {
        let mut err = ValidationError::new("empty_crop");
        err.message = Some("crops must not contain empty values".into());
        return Err(err);
    }
    Ok(())
}

/// Response DTO for producer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerResponseDto {
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

impl From<Producer> for ProducerResponseDto {
    fn from(p: Producer) -> Self {
        Self {
            id: p.id,
            name: p.name,
            tax_id: p.tax_id,
            farm_name: p.farm_name,
            city: p.city,
            state: p.state,
            total_area: p.total_area,
            agricultural_area: p.agricultural_area,
            vegetation_area: p.vegetation_area,
            crops: p.crops,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
