use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::producers::models::{CropCount, StateCount};

/// `{ "count": n }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProducerCountDto {
    pub count: i64,
}

/// `{ "totalArea": n }`, null when no producer is registered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalAreaDto {
    pub total_area: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StateCountDto {
    pub state: String,
    pub count: i64,
}

impl From<StateCount> for StateCountDto {
    fn from(s: StateCount) -> Self {
        Self {
            state: s.state,
            count: s.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ByStateDto {
    pub by_state: Vec<StateCountDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CropCountDto {
    pub crop: String,
    pub count: i64,
}

impl From<CropCount> for CropCountDto {
    fn from(c: CropCount) -> Self {
        Self {
            crop: c.crop,
            count: c.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ByCropDto {
    pub by_crop: Vec<CropCountDto>,
}

/// Share of the summed total area, in whole percent.
/// Both values are null when the summed total area is zero or absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoilUseDto {
    pub agricultural_area_pct: Option<f64>,
    pub vegetation_area_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BySoilUseDto {
    pub by_soil_use: SoilUseDto,
}

/// One element of the dashboard array; serialized without a tag so each
/// entry is the bare statistic object
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum DashboardEntryDto {
    Count(ProducerCountDto),
    TotalArea(TotalAreaDto),
    ByState(ByStateDto),
    ByCrop(ByCropDto),
    BySoilUse(BySoilUseDto),
}
