use std::sync::Arc;

use futures::future::try_join_all;

use crate::core::error::Result;
use crate::features::producers::dtos::{
    ByCropDto, BySoilUseDto, ByStateDto, DashboardEntryDto, ProducerCountDto, SoilUseDto,
    TotalAreaDto,
};
use crate::features::producers::repositories::ProducerRepository;

/// The dashboard statistics, in response order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Count,
    TotalArea,
    ByState,
    ByCrop,
    BySoilUse,
}

impl DashboardKind {
    pub const ALL: [DashboardKind; 5] = [
        DashboardKind::Count,
        DashboardKind::TotalArea,
        DashboardKind::ByState,
        DashboardKind::ByCrop,
        DashboardKind::BySoilUse,
    ];
}

/// Service for the aggregate producer dashboards
pub struct DashboardService {
    repository: Arc<dyn ProducerRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn ProducerRepository>) -> Self {
        Self { repository }
    }

    /// Run every statistic concurrently; the result follows `DashboardKind::ALL`
    pub async fn get_dashboards(&self) -> Result<Vec<DashboardEntryDto>> {
        try_join_all(DashboardKind::ALL.into_iter().map(|kind| self.compute(kind))).await
    }

    pub async fn compute(&self, kind: DashboardKind) -> Result<DashboardEntryDto> {
        let entry = match kind {
            DashboardKind::Count => DashboardEntryDto::Count(ProducerCountDto {
                count: self.repository.count().await?,
            }),
            DashboardKind::TotalArea => DashboardEntryDto::TotalArea(TotalAreaDto {
                total_area: self.repository.sum_total_area().await?,
            }),
            DashboardKind::ByState => DashboardEntryDto::ByState(ByStateDto {
                by_state: self
                    .repository
                    .count_by_state()
                    .await?
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            }),
            DashboardKind::ByCrop => DashboardEntryDto::ByCrop(ByCropDto {
                by_crop: self
                    .repository
                    .count_by_crop()
                    .await?
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            }),
            DashboardKind::BySoilUse => {
                let totals = self.repository.soil_use_totals().await?;
                DashboardEntryDto::BySoilUse(BySoilUseDto {
                    by_soil_use: SoilUseDto {
                        agricultural_area_pct: percentage(
                            totals.agricultural_area,
                            totals.total_area,
                        ),
                        vegetation_area_pct: percentage(totals.vegetation_area, totals.total_area),
                    },
                })
            }
        };

        Ok(entry)
    }
}

/// Rounded share of `total` in percent; `None` when `total` is absent or zero
fn percentage(part: Option<f64>, total: Option<f64>) -> Option<f64> {
    match total {
        Some(total) if total > 0.0 => Some((100.0 * part.unwrap_or(0.0) / total).round()),
        _ => None,
    }
}
