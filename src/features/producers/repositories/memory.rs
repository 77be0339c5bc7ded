use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::producers::dtos::{CreateProducerDto, UpdateProducerDto};
use crate::features::producers::models::{CropCount, Producer, SoilUseTotals, StateCount};
use crate::features::producers::repositories::ProducerRepository;

/// Vec-backed repository; insertion order is creation order
#[derive(Default)]
pub struct InMemoryProducerRepository {
    producers: RwLock<Vec<Producer>>,
}

impl InMemoryProducerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProducerRepository for InMemoryProducerRepository {
    async fn create(&self, dto: &CreateProducerDto) -> Result<Producer> {
        let now = Utc::now();
        let producer = Producer {
            id: Uuid::new_v4(),
            name: dto.name.clone(),
            tax_id: dto.tax_id.clone(),
            farm_name: dto.farm_name.clone(),
            city: dto.city.clone(),
            state: dto.state.clone(),
            total_area: dto.total_area,
            agricultural_area: dto.agricultural_area,
            vegetation_area: dto.vegetation_area,
            crops: dto.crops.clone(),
            created_at: now,
            updated_at: now,
        };
        self.producers.write().await.push(producer.clone());
        Ok(producer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Producer>> {
        let producers = self.producers.read().await;
        Ok(producers.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Producer>> {
        let producers = self.producers.read().await;
        Ok(producers
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, dto: &UpdateProducerDto) -> Result<Option<Producer>> {
        let mut producers = self.producers.write().await;
        let Some(producer) = producers.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(name) = &dto.name {
            producer.name = name.clone();
        }
        if let Some(tax_id) = &dto.tax_id {
            producer.tax_id = tax_id.clone();
        }
        if let Some(farm_name) = &dto.farm_name {
            producer.farm_name = farm_name.clone();
        }
        if let Some(city) = &dto.city {
            producer.city = city.clone();
        }
        if let Some(state) = &dto.state {
            producer.state = state.clone();
        }
        if let Some(total_area) = dto.total_area {
            producer.total_area = total_area;
        }
        if let Some(agricultural_area) = dto.agricultural_area {
            producer.agricultural_area = agricultural_area;
        }
        if let Some(vegetation_area) = dto.vegetation_area {
            producer.vegetation_area = vegetation_area;
        }
        if let Some(crops) = &dto.crops {
            producer.crops = crops.clone();
        }
        producer.updated_at = Utc::now();

        Ok(Some(producer.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Producer>> {
        let mut producers = self.producers.write().await;
        Ok(producers
            .iter()
            .position(|p| p.id == id)
            .map(|index| producers.remove(index)))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.producers.read().await.len() as i64)
    }

    async fn sum_total_area(&self) -> Result<Option<f64>> {
        let producers = self.producers.read().await;
        if producers.is_empty() {
            return Ok(None);
        }
        Ok(Some(producers.iter().map(|p| p.total_area).sum()))
    }

    async fn count_by_state(&self) -> Result<Vec<StateCount>> {
        let producers = self.producers.read().await;
        let mut counts: Vec<StateCount> = Vec::new();
        for producer in producers.iter() {
            match counts.iter_mut().find(|c| c.state == producer.state) {
                Some(entry) => entry.count += 1,
                None => counts.push(StateCount {
                    state: producer.state.clone(),
                    count: 1,
                }),
            }
        }
        Ok(counts)
    }

    async fn count_by_crop(&self) -> Result<Vec<CropCount>> {
        let producers = self.producers.read().await;
        let mut crops: Vec<&String> = Vec::new();
        for crop in producers.iter().flat_map(|p| p.crops.iter()) {
            if !crops.contains(&crop) {
                crops.push(crop);
            }
        }

        Ok(crops
            .into_iter()
            .map(|crop| CropCount {
                crop: crop.clone(),
                count: producers.iter().filter(|p| p.crops.contains(crop)).count() as i64,
            })
            .collect())
    }

    async fn soil_use_totals(&self) -> Result<SoilUseTotals> {
        let producers = self.producers.read().await;
        if producers.is_empty() {
            return Ok(SoilUseTotals::default());
        }
        Ok(SoilUseTotals {
            total_area: Some(producers.iter().map(|p| p.total_area).sum()),
            agricultural_area: Some(producers.iter().map(|p| p.agricultural_area).sum()),
            vegetation_area: Some(producers.iter().map(|p| p.vegetation_area).sum()),
        })
    }
}
